//! Service layer: pure computations and the orchestration built on them.
//!
//! The computation modules (`variance`, `insights`, `maintenance_alerts`,
//! `recommendations`, `voyage_plan`) take plain data and return plain data.
//! The orchestration modules (`voyages`, `maintenance`, `fleet`) validate
//! requests, talk to the repository and the [`crate::optimizer::Advisor`], and
//! are what the HTTP handlers call.

pub mod error;
pub mod fleet;
pub mod insights;
pub mod maintenance;
pub mod maintenance_alerts;
pub mod recommendations;
pub mod variance;
pub mod voyage_plan;
pub mod voyages;

pub use error::{ServiceError, ServiceResult};
pub use insights::generate_insights;
pub use maintenance_alerts::{classify_alerts, days_until, AlertBuckets, MaintenanceAlert};
pub use recommendations::basic_recommendations;
pub use variance::{compute_variance, MetricVariance, StatusLabel, VarianceReport};
pub use voyage_plan::create_basic_plan;
