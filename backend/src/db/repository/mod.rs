//! Repository trait definitions for fleet data.
//!
//! One focused trait per record family; [`FullRepository`] bundles them for
//! the HTTP layer and the orchestration services.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`ship`]: ship registry and store health
//! - [`voyage`]: voyages, plans and actuals
//! - [`maintenance`]: scheduled maintenance
//! - [`fuel_log`]: fuel/usage samples

pub mod error;
pub mod fuel_log;
pub mod maintenance;
pub mod ship;
pub mod voyage;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use fuel_log::FuelLogRepository;
pub use maintenance::{MaintenanceQuery, MaintenanceRepository};
pub use ship::ShipRepository;
pub use voyage::{VoyageQuery, VoyageRepository};

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements all four traits.
pub trait FullRepository:
    ShipRepository + VoyageRepository + MaintenanceRepository + FuelLogRepository
{
}

impl<T> FullRepository for T where
    T: ShipRepository + VoyageRepository + MaintenanceRepository + FuelLogRepository
{
}
