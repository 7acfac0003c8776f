//! Storage layer for fleet data.
//!
//! The HTTP layer and the orchestration services only see
//! [`FullRepository`]; implementations are swapped via [`RepositoryFactory`].
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  HTTP handlers                              │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  services - planning, feedback, alerts      │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  repository traits                          │
//! └───────────────────┬─────────────────────────┘
//!                     │
//!     ┌───────────────▼─────────────────┐
//!     │  LocalRepository (in-memory)    │
//!     └─────────────────────────────────┘
//! ```

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod seed;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, FuelLogRepository, FullRepository, MaintenanceQuery, MaintenanceRepository,
    RepositoryError, RepositoryResult, ShipRepository, VoyageQuery, VoyageRepository,
};
pub use seed::{seed_demo_data, DemoSeed};
