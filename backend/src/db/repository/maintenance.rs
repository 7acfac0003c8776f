use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::RepositoryResult;
use crate::models::{MaintenanceId, MaintenanceRecord, NewMaintenance, ShipId};

/// Filter for maintenance listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaintenanceQuery {
    pub ship_id: Option<ShipId>,
    /// Only records scheduled at or before this instant.
    pub scheduled_before: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    /// Store a new record. The referenced ship must exist.
    async fn insert_maintenance(&self, record: NewMaintenance)
        -> RepositoryResult<MaintenanceRecord>;

    /// Fetch a record, or `NotFound`.
    async fn get_maintenance(&self, id: MaintenanceId) -> RepositoryResult<MaintenanceRecord>;

    async fn update_maintenance(
        &self,
        record: &MaintenanceRecord,
    ) -> RepositoryResult<MaintenanceRecord>;

    /// Records matching the query, ascending by `scheduled_date`.
    async fn list_maintenance(
        &self,
        query: MaintenanceQuery,
    ) -> RepositoryResult<Vec<MaintenanceRecord>>;
}
