use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::RepositoryResult;
use crate::models::{FuelLog, NewFuelLog, ShipId};

#[async_trait]
pub trait FuelLogRepository: Send + Sync {
    /// Store a sample. Ship and voyage must exist; a missing timestamp means "now".
    async fn insert_fuel_log(&self, log: NewFuelLog) -> RepositoryResult<FuelLog>;

    /// Samples for a ship taken at or after `since`, newest first, at most `limit`.
    async fn recent_fuel_logs(
        &self,
        ship_id: ShipId,
        since: DateTime<Utc>,
        limit: usize,
    ) -> RepositoryResult<Vec<FuelLog>>;
}
