use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewShip, Ship, ShipId};

/// Ship registry plus the store's health check.
#[async_trait]
pub trait ShipRepository: Send + Sync {
    /// Whether the underlying store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    async fn insert_ship(&self, ship: NewShip) -> RepositoryResult<Ship>;

    /// Fetch a ship, or `NotFound`.
    async fn get_ship(&self, ship_id: ShipId) -> RepositoryResult<Ship>;

    async fn list_ships(&self) -> RepositoryResult<Vec<Ship>>;
}
