use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewVoyage, ShipId, Voyage, VoyageId};

/// Filter and window for voyage listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoyageQuery {
    pub ship_id: Option<ShipId>,
    pub offset: usize,
    pub limit: usize,
}

impl Default for VoyageQuery {
    fn default() -> Self {
        Self {
            ship_id: None,
            offset: 0,
            limit: 10,
        }
    }
}

#[async_trait]
pub trait VoyageRepository: Send + Sync {
    async fn insert_voyage(&self, voyage: NewVoyage) -> RepositoryResult<Voyage>;

    /// Fetch a voyage, or `NotFound`.
    async fn get_voyage(&self, voyage_id: VoyageId) -> RepositoryResult<Voyage>;

    /// Replace a stored voyage. The stored `updated_at` is refreshed.
    async fn update_voyage(&self, voyage: &Voyage) -> RepositoryResult<Voyage>;

    /// Voyages matching the query, newest (`created_at`) first.
    async fn list_voyages(&self, query: VoyageQuery) -> RepositoryResult<Vec<Voyage>>;

    /// Number of voyages matching the ship filter, ignoring the window.
    async fn count_voyages(&self, ship_id: Option<ShipId>) -> RepositoryResult<usize>;
}
