//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::optimizer::Advisor;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn FullRepository>,
    /// Optimization service with deterministic fallbacks
    pub advisor: Advisor,
}

impl AppState {
    /// Create a new application state with the given repository and advisor.
    pub fn new(repository: Arc<dyn FullRepository>, advisor: Advisor) -> Self {
        Self {
            repository,
            advisor,
        }
    }

    /// Repository plus deterministic computations only.
    pub fn basic(repository: Arc<dyn FullRepository>) -> Self {
        Self::new(repository, Advisor::basic())
    }
}
