//! Repository factory for dependency injection.
//!
//! Creates repository instances from runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};
use crate::config::RepositorySettings;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryType {
    /// In-memory local repository
    #[default]
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" | "in-memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use voyage_planner::db::RepositoryFactory;
///
/// let repo = RepositoryFactory::create_local();
/// # let _ = repo;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    pub fn create(repo_type: RepositoryType) -> Arc<dyn FullRepository> {
        match repo_type {
            RepositoryType::Local => Self::create_local(),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create the repository named by the `[repository]` settings.
    pub fn from_settings(
        settings: &RepositorySettings,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = settings.repo_type.parse::<RepositoryType>().map_err(|e| {
            RepositoryError::ConfigurationError {
                message: format!("Invalid repository type: {}", e),
                context: ErrorContext::new("create_repository")
                    .with_details(settings.repo_type.clone()),
            }
        })?;
        log::info!("Using {} repository", repo_type.as_str());
        Ok(Self::create(repo_type))
    }
}
