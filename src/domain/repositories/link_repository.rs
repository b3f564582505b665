//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage port for links.
///
/// Stores guarantee uniqueness of `path` and atomicity of single-record
/// create and query operations; nothing above this trait locks or retries
/// on their behalf.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the path is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Returns every link whose path equals `path` exactly.
    ///
    /// An empty vector means the path is unknown. More than one element means
    /// the store holds duplicates; callers decide what that means.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_path(&self, path: &str) -> Result<Vec<Link>, AppError>;
}
