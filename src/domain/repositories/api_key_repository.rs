//! Repository trait for API key lookup and provisioning.

use crate::domain::entities::{ApiKey, NewApiKey};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage port for API keys.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgApiKeyRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryApiKeyRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiKeyRepository: Send + Sync {
    /// Returns every record whose key equals `key` exactly, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_key(&self, key: &str) -> Result<Vec<ApiKey>, AppError>;

    /// Provisions a new API key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_key: NewApiKey) -> Result<ApiKey, AppError>;

    /// Lists all provisioned keys, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<ApiKey>, AppError>;
}
