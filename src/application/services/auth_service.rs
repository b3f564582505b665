//! API key validation service.

use std::sync::Arc;

use crate::domain::entities::ApiKey;
use crate::domain::repositories::ApiKeyRepository;
use crate::error::AppError;

/// Validates caller-supplied API keys against provisioned records.
pub struct AuthService {
    repository: Arc<dyn ApiKeyRepository>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn ApiKeyRepository>) -> Self {
        Self { repository }
    }

    /// Looks up `key` and returns the first matching record.
    ///
    /// Uniqueness is not enforced here: when several records share the key,
    /// the first one the store returns wins.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ApiKey))` if at least one record matches
    /// - `Ok(None)` if no record matches
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub async fn validate(&self, key: &str) -> Result<Option<ApiKey>, AppError> {
        let matches = self.repository.find_by_key(key).await?;
        Ok(matches.into_iter().next())
    }
}
