//! In-memory API key repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{ApiKey, NewApiKey};
use crate::domain::repositories::ApiKeyRepository;
use crate::error::AppError;

/// In-process API key store. Duplicate keys are accepted, oldest first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApiKeyRepository {
    keys: Arc<RwLock<Vec<ApiKey>>>,
}

impl InMemoryApiKeyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: Vec<ApiKey>) -> Self {
        Self {
            keys: Arc::new(RwLock::new(keys)),
        }
    }
}

#[async_trait]
impl ApiKeyRepository for InMemoryApiKeyRepository {
    async fn find_by_key(&self, key: &str) -> Result<Vec<ApiKey>, AppError> {
        let keys = self.keys.read().await;
        Ok(keys.iter().filter(|k| k.key == key).cloned().collect())
    }

    async fn create(&self, new_key: NewApiKey) -> Result<ApiKey, AppError> {
        let api_key = ApiKey::new(new_key.key, new_key.owner_email, Utc::now());
        self.keys.write().await.push(api_key.clone());
        Ok(api_key)
    }

    async fn list(&self) -> Result<Vec<ApiKey>, AppError> {
        let keys = self.keys.read().await;
        Ok(keys.iter().rev().cloned().collect())
    }
}
