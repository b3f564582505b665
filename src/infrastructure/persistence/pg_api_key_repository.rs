//! PostgreSQL implementation of API key repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ApiKey, NewApiKey};
use crate::domain::repositories::ApiKeyRepository;
use crate::error::AppError;

/// PostgreSQL repository for API key lookup and provisioning.
pub struct PgApiKeyRepository {
    pool: Arc<PgPool>,
}

impl PgApiKeyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ApiKeyRow {
    api_key: String,
    owner_email: String,
    created_at: DateTime<Utc>,
}

impl From<ApiKeyRow> for ApiKey {
    fn from(row: ApiKeyRow) -> Self {
        ApiKey::new(row.api_key, row.owner_email, row.created_at)
    }
}

#[async_trait]
impl ApiKeyRepository for PgApiKeyRepository {
    async fn find_by_key(&self, key: &str) -> Result<Vec<ApiKey>, AppError> {
        let rows = sqlx::query_as::<_, ApiKeyRow>(
            r#"
            SELECT api_key, owner_email, created_at
            FROM api_keys
            WHERE api_key = $1
            ORDER BY id
            "#,
        )
        .bind(key)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ApiKey::from).collect())
    }

    async fn create(&self, new_key: NewApiKey) -> Result<ApiKey, AppError> {
        let row = sqlx::query_as::<_, ApiKeyRow>(
            r#"
            INSERT INTO api_keys (api_key, owner_email)
            VALUES ($1, $2)
            RETURNING api_key, owner_email, created_at
            "#,
        )
        .bind(&new_key.key)
        .bind(&new_key.owner_email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<ApiKey>, AppError> {
        let rows = sqlx::query_as::<_, ApiKeyRow>(
            r#"
            SELECT api_key, owner_email, created_at
            FROM api_keys
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ApiKey::from).collect())
    }
}
