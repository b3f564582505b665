#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use chrono::Utc;
use std::sync::Arc;

use link_api::domain::entities::{ApiKey, Link, NewApiKey, NewLink};
use link_api::domain::repositories::{ApiKeyRepository, LinkRepository};
use link_api::error::AppError;
use link_api::infrastructure::memory::{InMemoryApiKeyRepository, InMemoryLinkRepository};
use link_api::routes::app_router;
use link_api::state::AppState;

pub const TEST_KEY: &str = "test-api-key";
pub const TEST_OWNER: &str = "owner@example.com";
pub const TEST_HOST: &str = "s.example.com";
pub const BODY_LIMIT: usize = 64 * 1024;

pub fn host_header() -> (HeaderName, HeaderValue) {
    (header::HOST, HeaderValue::from_static(TEST_HOST))
}

pub fn test_key() -> ApiKey {
    ApiKey::new(TEST_KEY.to_string(), TEST_OWNER.to_string(), Utc::now())
}

pub fn test_link(path: &str, url: &str) -> Link {
    Link::new(path.to_string(), url.to_string(), Utc::now())
}

/// In-memory state with [`TEST_KEY`] provisioned and the given links stored.
pub fn create_test_state(links: Vec<Link>) -> (AppState, InMemoryLinkRepository) {
    let link_repo = InMemoryLinkRepository::with_links(links);
    let key_repo = InMemoryApiKeyRepository::with_keys(vec![test_key()]);

    let state = AppState::new(Arc::new(link_repo.clone()), Arc::new(key_repo), BODY_LIMIT);

    (state, link_repo)
}

pub fn create_test_server(links: Vec<Link>) -> (TestServer, InMemoryLinkRepository) {
    let (state, link_repo) = create_test_state(links);
    let server = TestServer::new(app_router(state)).unwrap();
    (server, link_repo)
}

pub fn server_with_state(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

/// Key store whose every query fails.
pub struct FailingApiKeyRepository;

#[async_trait]
impl ApiKeyRepository for FailingApiKeyRepository {
    async fn find_by_key(&self, _key: &str) -> Result<Vec<ApiKey>, AppError> {
        Err(AppError::internal(
            "Database error",
            Some("connection refused".to_string()),
        ))
    }

    async fn create(&self, _new_key: NewApiKey) -> Result<ApiKey, AppError> {
        Err(AppError::internal("Database error", None))
    }

    async fn list(&self) -> Result<Vec<ApiKey>, AppError> {
        Err(AppError::internal("Database error", None))
    }
}

/// Link store whose every query fails.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::internal(
            "Database error",
            Some("connection reset".to_string()),
        ))
    }

    async fn find_by_path(&self, _path: &str) -> Result<Vec<Link>, AppError> {
        Err(AppError::internal(
            "Database error",
            Some("connection reset".to_string()),
        ))
    }
}
