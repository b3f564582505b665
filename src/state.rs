//! Shared application state.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::domain::repositories::{ApiKeyRepository, LinkRepository};

/// State shared by the middleware and handlers.
///
/// Built once at startup and cloned per request; every field is either an
/// `Arc` or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    /// Maximum request body buffered while collecting form values.
    pub body_limit: usize,
}

impl AppState {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        api_key_repository: Arc<dyn ApiKeyRepository>,
        body_limit: usize,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            auth_service: Arc::new(AuthService::new(api_key_repository)),
            body_limit,
        }
    }
}
