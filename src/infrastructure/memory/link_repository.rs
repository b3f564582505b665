//! In-memory link repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// In-process link store.
///
/// Records are kept in insertion order. [`LinkRepository::create`] enforces
/// path uniqueness; [`InMemoryLinkRepository::with_links`] does not, so a
/// store holding duplicates can be reproduced.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLinkRepository {
    links: Arc<RwLock<Vec<Link>>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `links`, as-is.
    pub fn with_links(links: Vec<Link>) -> Self {
        Self {
            links: Arc::new(RwLock::new(links)),
        }
    }

    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        if links.iter().any(|l| l.path == new_link.path) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                Some(format!("path '{}' already exists", new_link.path)),
            ));
        }

        let link = Link::new(new_link.path, new_link.url, Utc::now());
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_path(&self, path: &str) -> Result<Vec<Link>, AppError> {
        let links = self.links.read().await;
        Ok(links.iter().filter(|l| l.path == path).cloned().collect())
    }
}
