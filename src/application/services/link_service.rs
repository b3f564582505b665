//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::path_generator::{generate_path, validate_custom_path};
use crate::utils::url_normalizer::normalize_url;

/// Attempts at drawing an unused random path before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Service for creating and resolving short links.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `url`.
    ///
    /// The destination is normalized first. When `requested_path` is given
    /// (and non-empty) it is validated and used as-is; otherwise a random path
    /// is generated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if:
    /// - `url` is empty
    /// - `url` is not an absolute HTTP(S) URL
    /// - `requested_path` breaks the path rules
    ///
    /// Returns [`AppError::Conflict`] if `requested_path` is taken.
    /// Returns [`AppError::Internal`] if no free path could be generated or
    /// the store fails.
    pub async fn create_link(
        &self,
        url: &str,
        requested_path: Option<&str>,
    ) -> Result<Link, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request(
                "The `url` parameter is required.",
                None,
            ));
        }

        let normalized_url =
            normalize_url(url).map_err(|e| AppError::bad_request(e.to_string(), None))?;

        let path = match requested_path.filter(|p| !p.is_empty()) {
            Some(custom) => {
                validate_custom_path(custom)?;
                custom.to_string()
            }
            None => self.generate_unique_path().await?,
        };

        // Taken paths are detected by the store's unique constraint.
        let link = self
            .link_repository
            .create(NewLink {
                path: path.clone(),
                url: normalized_url,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "Short path already in use",
                    Some(format!("path: {path}")),
                ),
                other => other,
            })?;

        tracing::info!(path = %link.path, url = %link.url, "Link created");

        Ok(link)
    }

    /// Returns every stored link whose path equals `path`.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn find_links(&self, path: &str) -> Result<Vec<Link>, AppError> {
        self.link_repository.find_by_path(path).await
    }

    /// Resolves `path` to its link.
    ///
    /// A path is resolved only when exactly one link matches. Zero matches
    /// and several matches both yield `Ok(None)`; the latter is logged since
    /// it means the store holds duplicate paths.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn resolve(&self, path: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.find_links(path).await?;

        match links.len() {
            1 => Ok(links.pop()),
            0 => {
                tracing::debug!(path, "No link for path");
                Ok(None)
            }
            n => {
                tracing::warn!(path, matches = n, "Ambiguous path, treating as unresolved");
                Ok(None)
            }
        }
    }

    /// Generates a path not yet present in the store.
    async fn generate_unique_path(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let path = generate_path()?;

            if self.link_repository.find_by_path(&path).await?.is_empty() {
                return Ok(path);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short path",
            Some("too many collisions".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn link(path: &str, url: &str) -> Link {
        Link::new(path.to_string(), url.to_string(), Utc::now())
    }

    fn echo_create(mock: &mut MockLinkRepository) {
        mock.expect_create()
            .times(1)
            .returning(|new_link| Ok(Link::new(new_link.path, new_link.url, Utc::now())));
    }

    #[tokio::test]
    async fn test_create_link_generates_path() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_path()
            .times(1)
            .returning(|_| Ok(vec![]));
        echo_create(&mut mock_repo);

        let service = LinkService::new(Arc::new(mock_repo));

        let created = service
            .create_link("https://example.com", None)
            .await
            .unwrap();

        assert_eq!(created.path.len(), 8);
        assert_eq!(created.url, "https://example.com/");
    }

    #[tokio::test]
    async fn test_create_link_normalizes_url() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_path()
            .times(1)
            .returning(|_| Ok(vec![]));
        mock_repo
            .expect_create()
            .withf(|new_link| new_link.url == "https://example.com/path")
            .times(1)
            .returning(|new_link| Ok(Link::new(new_link.path, new_link.url, Utc::now())));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("https://EXAMPLE.COM:443/path#frag", None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_link_with_custom_path() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_path().times(0);
        mock_repo
            .expect_create()
            .withf(|new_link| new_link.path == "my-link")
            .times(1)
            .returning(|new_link| Ok(Link::new(new_link.path, new_link.url, Utc::now())));

        let service = LinkService::new(Arc::new(mock_repo));

        let created = service
            .create_link("https://example.com", Some("my-link"))
            .await
            .unwrap();

        assert_eq!(created.path, "my-link");
    }

    #[tokio::test]
    async fn test_create_link_empty_custom_path_generates() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_path()
            .times(1)
            .returning(|_| Ok(vec![]));
        echo_create(&mut mock_repo);

        let service = LinkService::new(Arc::new(mock_repo));

        let created = service
            .create_link("https://example.com", Some(""))
            .await
            .unwrap();

        assert_eq!(created.path.len(), 8);
    }

    #[tokio::test]
    async fn test_create_link_custom_path_conflict() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_path().times(0);
        mock_repo
            .expect_create()
            .withf(|new_link| new_link.path == "taken")
            .times(1)
            .returning(|_| {
                Err(AppError::conflict(
                    "Unique constraint violation",
                    Some("links_path_key".into()),
                ))
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service
            .create_link("https://example.com", Some("taken"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.message(), "Short path already in use");
        assert_eq!(err.cause(), Some("path: taken"));
    }

    #[tokio::test]
    async fn test_create_link_invalid_custom_path() {
        let mock_repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        let err = service
            .create_link("https://example.com", Some("bad/path"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_create_link_missing_url() {
        let mock_repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        let err = service.create_link("   ", None).await.unwrap_err();

        assert_eq!(err.message(), "The `url` parameter is required.");
    }

    #[tokio::test]
    async fn test_create_link_invalid_url() {
        let mock_repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        let err = service.create_link("not-a-url", None).await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
        assert!(err.message().contains("Invalid URL format"));
    }

    #[tokio::test]
    async fn test_create_link_gives_up_after_collisions() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_path()
            .times(MAX_GENERATE_ATTEMPTS)
            .returning(|path| Ok(vec![link(path, "https://example.com/")]));
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service
            .create_link("https://example.com", None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_link_store_failure_propagates() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_path()
            .times(1)
            .returning(|_| Ok(vec![]));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", Some("io".into()))));

        let service = LinkService::new(Arc::new(mock_repo));

        let err = service
            .create_link("https://example.com", None)
            .await
            .unwrap_err();

        assert_eq!(err.message(), "Database error");
    }

    #[tokio::test]
    async fn test_resolve_single_match() {
        let stored = link("abcd", "https://example.com/");
        let expected = stored.clone();

        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_path()
            .times(1)
            .returning(move |_| Ok(vec![stored.clone()]));

        let service = LinkService::new(Arc::new(mock_repo));

        assert_eq!(service.resolve("abcd").await.unwrap(), Some(expected));
    }

    #[tokio::test]
    async fn test_resolve_no_match() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_path()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.resolve("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_ambiguous_is_unresolved() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_path().times(1).returning(|_| {
            Ok(vec![
                link("dup", "https://a.example/"),
                link("dup", "https://b.example/"),
            ])
        });

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.resolve("dup").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_propagates_store_error() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_path()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", None)));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.resolve("abcd").await.is_err());
    }
}
