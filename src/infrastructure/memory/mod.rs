//! In-process repository implementations.
//!
//! Used by the test suite and by the server when no database is configured.
//! Contents are lost on restart.

pub mod api_key_repository;
pub mod link_repository;

pub use api_key_repository::InMemoryApiKeyRepository;
pub use link_repository::InMemoryLinkRepository;
