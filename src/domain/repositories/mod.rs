//! Storage port definitions for the domain layer.
//!
//! These traits isolate the external store. Implementations live in
//! `crate::infrastructure`; mock implementations are generated via `mockall`
//! for unit tests.
//!
//! - [`LinkRepository`] - Link creation and lookup by path
//! - [`ApiKeyRepository`] - API key lookup and provisioning

pub mod api_key_repository;
pub mod link_repository;

pub use api_key_repository::ApiKeyRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use api_key_repository::MockApiKeyRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
