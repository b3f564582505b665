//! PostgreSQL repository implementations.
//!
//! Queries are built at runtime with `sqlx::query_as` and mapped through
//! `FromRow` row structs.
//!
//! - [`PgLinkRepository`] - Link storage and lookup
//! - [`PgApiKeyRepository`] - API key lookup and provisioning

pub mod pg_api_key_repository;
pub mod pg_link_repository;

pub use pg_api_key_repository::PgApiKeyRepository;
pub use pg_link_repository::PgLinkRepository;
