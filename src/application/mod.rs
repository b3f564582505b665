//! Application layer services implementing business logic.
//!
//! Services consume the storage ports from [`crate::domain::repositories`]
//! and expose the operations the HTTP handlers call.
//!
//! - [`services::link_service::LinkService`] - Short link creation and lookup
//! - [`services::auth_service::AuthService`] - API key validation

pub mod services;
