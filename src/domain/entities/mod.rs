//! Core domain entities.
//!
//! - [`Link`] - A short path mapped to a destination URL
//! - [`ApiKey`] - A credential authorizing API use
//!
//! Creation inputs live in separate structs (`NewLink`, `NewApiKey`).

pub mod api_key;
pub mod link;

pub use api_key::{ApiKey, NewApiKey};
pub use link::{Link, NewLink};
