//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the storage ports defined in
//! [`crate::domain::repositories`].
//!
//! - [`persistence`] - PostgreSQL repositories
//! - [`memory`] - In-process repositories
//! - [`logging`] - Tracing subscriber setup

pub mod logging;
pub mod memory;
pub mod persistence;
