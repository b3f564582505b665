//! HTTP middleware for request processing.

pub mod auth;
pub mod tracing;
