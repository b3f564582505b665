//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - Request and response bodies
//! - [`extractors`] - Form values and authenticated key extraction
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - API key validation and request tracing
//! - [`routes`] - Route table

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
