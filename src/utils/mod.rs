//! Helper functions used across the application.
//!
//! - [`path_generator`] - Short path generation and validation
//! - [`url_normalizer`] - Destination URL normalization
//! - [`request_host`] - Host extraction and short URL formatting

pub mod path_generator;
pub mod request_host;
pub mod url_normalizer;
