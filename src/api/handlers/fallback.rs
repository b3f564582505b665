//! Handler for paths missing from the route table.

use axum::http::Uri;

use crate::error::AppError;

/// Rejects requests whose path has no registered operation.
///
/// Only reached after the API key was accepted.
pub async fn no_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("No API handler for {}", uri.path()))
}
