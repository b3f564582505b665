//! API route table.
//!
//! Paths are matched exactly. Every route sits behind
//! [`crate::api::middleware::auth`]; method checks happen inside the
//! handlers so a wrong method is reported as an authorization failure.

use crate::api::handlers::{add_handler, resolve_handler};
use crate::state::AppState;
use axum::{Router, routing::any};

/// The fixed table of API operations.
///
/// # Endpoints
///
/// - `POST /api/add`     - Create a short link
/// - `GET  /api/resolve` - Resolve a short path
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/add", any(add_handler))
        .route("/api/resolve", any(resolve_handler))
}
