//! Application router assembly.

use axum::{Router, middleware};

use crate::api::handlers::no_handler;
use crate::api::middleware::{auth, tracing};
use crate::api::routes::api_routes;
use crate::state::AppState;

/// Builds the complete application router.
///
/// # Layers (outermost first)
///
/// 1. Request tracing
/// 2. API key validation (also guards the fallback, so an unknown path
///    without a valid key is a 401, not a 404)
/// 3. Route table, then the `No API handler` fallback
pub fn app_router(state: AppState) -> Router {
    api_routes()
        .fallback(no_handler)
        .layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state)
        .layer(tracing::layer())
}
