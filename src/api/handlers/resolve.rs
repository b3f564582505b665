//! Handler for the short path resolution endpoint.

use axum::{Json, extract::State, http::Method};

use crate::api::dto::resolve::ResolveResponse;
use crate::api::extractors::{AuthenticatedKey, FormValues};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short path to the link it maps to.
///
/// # Endpoint
///
/// `GET /api/resolve?path=<short-path>`
///
/// # Response
///
/// Always 200 once the request is well-formed:
///
/// ```json
/// {"Success": true, "Result": {"Path": "abcd", "URL": "https://example.com/", "Created": "..."}}
/// {"Success": false, "Result": {}}
/// ```
///
/// `Success` is `false` when no link matches, when several links match, or
/// when the store query fails.
///
/// # Errors
///
/// - 401 if the method is not `GET`
/// - 401 if `path` is missing or empty
pub async fn resolve_handler(
    method: Method,
    State(state): State<AppState>,
    AuthenticatedKey(api_key): AuthenticatedKey,
    form: FormValues,
) -> Result<Json<ResolveResponse>, AppError> {
    if method != Method::GET {
        return Err(AppError::unauthorized(format!(
            "Invalid request method: {}",
            method
        )));
    }

    let path = form
        .non_empty("path")
        .ok_or_else(|| AppError::unauthorized("The `path` parameter is required. "))?;

    let response = match state.link_service.resolve(path).await {
        Ok(Some(link)) => ResolveResponse::found(link),
        Ok(None) => ResolveResponse::unresolved(),
        Err(e) => {
            tracing::warn!(
                path,
                owner = %api_key.owner_email,
                "Resolve query failed: {}; {}",
                e,
                e.cause().unwrap_or_default()
            );
            ResolveResponse::unresolved()
        }
    };

    Ok(Json(response))
}
