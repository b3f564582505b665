//! API key validation middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::extractors::FormValues;
use crate::{error::AppError, state::AppState};

/// Authorizes requests using the `apiKey` form value.
///
/// # Parameter
///
/// ```text
/// GET /api/resolve?apiKey=<key>&path=abcd
/// POST /api/add            (apiKey=<key>&url=... as form or JSON body)
/// ```
///
/// # Flow
///
/// 1. Collect query and body parameters into [`FormValues`]
/// 2. Reject a missing or empty `apiKey` without touching the store
/// 3. Validate the key through [`crate::application::services::AuthService`]
/// 4. Attach the matched record and the parameters to the request
/// 5. Continue to the route table
///
/// # Errors
///
/// - `401 Unauthorized` with `Invalid API Key` if the parameter is missing
/// - `401 Unauthorized` with `Invalid API key.` if no record matches
/// - `500 Internal Server Error` if the key store fails
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let (form, body) = FormValues::read(&parts, body, st.body_limit).await;

    let key = form
        .non_empty("apiKey")
        .ok_or_else(|| AppError::unauthorized("Invalid API Key"))?;

    let api_key = match st.auth_service.validate(key).await {
        Ok(Some(api_key)) => api_key,
        Ok(None) => return Err(AppError::unauthorized("Invalid API key.")),
        Err(e) => {
            return Err(AppError::internal(
                "Error validating API key",
                Some(match e.cause() {
                    Some(cause) => format!("{}: {}", e.message(), cause),
                    None => e.message().to_string(),
                }),
            ));
        }
    };

    tracing::debug!(owner = %api_key.owner_email, "API key accepted");

    parts.extensions.insert(api_key);
    parts.extensions.insert(form);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
