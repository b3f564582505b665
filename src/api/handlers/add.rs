//! Handler for the link submission endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Method, Uri},
};
use validator::Validate;

use crate::api::dto::add::{AddRequest, AddSuccessResponse};
use crate::api::extractors::{AuthenticatedKey, FormValues};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::{request_host, short_url};

/// Creates a short link for the submitted destination URL.
///
/// # Endpoint
///
/// `POST /api/add`
///
/// # Parameters (query, form or JSON body)
///
/// - `url` - destination URL (required)
/// - `path` - requested short path (optional, generated when absent)
///
/// # Response
///
/// ```json
/// {"Success": true, "ResultURL": "http://s.example.com/Xa3_k9Qz"}
/// ```
///
/// # Errors
///
/// - 401 if the method is not `POST`
/// - 400 for every creation failure, whether caused by the input or by the
///   store; the two are not told apart
pub async fn add_handler(
    method: Method,
    State(state): State<AppState>,
    AuthenticatedKey(api_key): AuthenticatedKey,
    headers: HeaderMap,
    uri: Uri,
    form: FormValues,
) -> Result<Json<AddSuccessResponse>, AppError> {
    if method != Method::POST {
        return Err(AppError::unauthorized(format!(
            "Invalid request method: {}",
            method
        )));
    }

    let request = AddRequest::from_form(&form);

    let created = match request.validate() {
        Ok(()) => {
            state
                .link_service
                .create_link(&request.url, request.path.as_deref())
                .await
        }
        Err(errors) => Err(AppError::from(errors)),
    };

    let link = created.map_err(|e| {
        tracing::debug!(owner = %api_key.owner_email, "Link creation failed: {}", e);
        AppError::bad_request(
            e.message(),
            Some(e.cause().unwrap_or(e.message()).to_string()),
        )
    })?;

    let host = request_host(&headers, &uri);

    Ok(Json(AddSuccessResponse {
        success: true,
        result_url: short_url(&host, &link.path),
    }))
}
