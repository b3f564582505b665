//! Uniform application error and its HTTP rendering.
//!
//! Every failure carries a message, an optional underlying cause, and (via its
//! variant) a status code. [`AppError`] is the only place where failures are
//! turned into HTTP responses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// JSON body written for every non-500 failure.
///
/// ```json
/// {"Error": null, "Message": "Invalid API Key", "Code": 401}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorEnvelope {
    pub error: Option<String>,
    pub message: String,
    pub code: u16,
}

/// Application-wide error type.
///
/// | Variant        | Status |
/// |----------------|--------|
/// | `Unauthorized` | 401    |
/// | `NotFound`     | 404    |
/// | `BadRequest`   | 400    |
/// | `Conflict`     | 409    |
/// | `Internal`     | 500    |
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    BadRequest {
        message: String,
        cause: Option<String>,
    },

    #[error("{message}")]
    Conflict {
        message: String,
        cause: Option<String>,
    },

    #[error("{message}")]
    Internal {
        message: String,
        cause: Option<String>,
    },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, cause: Option<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            cause,
        }
    }

    pub fn conflict(message: impl Into<String>, cause: Option<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            cause,
        }
    }

    pub fn internal(message: impl Into<String>, cause: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            cause,
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Unauthorized { message }
            | AppError::NotFound { message }
            | AppError::BadRequest { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    /// Underlying cause, if the failure originated below the API layer.
    pub fn cause(&self) -> Option<&str> {
        match self {
            AppError::Unauthorized { .. } | AppError::NotFound { .. } => None,
            AppError::BadRequest { cause, .. }
            | AppError::Conflict { cause, .. }
            | AppError::Internal { cause, .. } => cause.as_deref(),
        }
    }

    /// Builds the JSON envelope for this error.
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.cause().map(str::to_string),
            message: self.message().to_string(),
            code: self.status().as_u16(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // 500s keep their details in the operator log; the caller only sees the message.
        if let AppError::Internal { message, cause } = self {
            tracing::error!(
                "error recorded: {}; message: {}",
                cause.as_deref().unwrap_or("<none>"),
                message
            );
            return (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                message,
            )
                .into_response();
        }

        (status, Json(self.envelope())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                Some(db.constraint().unwrap_or_default().to_string()),
            );
        }

        AppError::internal("Database error", Some(e.to_string()))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid `{}` parameter: {}", field, err.code),
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message, Some(errors.to_string()))
    }
}
