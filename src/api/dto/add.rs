//! DTOs for the add endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::extractors::FormValues;

/// Longest destination URL accepted.
pub const MAX_URL_LEN: usize = 2048;

/// Parameters of a link submission.
#[derive(Debug, Validate)]
pub struct AddRequest {
    /// The destination URL to shorten. Emptiness is checked by the link service.
    #[validate(length(max = 2048, message = "The `url` parameter is too long."))]
    pub url: String,

    /// Optional caller-chosen short path.
    pub path: Option<String>,
}

impl AddRequest {
    pub fn from_form(form: &FormValues) -> Self {
        Self {
            url: form.get("url").unwrap_or_default().to_string(),
            path: form.non_empty("path").map(str::to_string),
        }
    }
}

/// Body returned when a link was created.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddSuccessResponse {
    #[serde(rename = "Success")]
    pub success: bool,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
}
