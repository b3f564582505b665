//! Short path generation and validation.

use crate::error::AppError;
use base64::Engine as _;
use regex::Regex;
use std::sync::LazyLock;

/// Random bytes drawn per generated path (8 characters once encoded).
const PATH_LENGTH_BYTES: usize = 6;

pub const MIN_PATH_LEN: usize = 4;
pub const MAX_PATH_LEN: usize = 64;

static PATH_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static regex"));

/// Generates a random URL-safe short path.
///
/// Draws entropy from the OS and encodes it as URL-safe base64 without
/// padding.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random source fails.
pub fn generate_path() -> Result<String, AppError> {
    let mut buffer = [0u8; PATH_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal("Failed to generate short path", Some(e.to_string()))
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Validates a caller-requested short path.
///
/// # Rules
///
/// - Length: 4-64 characters
/// - Allowed characters: ASCII letters, digits, `-`, `_`
/// - Cannot start or end with a hyphen
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] naming the violated rule.
pub fn validate_custom_path(path: &str) -> Result<(), AppError> {
    if path.len() < MIN_PATH_LEN || path.len() > MAX_PATH_LEN {
        return Err(AppError::bad_request(
            format!("Short path must be {MIN_PATH_LEN}-{MAX_PATH_LEN} characters"),
            Some(format!("provided length: {}", path.len())),
        ));
    }

    if !PATH_CHARSET.is_match(path) {
        return Err(AppError::bad_request(
            "Short path can only contain letters, digits, hyphens and underscores",
            Some(format!("path: {path}")),
        ));
    }

    if path.starts_with('-') || path.ends_with('-') {
        return Err(AppError::bad_request(
            "Short path cannot start or end with a hyphen",
            Some(format!("path: {path}")),
        ));
    }

    Ok(())
}
