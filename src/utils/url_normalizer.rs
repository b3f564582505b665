//! Destination URL normalization.
//!
//! Links store destinations in a canonical form so the same target always
//! looks the same in resolve results.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS destinations are allowed")]
    UnsupportedProtocol,

    #[error("Destination URL has no host")]
    MissingHost,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a destination URL to a canonical form.
///
/// # Rules
///
/// 1. Only `http` and `https` are accepted
/// 2. A host is required
/// 3. Host is lowercased
/// 4. Default ports (80, 443) are dropped
/// 5. Fragments are dropped
/// 6. Path and query are kept verbatim
///
/// # Errors
///
/// See [`UrlNormalizationError`].
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url = Url::parse(input.trim())
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    }

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(UrlNormalizationError::MissingHost)?
        .to_ascii_lowercase();

    url.set_host(Some(&host)).map_err(|e| {
        UrlNormalizationError::NormalizationFailed(format!("invalid host: {e}"))
    })?;

    // Default ports are already elided by the parser.
    url.set_fragment(None);

    Ok(url.to_string())
}
