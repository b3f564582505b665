//! Host extraction for building absolute short URLs.

use axum::http::{HeaderMap, Uri, header};

/// Returns the host the client addressed, port included.
///
/// Prefers the `Host` header and falls back to the request URI authority.
/// Returns an empty string when neither is present.
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.as_str().to_string()))
        .unwrap_or_default()
}

/// Builds the absolute URL for a short path on `host`.
pub fn short_url(host: &str, path: &str) -> String {
    format!("http://{}/{}", host, path)
}
