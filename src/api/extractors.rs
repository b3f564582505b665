//! Request extractors shared by the API handlers.

use std::collections::{HashMap, HashSet};

use axum::{
    body::{Body, Bytes},
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use crate::domain::entities::ApiKey;
use crate::error::AppError;

/// Merged request parameters: URL query plus form or JSON body.
///
/// Body values take precedence over query values with the same name. Only
/// the first value of a repeated name is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    /// Returns the value for `name`, or `None` when absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the value for `name` when present and non-empty.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Parses the query string of `parts`.
    pub fn from_query(parts: &Parts) -> Self {
        let mut values = Self::default();
        if let Some(query) = parts.uri.query() {
            values.merge_urlencoded(query.as_bytes(), false);
        }
        values
    }

    /// Reads query and body parameters, handing back a body equivalent to
    /// the one consumed.
    ///
    /// Bodies are only buffered for `application/x-www-form-urlencoded` and
    /// `application/json` requests. A body that cannot be read within
    /// `limit` bytes or cannot be parsed contributes no values.
    pub async fn read(parts: &Parts, body: Body, limit: usize) -> (Self, Body) {
        let mut values = Self::from_query(parts);

        let Some(kind) = BodyKind::of(&parts.headers) else {
            return (values, body);
        };

        let bytes = match axum::body::to_bytes(body, limit).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("Request body not buffered: {}", e);
                return (values, Body::empty());
            }
        };

        match kind {
            BodyKind::Form => values.merge_urlencoded(&bytes, true),
            BodyKind::Json => values.merge_json(&bytes),
        }

        (values, Body::from(bytes))
    }

    fn merge_urlencoded(&mut self, input: &[u8], overwrite: bool) {
        let mut seen = HashSet::new();
        for (name, value) in url::form_urlencoded::parse(input) {
            if !seen.insert(name.to_string()) {
                continue;
            }
            self.insert(name.into_owned(), value.into_owned(), overwrite);
        }
    }

    fn merge_json(&mut self, input: &Bytes) {
        let Ok(serde_json::Value::Object(map)) = serde_json::from_slice(input) else {
            return;
        };

        for (name, value) in map {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => continue,
            };
            self.insert(name, value, true);
        }
    }

    fn insert(&mut self, name: String, value: String, overwrite: bool) {
        if overwrite {
            self.0.insert(name, value);
        } else {
            self.0.entry(name).or_insert(value);
        }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FormValues {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

enum BodyKind {
    Form,
    Json,
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Option<Self> {
        let content_type = headers.get(header::CONTENT_TYPE)?.to_str().ok()?;
        let mime = content_type.split(';').next()?.trim();

        if mime.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
            Some(BodyKind::Form)
        } else if mime.eq_ignore_ascii_case("application/json") {
            Some(BodyKind::Json)
        } else {
            None
        }
    }
}

/// Uses the values collected by the key-validation layer, or the query
/// string when the handler runs without it.
impl<S: Send + Sync> FromRequestParts<S> for FormValues {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<FormValues>()
            .cloned()
            .unwrap_or_else(|| FormValues::from_query(parts)))
    }
}

/// The API key record the request was authorized with.
#[derive(Debug, Clone)]
pub struct AuthenticatedKey(pub ApiKey);

impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedKey {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKey>()
            .cloned()
            .map(AuthenticatedKey)
            .ok_or_else(|| AppError::unauthorized("Invalid API Key"))
    }
}
