//! HTTP request/response tracing middleware.
//!
//! Callers pass their API key as a query parameter, so request spans never
//! record the raw URI. The `apiKey` value is replaced before it reaches a
//! log line.

use axum::http::{Request, Uri};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Query parameter whose value is never logged.
const SECRET_PARAM: &str = "apiKey";
const REDACTED: &str = "redacted";

/// Opens one `INFO` span per request with the method, the redacted URI and
/// the HTTP version.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedactedSpan;

impl<B> MakeSpan<B> for RedactedSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %redacted_uri(request.uri()),
            version = ?request.version(),
        )
    }
}

/// Path and query of `uri` with the `apiKey` value replaced.
///
/// ```text
/// /api/resolve?apiKey=Xk3...&path=abcd  ->  /api/resolve?apiKey=redacted&path=abcd
/// ```
pub fn redacted_uri(uri: &Uri) -> String {
    let Some(query) = uri.query() else {
        return uri.path().to_string();
    };

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if name == SECRET_PARAM {
            serializer.append_pair(&name, REDACTED);
        } else {
            serializer.append_pair(&name, &value);
        }
    }

    format!("{}?{}", uri.path(), serializer.finish())
}

/// Creates the tracing layer wrapping the whole router.
///
/// ```text
/// INFO request{method=POST uri=/api/add?apiKey=redacted version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RedactedSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RedactedSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
