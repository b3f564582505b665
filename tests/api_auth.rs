mod common;

use axum::http::{Method, StatusCode, header};
use link_api::error::ErrorEnvelope;
use link_api::infrastructure::memory::InMemoryLinkRepository;
use link_api::state::AppState;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_missing_api_key_is_unauthorized() {
    let (server, _) = common::create_test_server(vec![]);

    let response = server
        .get("/api/resolve")
        .add_query_param("path", "abcd")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let body = response.json::<ErrorEnvelope>();
    assert_eq!(body.message, "Invalid API Key");
    assert_eq!(body.code, 401);
    assert!(body.error.is_none());
}

#[tokio::test]
async fn test_empty_api_key_is_unauthorized() {
    let (server, _) = common::create_test_server(vec![]);

    let response = server.get("/api/resolve").add_query_param("apiKey", "").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorEnvelope>().message, "Invalid API Key");
}

#[tokio::test]
async fn test_missing_api_key_on_unknown_path_is_unauthorized() {
    let (server, _) = common::create_test_server(vec![]);

    let response = server.get("/nowhere").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorEnvelope>().message, "Invalid API Key");
}

#[tokio::test]
async fn test_unknown_api_key_is_unauthorized() {
    let (server, _) = common::create_test_server(vec![]);

    let response = server
        .get("/api/resolve")
        .add_query_param("apiKey", "not-a-key")
        .add_query_param("path", "abcd")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorEnvelope>().message, "Invalid API key.");
}

#[tokio::test]
async fn test_key_store_failure_is_internal_error() {
    let state = AppState::new(
        Arc::new(InMemoryLinkRepository::new()),
        Arc::new(common::FailingApiKeyRepository),
        common::BODY_LIMIT,
    );
    let server = common::server_with_state(state);

    let response = server
        .get("/api/resolve")
        .add_query_param("apiKey", common::TEST_KEY)
        .add_query_param("path", "abcd")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error validating API key");
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        "application/json"
    );
}

#[tokio::test]
async fn test_api_key_in_form_body() {
    let (server, _) = common::create_test_server(vec![]);
    let (host, host_value) = common::host_header();

    let response = server
        .post("/api/add")
        .add_header(host, host_value)
        .form(&[("apiKey", common::TEST_KEY), ("url", "https://example.com")])
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["Success"], json!(true));
}

#[tokio::test]
async fn test_api_key_in_json_body() {
    let (server, _) = common::create_test_server(vec![]);

    let response = server
        .post("/api/add")
        .json(&json!({"apiKey": common::TEST_KEY, "url": "https://example.com"}))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_path_with_valid_key_is_not_found() {
    let (server, _) = common::create_test_server(vec![]);

    let response = server
        .get("/api/stats")
        .add_query_param("apiKey", common::TEST_KEY)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.json::<ErrorEnvelope>();
    assert_eq!(body.message, "No API handler for /api/stats");
    assert_eq!(body.code, 404);
}

#[tokio::test]
async fn test_routes_match_exact_path() {
    let (server, _) = common::create_test_server(vec![]);

    let response = server
        .get("/api/resolve/")
        .add_query_param("apiKey", common::TEST_KEY)
        .add_query_param("path", "abcd")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorEnvelope>().message,
        "No API handler for /api/resolve/"
    );
}

#[tokio::test]
async fn test_wrong_method_before_key_check_is_still_key_error() {
    let (server, _) = common::create_test_server(vec![]);

    let response = server.method(Method::DELETE, "/api/add").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<ErrorEnvelope>().message, "Invalid API Key");
}
