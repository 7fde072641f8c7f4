//! Shared test utilities for taskmock API tests.

// Allow dead_code because helpers are used across different test files,
// but Clippy analyzes each test file independently and can't see
// cross-file usage.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use taskmock_api::http::{create_router, AppState};
use taskmock_storage::MemorySessionStore;

/// Create a test app with in-memory storage.
///
/// Each call creates a fresh `AppState` around a fresh store; clone the
/// returned router for multi-request flows so they share one session.
pub fn create_test_app() -> axum::Router {
    let storage = Arc::new(MemorySessionStore::new());
    create_test_app_with(&storage)
}

/// Create a test app over an existing store, for tests that inspect the
/// stored state directly.
pub fn create_test_app_with(storage: &Arc<MemorySessionStore>) -> axum::Router {
    let state = AppState::new(Arc::clone(storage));
    create_router(state)
}

/// Send a request with a JSON body and return (status, parsed body).
///
/// An empty response body (204) parses to `Value::Null`.
pub async fn send_json(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

/// Send a bodyless request and return (status, parsed body).
pub async fn send_empty(
    app: axum::Router,
    method: &str,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
