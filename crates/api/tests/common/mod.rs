//! Common test utilities for integration tests.
//!
//! Every test builds its own router over a fresh in-memory store, so tests
//! run without a database and never share state.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use persistence::{ContentStore, MemoryContentStore};
use showcase_api::{app::create_app, config::Config};
use std::sync::Arc;

/// Test configuration pointing static files at the fixture site.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/site").to_string();
    config.logging.format = "pretty".to_string();
    config
}

/// Router over the default seeded in-memory store.
pub fn create_test_app() -> Router {
    create_app(test_config(), Arc::new(MemoryContentStore::seeded()))
}

/// Router over the given store, for tests that inspect the store afterwards.
pub fn create_test_app_with_store(store: Arc<dyn ContentStore>) -> Router {
    create_app(test_config(), store)
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a DELETE request.
pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Parse a response body as JSON (Null when the body is not JSON).
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// Read a response body as text.
pub async fn response_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&body).into_owned()
}
