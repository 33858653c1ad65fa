//! Integration tests for health checks, static files and global middleware.

mod common;

use axum::http::StatusCode;
use common::{create_test_app, get_request, parse_response_body, response_text};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_memory_backend() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "memory");
    assert_eq!(body["storage"]["connected"], true);
}

#[tokio::test]
async fn test_liveness_and_readiness() {
    let app = create_test_app();

    let response = app.clone().oneshot(get_request("/api/health/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["status"], "alive");

    let response = app.oneshot(get_request("/api/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["status"], "ready");
}

#[tokio::test]
async fn test_static_index_served() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response_text(response).await.contains("class=\"wheel\""));
}

#[tokio::test]
async fn test_unknown_static_file_not_found() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/missing.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_security_and_request_id_headers() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/slider")).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.get("strict-transport-security").is_none());
    assert!(headers.get("x-request-id").is_some());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = create_test_app();

    let request = axum::http::Request::builder()
        .uri("/api/partners")
        .header("x-request-id", "site-test-42")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "site-test-42");
}

#[tokio::test]
async fn test_metrics_endpoint_exports_request_counters() {
    showcase_api::middleware::init_metrics().expect("Failed to install metrics recorder");
    let app = create_test_app();

    let response = app.clone().oneshot(get_request("/api/partners")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = response_text(response).await;
    assert!(text.contains("http_requests_total"));
    assert!(text.contains("path=\"/api/partners\""));
}
