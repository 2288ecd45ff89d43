mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

use common::{body_json, empty_request, setup};

#[tokio::test]
async fn should_report_healthy_database() {
    let app = setup().await;

    let response = app
        .router
        .oneshot(empty_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], true);
}

#[tokio::test]
async fn should_echo_given_request_id() {
    let app = setup().await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn should_apply_cors_and_request_id_layers_together() {
    let app = setup().await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "http://localhost:3000")
        .header("x-request-id", "req-cors")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.headers()["x-request-id"], "req-cors");
}
