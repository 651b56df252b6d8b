//! Contract tests for the HTTP surface that do not require a browser:
//! validation failures, status codes, and the CORS header.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use webshot_lib::{router, AppState, Config};

fn test_app() -> axum::Router {
    router(AppState {
        config: Arc::new(Config::default()),
    })
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn missing_url_returns_bad_request_with_message() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/screenshot")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "url query parameter is required");
}

#[tokio::test]
async fn empty_url_value_is_rejected_like_a_missing_one() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/screenshot?url=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn every_response_carries_the_cors_header() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/screenshot")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|value| value.to_str().unwrap()),
        Some("*")
    );
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/capture")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
