use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("pichsafe")
        .site_root("target/site-test-missing")
        .build()
}

async fn status_of(uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app(test_options()).oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_mounted_on_app() {
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    assert_eq!(status_of("/pkg/pichsafe.wasm").await, StatusCode::NOT_FOUND);
}
