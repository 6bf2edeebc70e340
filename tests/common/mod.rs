#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use edu_ai_backend::config::Config;

pub const TEST_SEED: u64 = 42;

pub fn create_test_app() -> Router {
    let config = Config {
        rng_seed: Some(TEST_SEED),
        ..Config::default()
    };
    edu_ai_backend::create_app(&config)
}

pub async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = create_test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
