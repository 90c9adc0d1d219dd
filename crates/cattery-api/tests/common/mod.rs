//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cattery_api::app;
use cattery_api::state::AppState;
use cattery_cats::infrastructure::in_memory_repository::InMemoryCatRepository;
use cattery_core::clock::Clock;
use cattery_test_support::{FixedClock, utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Fixed "now" used across all integration tests: 2023-06-15T00:00:00Z.
pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(utc(2023, 6, 15)))
}

/// Build the full app router over a fresh in-memory repository, using the
/// same composition as `main.rs`.
pub fn build_test_app() -> Router {
    let clock = fixed_clock();
    let repository = Arc::new(InMemoryCatRepository::new(Arc::clone(&clock)));
    app(AppState::new(clock, repository))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, json_request("POST", uri, body)).await
}

/// Send a PATCH request with a JSON body and return the response.
pub async fn patch_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, json_request("PATCH", uri, body)).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, empty_request("GET", uri)).await
}

/// Send a DELETE request and return the response. An empty body is reported
/// as `Value::Null`.
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, empty_request("DELETE", uri)).await
}
