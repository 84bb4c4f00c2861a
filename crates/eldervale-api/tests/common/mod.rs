//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use eldervale_narrative::domain::config::SessionConfig;
use eldervale_test_support::{RecordingTurnSink, fixed_clock};
use http_body_util::BodyExt;
use tower::ServiceExt;

use eldervale_api::state::AppState;

/// Build the full app router with a fixed clock and a recording sink.
/// Uses the same route structure as `main.rs`.
pub fn build_test_app() -> (Router, Arc<RecordingTurnSink>) {
    build_test_app_with_config(SessionConfig::default())
}

/// Build the full app router with a custom session configuration.
pub fn build_test_app_with_config(config: SessionConfig) -> (Router, Arc<RecordingTurnSink>) {
    let sink = Arc::new(RecordingTurnSink::new());
    let app_state = AppState::new(Arc::new(fixed_clock()), sink.clone(), config);
    (eldervale_api::build_router(app_state), sink)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a DELETE request and return the response status.
pub async fn delete(app: Router, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await.0
}

/// Start a session and return its identifier.
pub async fn start_session(app: Router) -> String {
    let (status, json) = post_json(app, "/api/v1/sessions", &serde_json::json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    json["session_id"].as_str().unwrap().to_owned()
}

/// Play one turn and return the response body.
pub async fn take_turn(app: Router, session_id: &str, utterance: &str) -> serde_json::Value {
    let (status, json) = post_json(
        app,
        &format!("/api/v1/sessions/{session_id}/turns"),
        &serde_json::json!({ "utterance": utterance }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json
}
