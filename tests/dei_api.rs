//! HTTP API tests
//!
//! Exercises the full router in-process: compute, rejection mapping,
//! history ordering, reset, and the CORS policy.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use dei_service::http_server::HttpServer;

fn app() -> Router {
    HttpServer::new().router()
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        // Deserialization rejections (e.g. a missing field) come back as a
        // plain-text body, not JSON; fall back to Null so callers that only
        // assert on status can still proceed.
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

async fn compute(app: &Router, body: Value) -> (StatusCode, Value) {
    send_json(app, Method::POST, "/compute", Some(body)).await
}

async fn history(app: &Router) -> (StatusCode, Value) {
    send_json(app, Method::GET, "/history", None).await
}

#[tokio::test]
async fn test_compute_returns_record() {
    let app = app();

    let (status, body) = compute(
        &app,
        json!({"decision_time": 2.0, "error_rate": 0.1, "robustness_score": 0.9}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!((body["dei"].as_f64().unwrap() - 0.405).abs() < 1e-9);
    assert_eq!(body["input"]["decision_time"], 2.0);
    assert_eq!(body["input"]["error_rate"], 0.1);
    assert_eq!(body["input"]["robustness_score"], 0.9);
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_compute_rejects_non_positive_decision_time() {
    let app = app();

    for decision_time in [0.0, -5.0] {
        let (status, body) = compute(
            &app,
            json!({"decision_time": decision_time, "error_rate": 0.0, "robustness_score": 1.0}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Decision time must be greater than 0");
    }

    // Rejected computations never reach the history
    let (status, body) = history(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_history_preserves_call_order() {
    let app = app();

    for decision_time in [1.0, 2.0, 4.0] {
        let (status, _) = compute(
            &app,
            json!({"decision_time": decision_time, "error_rate": 0.0, "robustness_score": 1.0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = history(&app).await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["input"]["decision_time"], 1.0);
    assert_eq!(entries[1]["input"]["decision_time"], 2.0);
    assert_eq!(entries[2]["input"]["decision_time"], 4.0);
}

#[tokio::test]
async fn test_computed_record_round_trips_through_history() {
    let app = app();

    let (_, record) = compute(
        &app,
        json!({"decision_time": 2.0, "error_rate": 0.1, "robustness_score": 0.9}),
    )
    .await;

    let (_, body) = history(&app).await;
    assert_eq!(body.as_array().unwrap()[0], record);
}

#[tokio::test]
async fn test_reset_clears_history() {
    let app = app();

    compute(
        &app,
        json!({"decision_time": 1.0, "error_rate": 0.0, "robustness_score": 1.0}),
    )
    .await;

    let (status, body) = send_json(&app, Method::POST, "/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "History cleared"}));

    let (_, body) = history(&app).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_out_of_range_inputs_still_compute() {
    let app = app();

    let (status, body) = compute(
        &app,
        json!({"decision_time": 1.0, "error_rate": 2.0, "robustness_score": 1.0}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dei"].as_f64().unwrap(), -1.0);
}

#[tokio::test]
async fn test_missing_field_is_a_validation_failure() {
    let app = app();

    let (status, _) = compute(&app, json!({"decision_time": 2.0})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/compute")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app();

    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_cors_preflight_mirrors_origin_and_allows_credentials() {
    let app = app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/compute")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_success());

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://example.com"
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}
