use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::helpers::{MockProbe, TEST_ENVIRONMENT, TEST_VERSION, test_server};

fn parse_timestamp(body: &Value) -> DateTime<Utc> {
    let raw = body["timestamp"].as_str().expect("timestamp is a string");
    DateTime::parse_from_rfc3339(raw)
        .expect("timestamp is ISO-8601")
        .with_timezone(&Utc)
}

fn without_volatile_fields(mut body: Value) -> Value {
    let map = body.as_object_mut().unwrap();
    map.remove("timestamp");
    map.remove("uptime");
    body
}

// ── GET /health/ping ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_ping_with_exactly_four_fields() {
    let server = test_server(MockProbe::healthy());

    let response = server.get("/health/ping").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["environment", "status", "timestamp", "version"]);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], TEST_VERSION);
    assert_eq!(body["environment"], TEST_ENVIRONMENT);
}

#[tokio::test]
async fn should_not_touch_database_on_ping_even_when_it_is_down() {
    let probe = MockProbe::failing("connection refused");
    let calls = probe.calls_handle();
    let server = test_server(probe);

    let response = server.get("/health/ping").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn should_stamp_ping_with_current_time() {
    let server = test_server(MockProbe::healthy());

    let before = Utc::now();
    let body: Value = server.get("/health/ping").await.json();
    let after = Utc::now();

    let stamped = parse_timestamp(&body);
    // Serialized with millisecond precision.
    assert!(stamped >= before - chrono::Duration::milliseconds(1));
    assert!(stamped <= after);
}

// ── GET /health/ ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_healthy_database_when_probe_succeeds() {
    let probe = MockProbe::healthy();
    let calls = probe.calls_handle();
    let server = test_server(probe);

    let response = server.get("/health/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], TEST_VERSION);
    assert_eq!(body["environment"], TEST_ENVIRONMENT);
    assert_eq!(
        body["dependencies"],
        json!({ "database": { "status": "healthy", "message": "Connected successfully" } })
    );
    assert!(body["system_info"]["platform"].is_string());
    assert!(body["system_info"]["rust_version"].is_string());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn should_report_unhealthy_database_with_200_when_probe_fails() {
    let server = test_server(MockProbe::failing("connection refused"));

    let response = server.get("/health/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(
        body["dependencies"],
        json!({ "database": { "status": "unhealthy", "message": "connection refused" } })
    );
}

#[tokio::test]
async fn should_serve_deep_check_without_trailing_slash() {
    let server = test_server(MockProbe::healthy());

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["dependencies"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn should_report_non_negative_uptime_and_valid_timestamp() {
    let server = test_server(MockProbe::healthy());

    let before = Utc::now();
    let started = std::time::Instant::now();
    let body: Value = server.get("/health/").await.json();
    let elapsed = started.elapsed().as_secs_f64();
    let after = Utc::now();

    let uptime = body["uptime"].as_f64().expect("uptime is a number");
    assert!(uptime >= 0.0);
    assert!(uptime <= elapsed);

    let stamped = parse_timestamp(&body);
    assert!(stamped >= before - chrono::Duration::milliseconds(1));
    assert!(stamped <= after);
}

#[tokio::test]
async fn should_return_identical_shape_on_repeated_calls() {
    let server = test_server(MockProbe::failing("timeout"));

    let first: Value = server.get("/health/").await.json();
    let second: Value = server.get("/health/").await.json();
    assert_eq!(without_volatile_fields(first), without_volatile_fields(second));

    let first: Value = server.get("/health/ping").await.json();
    let second: Value = server.get("/health/ping").await.json();
    assert_eq!(without_volatile_fields(first), without_volatile_fields(second));
}

// ── Router ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_attach_request_id_to_responses() {
    let server = test_server(MockProbe::healthy());

    let response = server.get("/health/ping").await;
    let id = response.header("x-request-id");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn should_return_not_found_body_for_unknown_path() {
    let server = test_server(MockProbe::healthy());

    let response = server.get("/status").expect_failure().await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body, json!({ "kind": "NOT_FOUND", "message": "not found" }));
}

#[tokio::test]
async fn should_reject_wrong_method_on_health_routes() {
    let server = test_server(MockProbe::healthy());

    let response = server.post("/health/ping").expect_failure().await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = response.json();
    assert_eq!(body["kind"], "METHOD_NOT_ALLOWED");
}
