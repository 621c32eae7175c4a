use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use interval_timer::{
    api::create_router,
    state::AppState,
    timer::{Property, TimerConfig},
};

fn test_state(config: TimerConfig) -> Arc<AppState> {
    AppState::new(20554, "127.0.0.1".to_string(), config, Duration::from_millis(100))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder().method(method).uri(uri).body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let app = create_router(test_state(TimerConfig::default()));
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_status_reports_defaults() {
    let app = create_router(test_state(TimerConfig::default()));
    let (status, body) = send(&app, Method::GET, "/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["phase"], "stopped");
    assert_eq!(body["timer"]["work_remaining"], "5.0");
    assert_eq!(body["timer"]["rest_remaining"], "2.0");
    assert_eq!(body["timer"]["total_sets"], 5);
    assert_eq!(body["last_action"], Value::Null);
}

#[tokio::test]
async fn test_start_pause_stop() {
    let state = test_state(TimerConfig::default());
    let app = create_router(state.clone());

    let (_, body) = send(&app, Method::POST, "/start", None).await;
    assert_eq!(body["status"], "started");
    assert_eq!(body["timer"]["running"], true);
    assert_eq!(body["timer"]["working"], true);

    let (_, body) = send(&app, Method::POST, "/pause", None).await;
    assert_eq!(body["status"], "paused");
    assert_eq!(body["timer"]["running"], false);

    let (_, body) = send(&app, Method::POST, "/stop", None).await;
    assert_eq!(body["status"], "stopped");
    assert_eq!(body["timer"]["work_remaining_tenths"], 50);

    let (_, status) = send(&app, Method::GET, "/status", None).await;
    assert_eq!(status["last_action"], "stop");
    assert_eq!(status["timer"]["phase"], "stopped");
}

#[tokio::test]
async fn test_running_toggle() {
    let app = create_router(test_state(TimerConfig::default()));

    let (_, body) = send(&app, Method::PUT, "/running", Some(json!({ "running": true }))).await;
    assert_eq!(body["status"], "started");

    let (_, body) = send(&app, Method::PUT, "/running", Some(json!({ "running": false }))).await;
    assert_eq!(body["status"], "paused");
}

#[tokio::test]
async fn test_duration_steps_while_stopped() {
    let app = create_router(test_state(TimerConfig::default()));

    let (_, body) = send(&app, Method::POST, "/work/increase", None).await;
    assert_eq!(body["timer"]["work_duration"], "6.0");
    assert_eq!(body["timer"]["work_remaining"], "6.0");

    let (_, body) = send(&app, Method::POST, "/rest/decrease", None).await;
    assert_eq!(body["timer"]["rest_duration_tenths"], 10);

    let (_, body) = send(&app, Method::POST, "/rest/decrease", None).await;
    assert_eq!(body["timer"]["rest_duration_tenths"], 0);

    let (status, body) = send(&app, Method::POST, "/rest/decrease", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["rest_duration_tenths"], 0);
}

#[tokio::test]
async fn test_duration_step_while_paused_updates_remaining() {
    let app = create_router(test_state(TimerConfig::default()));

    send(&app, Method::POST, "/start", None).await;
    let (_, body) = send(&app, Method::POST, "/pause", None).await;
    assert_eq!(body["status"], "paused");

    let (_, body) = send(&app, Method::POST, "/work/increase", None).await;
    assert_eq!(body["timer"]["work_duration_tenths"], 60);
    let remaining = body["timer"]["work_remaining_tenths"].as_u64().unwrap();
    assert!(remaining > 50 && remaining <= 60, "remaining {}", remaining);

    let (_, status) = send(&app, Method::GET, "/status", None).await;
    assert_eq!(status["timer"]["work_remaining_tenths"].as_u64().unwrap(), remaining);
    assert_eq!(status["timer"]["phase"], "paused");
}

#[tokio::test]
async fn test_typed_durations() {
    let app = create_router(test_state(TimerConfig::default()));

    let (_, body) = send(&app, Method::PUT, "/work", Some(json!({ "value": "1:05" }))).await;
    assert_eq!(body["timer"]["work_duration_tenths"], 650);
    assert_eq!(body["timer"]["work_duration"], "1:05");

    let (_, body) = send(&app, Method::PUT, "/rest", Some(json!({ "value": "12.6 s" }))).await;
    assert_eq!(body["timer"]["rest_duration_tenths"], 130);

    let (status, body) = send(&app, Method::PUT, "/rest", Some(json!({ "value": "1:2:3" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["rest_duration_tenths"], 0);
}

#[tokio::test]
async fn test_set_count_limits() {
    let app = create_router(test_state(TimerConfig::new(50, 20, 2)));

    let (_, body) = send(&app, Method::POST, "/sets/decrease", None).await;
    assert_eq!(body["timer"]["total_sets"], 1);

    let (_, body) = send(&app, Method::POST, "/sets/decrease", None).await;
    assert_eq!(body["timer"]["total_sets"], 1);

    let (_, body) = send(&app, Method::PUT, "/sets", Some(json!({ "value": "zero" }))).await;
    assert_eq!(body["timer"]["total_sets"], 1);

    let (_, body) = send(&app, Method::PUT, "/sets", Some(json!({ "value": "8" }))).await;
    assert_eq!(body["timer"]["total_sets"], 8);
    assert_eq!(body["timer"]["sets"], "1 of 8");

    let (_, body) = send(&app, Method::POST, "/sets/increase", None).await;
    assert_eq!(body["timer"]["total_sets"], 9);
}

#[tokio::test]
async fn test_rejected_set_count_still_notifies() {
    let state = test_state(TimerConfig::default());
    let app = create_router(state.clone());
    let mut rx = state.subscribe();

    send(&app, Method::PUT, "/sets", Some(json!({ "value": "0" }))).await;
    assert_eq!(rx.try_recv().unwrap(), Property::Sets);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_start_broadcasts_running() {
    let state = test_state(TimerConfig::default());
    let app = create_router(state.clone());
    let mut rx = state.subscribe();

    send(&app, Method::POST, "/start", None).await;
    assert_eq!(rx.recv().await.unwrap(), Property::Running);

    send(&app, Method::POST, "/stop", None).await;
}

#[tokio::test]
async fn test_ticks_advance_and_stop_halts_them() {
    let state = AppState::new(
        20554,
        "127.0.0.1".to_string(),
        TimerConfig::new(10, 10, 1),
        Duration::from_millis(10),
    );
    state.start().unwrap();

    tokio::time::sleep(Duration::from_millis(1300)).await;
    let snapshot = state.get_snapshot();
    assert_eq!(snapshot.phase, "started");
    assert!(!snapshot.working);
    assert_eq!(snapshot.work_remaining_tenths, 0);

    state.stop().unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    let snapshot = state.get_snapshot();
    assert!(snapshot.is_stopped());
    assert_eq!(snapshot.work_remaining_tenths, 10);
}
