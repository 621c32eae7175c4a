//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::error;

use crate::{
    format::{parse_duration, parse_sets},
    state::{AppState, SharedTimer},
};
use super::responses::{ApiResponse, EntryRequest, HealthResponse, RunningRequest, StatusResponse};

type ActionResult = Result<Json<ApiResponse>, StatusCode>;

/// Run an action against the timer and wrap the resulting snapshot
fn apply<F>(state: &AppState, action: &str, message: &str, updater: F) -> ActionResult
where
    F: FnOnce(&mut SharedTimer),
{
    match state.update_timer(action, updater) {
        Ok(snapshot) => Ok(Json(ApiResponse::new(message.to_string(), snapshot))),
        Err(e) => {
            error!("Failed to apply {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start or resume the timer
pub async fn start_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    apply(&state, "start", "Timer started", |timer| timer.start())
}

/// Handle POST /pause - Pause the timer
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    apply(&state, "pause", "Timer paused", |timer| timer.pause())
}

/// Handle POST /stop - Stop the timer and rewind
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    apply(&state, "stop", "Timer stopped", |timer| timer.stop())
}

/// Handle PUT /running - Play/pause toggle
pub async fn running_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RunningRequest>,
) -> ActionResult {
    let message = if request.running { "Timer running" } else { "Timer paused" };
    apply(&state, "set-running", message, |timer| timer.set_running(request.running))
}

/// Handle POST /work/increase
pub async fn work_increase_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    apply(&state, "work-increase", "Work duration increased", |timer| {
        timer.increase_work_duration()
    })
}

/// Handle POST /work/decrease
pub async fn work_decrease_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    apply(&state, "work-decrease", "Work duration decreased", |timer| {
        timer.decrease_work_duration()
    })
}

/// Handle POST /rest/increase
pub async fn rest_increase_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    apply(&state, "rest-increase", "Rest duration increased", |timer| {
        timer.increase_rest_duration()
    })
}

/// Handle POST /rest/decrease
pub async fn rest_decrease_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    apply(&state, "rest-decrease", "Rest duration decreased", |timer| {
        timer.decrease_rest_duration()
    })
}

/// Handle POST /sets/increase
pub async fn sets_increase_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    apply(&state, "sets-increase", "Total sets increased", |timer| timer.increase_sets())
}

/// Handle POST /sets/decrease
pub async fn sets_decrease_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    apply(&state, "sets-decrease", "Total sets decreased", |timer| timer.decrease_sets())
}

/// Handle PUT /work - Typed-in work duration
pub async fn work_entry_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EntryRequest>,
) -> ActionResult {
    let tenths = parse_duration(&request.value);
    apply(&state, "work-entry", "Work duration set", |timer| timer.set_work_duration(tenths))
}

/// Handle PUT /rest - Typed-in rest duration
pub async fn rest_entry_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EntryRequest>,
) -> ActionResult {
    let tenths = parse_duration(&request.value);
    apply(&state, "rest-entry", "Rest duration set", |timer| timer.set_rest_duration(tenths))
}

/// Handle PUT /sets - Typed-in total set count
pub async fn sets_entry_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EntryRequest>,
) -> ActionResult {
    let total = parse_sets(&request.value);
    apply(&state, "sets-entry", "Total sets set", |timer| timer.set_total_sets(total))
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: state.get_snapshot(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
