//! HTTP API module
//! 
//! This module contains all HTTP endpoint handlers and response structures.

pub mod events;
pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use events::events_handler;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/pause", post(pause_handler))
        .route("/stop", post(stop_handler))
        .route("/running", put(running_handler))
        .route("/work", put(work_entry_handler))
        .route("/work/increase", post(work_increase_handler))
        .route("/work/decrease", post(work_decrease_handler))
        .route("/rest", put(rest_entry_handler))
        .route("/rest/increase", post(rest_increase_handler))
        .route("/rest/decrease", post(rest_decrease_handler))
        .route("/sets", put(sets_entry_handler))
        .route("/sets/increase", post(sets_increase_handler))
        .route("/sets/decrease", post(sets_decrease_handler))
        .route("/status", get(status_handler))
        .route("/events", get(events_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
