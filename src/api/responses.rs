//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TimerSnapshot;

/// API response structure for timer action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Timer phase after the action
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl ApiResponse {
    /// Create a response reporting the timer after an action
    pub fn new(message: String, timer: TimerSnapshot) -> Self {
        Self {
            status: timer.phase.clone(),
            message,
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Status response with server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Typed-in value for a duration or set count, parsed leniently
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    pub value: String,
}

/// Play/pause toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunningRequest {
    pub running: bool,
}
