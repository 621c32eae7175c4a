//! State management module
//! 
//! This module owns the shared interval timer and the channels that publish
//! its changes.

pub mod app_state;
pub mod broadcast_sink;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, SharedTimer};
pub use broadcast_sink::BroadcastSink;
pub use timer_state::TimerSnapshot;
