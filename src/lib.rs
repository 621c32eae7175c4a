//! Interval Timer - A repeating work/rest countdown with an HTTP control surface
//! 
//! This library provides the interval timer state machine, the clock
//! capability it is driven by, lenient duration entry/formatting, and the
//! HTTP daemon that exposes the timer to a presentation layer.

pub mod clock;
pub mod config;
pub mod format;
pub mod timer;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use state::AppState;
pub use timer::{IntervalTimer, Phase, Property, PropertySink, Stage, TimerConfig};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
