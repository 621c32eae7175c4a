//! Periodic tick background task

use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::clock::TickCallback;

/// Call `on_tick` every `period`, the first time immediately.
///
/// Runs until the task is aborted by [`SystemClock::reset`](crate::clock::SystemClock).
pub async fn tick_task(period: Duration, on_tick: TickCallback) {
    debug!("Starting tick task");

    let mut interval = interval(period);
    // Countdowns are computed from the clock, so late ticks need no catching up
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        on_tick();
    }
}
