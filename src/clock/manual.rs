//! Tick-driven clock for tests and simulations

use std::time::Duration;

use super::Clock;

/// A clock whose time only moves when [`ManualClock::advance`] is called.
///
/// Ticks are not delivered by the clock; the driver checks
/// [`ManualClock::is_ticking`] and calls the timer's `tick` itself.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
    resume_start: Duration,
    pause_start: Duration,
    ticking: bool,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Whether periodic ticks are currently armed
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Total simulated time since the clock was created
    pub fn now(&self) -> Duration {
        self.now
    }
}

impl Clock for ManualClock {
    fn reset(&mut self) {
        self.ticking = false;
    }

    fn start(&mut self) {
        self.ticking = true;
    }

    fn elapsed(&self) -> Duration {
        self.now.saturating_sub(self.resume_start)
    }

    fn paused(&self) -> Duration {
        self.pause_start.saturating_sub(self.resume_start)
    }

    fn mark_resume_start(&mut self) {
        self.resume_start = self.now;
    }

    fn mark_pause_start(&mut self) {
        self.pause_start = self.now;
    }

    fn fold_pause_into_start(&mut self) {
        self.resume_start += self.now.saturating_sub(self.pause_start);
    }
}
