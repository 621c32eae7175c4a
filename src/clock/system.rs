//! Wall-clock implementation backed by a tokio tick task

use std::{
    fmt,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};

use super::Clock;
use crate::tasks::tick_task;

/// Callback invoked on every periodic tick
pub type TickCallback = Arc<dyn Fn() + Send + Sync>;

/// Production clock: elapsed time from [`Instant`], ticks from a spawned task.
///
/// `reset` aborts the tick task. Must be started from inside a tokio runtime;
/// outside one, ticks are disabled and a warning is logged.
pub struct SystemClock {
    period: Duration,
    on_tick: TickCallback,
    resume_start: Instant,
    pause_start: Instant,
    ticker: Option<JoinHandle<()>>,
}

impl SystemClock {
    /// Create a clock that calls `on_tick` every `period` once started
    pub fn new<F>(period: Duration, on_tick: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let now = Instant::now();
        Self {
            period,
            on_tick: Arc::new(on_tick),
            resume_start: now,
            pause_start: now,
            ticker: None,
        }
    }

    /// Tick period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether a tick task is currently running
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Clock for SystemClock {
    fn reset(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
            debug!("Tick task cancelled");
        }
    }

    fn start(&mut self) {
        self.reset();

        match Handle::try_current() {
            Ok(runtime) => {
                let task = tick_task(self.period, Arc::clone(&self.on_tick));
                self.ticker = Some(runtime.spawn(task));
                debug!("Tick task started with {:?} period", self.period);
            }
            Err(e) => warn!("No tokio runtime available, ticks disabled: {}", e),
        }
    }

    fn elapsed(&self) -> Duration {
        self.resume_start.elapsed()
    }

    fn paused(&self) -> Duration {
        self.pause_start.saturating_duration_since(self.resume_start)
    }

    fn mark_resume_start(&mut self) {
        self.resume_start = Instant::now();
    }

    fn mark_pause_start(&mut self) {
        self.pause_start = Instant::now();
    }

    fn fold_pause_into_start(&mut self) {
        self.resume_start += self.pause_start.elapsed();
    }
}

impl Drop for SystemClock {
    fn drop(&mut self) {
        self.reset();
    }
}

impl fmt::Debug for SystemClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClock")
            .field("period", &self.period)
            .field("resume_start", &self.resume_start)
            .field("pause_start", &self.pause_start)
            .field("ticking", &self.is_ticking())
            .finish()
    }
}
