//! Clock capability consumed by the interval timer
//! 
//! The timer never reads wall-clock time itself. It asks a [`Clock`] how much
//! time passed since the last resume reference and tells it when to start or
//! cancel periodic ticks.

pub mod manual;
pub mod system;

use std::time::Duration;

pub use manual::ManualClock;
pub use system::{SystemClock, TickCallback};

/// Time source and tick scheduler for an [`IntervalTimer`](crate::timer::IntervalTimer).
///
/// The tick callback is bound when the clock is built; `start` arms it and
/// `reset` cancels it. Whoever receives the tick calls
/// [`IntervalTimer::tick`](crate::timer::IntervalTimer::tick).
pub trait Clock {
    /// Cancel any active periodic tick.
    fn reset(&mut self);

    /// Begin delivering periodic ticks until `reset` is called.
    fn start(&mut self);

    /// Time since the last resume reference.
    fn elapsed(&self) -> Duration;

    /// Time between the resume reference and the last pause mark.
    fn paused(&self) -> Duration;

    /// Move the resume reference to now.
    fn mark_resume_start(&mut self);

    /// Record now as the start of a pause.
    fn mark_pause_start(&mut self);

    /// Shift the resume reference forward by the time spent paused, so the
    /// pause is excluded from later `elapsed` readings.
    fn fold_pause_into_start(&mut self);
}
