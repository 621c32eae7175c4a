//! Serializable snapshot of the interval timer

use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    format::{format_duration, format_sets},
    timer::{IntervalTimer, PropertySink},
};

/// Everything a client can observe about the timer at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// `stopped`, `started` or `paused`
    pub phase: String,
    pub running: bool,
    pub working: bool,
    pub work_remaining_tenths: u32,
    pub rest_remaining_tenths: u32,
    pub work_remaining: String,
    pub rest_remaining: String,
    pub work_duration_tenths: u32,
    pub rest_duration_tenths: u32,
    pub work_duration: String,
    pub rest_duration: String,
    pub completed_sets: u32,
    pub total_sets: u32,
    /// Set in progress out of the total, e.g. `2 of 5`
    pub sets: String,
}

impl TimerSnapshot {
    /// Capture the current values of a timer
    pub fn capture<C: Clock, S: PropertySink>(timer: &IntervalTimer<C, S>) -> Self {
        let config = timer.config();
        let current_set = (timer.completed_sets() + 1).min(config.total_sets.max(1));

        Self {
            phase: timer.phase().as_str().to_string(),
            running: timer.is_running(),
            working: timer.is_working(),
            work_remaining_tenths: timer.work_remaining(),
            rest_remaining_tenths: timer.rest_remaining(),
            work_remaining: format_duration(timer.work_remaining()),
            rest_remaining: format_duration(timer.rest_remaining()),
            work_duration_tenths: config.work_tenths,
            rest_duration_tenths: config.rest_tenths,
            work_duration: format_duration(config.work_tenths),
            rest_duration: format_duration(config.rest_tenths),
            completed_sets: timer.completed_sets(),
            total_sets: config.total_sets,
            sets: format_sets(current_set, config.total_sets),
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == "stopped"
    }
}
