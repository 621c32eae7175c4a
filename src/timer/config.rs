//! Configured durations and set count

use serde::{Deserialize, Serialize};

use super::Stage;

/// Default work duration, in tenths of a second
pub const DEFAULT_WORK_TENTHS: u32 = 50;
/// Default rest duration, in tenths of a second
pub const DEFAULT_REST_TENTHS: u32 = 20;
pub const DEFAULT_TOTAL_SETS: u32 = 5;

/// Smallest work duration a decrement can produce
pub const MIN_WORK_TENTHS: u32 = 10;
/// Smallest rest duration a decrement can produce
pub const MIN_REST_TENTHS: u32 = 0;

/// Durations (in tenths of a second) and number of sets per workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub work_tenths: u32,
    pub rest_tenths: u32,
    pub total_sets: u32,
}

impl TimerConfig {
    pub fn new(work_tenths: u32, rest_tenths: u32, total_sets: u32) -> Self {
        Self {
            work_tenths,
            rest_tenths,
            total_sets,
        }
    }

    /// Configured duration of a stage
    pub fn duration(&self, stage: Stage) -> u32 {
        match stage {
            Stage::Working => self.work_tenths,
            Stage::Resting => self.rest_tenths,
        }
    }

    pub(crate) fn set_duration(&mut self, stage: Stage, tenths: u32) {
        match stage {
            Stage::Working => self.work_tenths = tenths,
            Stage::Resting => self.rest_tenths = tenths,
        }
    }

    /// Floor applied when a stage's duration is stepped down
    pub fn floor(stage: Stage) -> u32 {
        match stage {
            Stage::Working => MIN_WORK_TENTHS,
            Stage::Resting => MIN_REST_TENTHS,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_TENTHS, DEFAULT_REST_TENTHS, DEFAULT_TOTAL_SETS)
    }
}

/// Next duration after one increase (`sign = 1`) or decrease (`sign = -1`).
///
/// Below 10 s the step is 1 s. Below 60 s the value snaps to the nearest
/// 5 s before stepping by 5 s; from 60 s on it snaps to 10 s and steps by 10 s.
pub fn step_tenths(current: u32, sign: i64) -> u32 {
    let current = i64::from(current);
    let next = if current < 100 {
        current + 10 * sign
    } else if current < 600 {
        round_to(current, 50) + 50 * sign
    } else {
        round_to(current, 100) + 100 * sign
    };
    u32::try_from(next.max(0)).unwrap_or(u32::MAX)
}

fn round_to(value: i64, multiple: i64) -> i64 {
    (value + multiple / 2) / multiple * multiple
}
