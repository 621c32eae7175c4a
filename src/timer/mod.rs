//! Interval timer state machine
//!
//! A repeating work/rest countdown. Each set counts the work duration down to
//! zero, then the rest duration; after the configured number of sets the
//! timer stops itself. Time comes from an injected [`Clock`] and every visible
//! change is reported to an injected [`PropertySink`].

pub mod config;
pub mod phase;
pub mod property;

use std::time::Duration;
use tracing::{debug, info};

use crate::clock::Clock;

pub use config::{step_tenths, TimerConfig};
pub use phase::{Phase, Stage};
pub use property::{Property, PropertySink};

/// Values a presentation layer can observe, compared before and after each
/// operation to decide which notifications to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Observed {
    running: bool,
    working: bool,
    work_remaining: u32,
    rest_remaining: u32,
    sets: (u32, u32),
    work_duration: u32,
    rest_duration: u32,
}

/// Work/rest countdown driven by a [`Clock`]
#[derive(Debug)]
pub struct IntervalTimer<C, S> {
    clock: C,
    sink: S,
    config: TimerConfig,
    phase: Phase,
    completed_sets: u32,
    work_remaining: u32,
    rest_remaining: u32,
}

impl<C: Clock, S: PropertySink> IntervalTimer<C, S> {
    /// Create a stopped timer with full remaining times
    pub fn new(config: TimerConfig, clock: C, sink: S) -> Self {
        Self {
            clock,
            sink,
            config,
            phase: Phase::Stopped,
            completed_sets: 0,
            work_remaining: config.work_tenths,
            rest_remaining: config.rest_tenths,
        }
    }

    /// Start from stopped, or resume from paused. No-op while started.
    pub fn start(&mut self) {
        let before = self.observed();

        match self.phase {
            Phase::Started(_) => {
                debug!("Start ignored, timer already running");
                return;
            }
            Phase::Stopped => {
                self.clock.mark_resume_start();
                self.completed_sets = 0;
                self.phase = Phase::Started(Stage::Working);
                info!(
                    "Timer started: work={} rest={} sets={}",
                    self.config.work_tenths, self.config.rest_tenths, self.config.total_sets
                );
            }
            Phase::Paused(stage) => {
                self.clock.fold_pause_into_start();
                self.phase = Phase::Started(stage);
                info!("Timer resumed while {:?}", stage);
            }
        }

        self.clock.start();
        self.publish(before);
    }

    /// Pause a started timer. No-op otherwise.
    pub fn pause(&mut self) {
        let Phase::Started(stage) = self.phase else {
            debug!("Pause ignored, timer is {}", self.phase.as_str());
            return;
        };

        let before = self.observed();
        self.clock.mark_pause_start();
        self.clock.reset();
        self.phase = Phase::Paused(stage);
        info!("Timer paused while {:?}", stage);
        self.publish(before);
    }

    /// Stop and rewind to the first set. Cancels ticks before returning.
    pub fn stop(&mut self) {
        let before = self.observed();
        self.clock.reset();
        self.rewind();
        info!("Timer stopped");
        self.publish(before);
    }

    /// Two-way play/pause toggle: `true` starts or resumes, `false` pauses
    pub fn set_running(&mut self, running: bool) {
        if running {
            self.start();
        } else {
            self.pause();
        }
    }

    /// Periodic tick from the clock. Ignored unless started.
    pub fn tick(&mut self) {
        if !self.phase.is_running() {
            debug!("Tick ignored, timer is {}", self.phase.as_str());
            return;
        }
        self.refresh();
    }

    /// Recompute the remaining times from the clock, firing any stage
    /// transition whose countdown reached zero
    pub fn refresh(&mut self) {
        let before = self.observed();
        self.evaluate();
        self.publish(before);
    }

    fn evaluate(&mut self) {
        match self.phase {
            Phase::Stopped => {
                self.work_remaining = self.config.work_tenths;
                self.rest_remaining = self.config.rest_tenths;
            }
            Phase::Paused(stage) => {
                let left = self.config.duration(stage).saturating_sub(tenths(self.clock.paused()));
                self.set_remaining(stage, left);
            }
            Phase::Started(stage) => {
                let left = self.config.duration(stage).saturating_sub(tenths(self.clock.elapsed()));
                self.set_remaining(stage, left);
                if left == 0 {
                    match stage {
                        Stage::Working => self.finish_work(),
                        Stage::Resting => self.finish_rest(),
                    }
                }
            }
        }
    }

    pub fn increase_work_duration(&mut self) {
        self.step_duration(Stage::Working, 1);
    }

    pub fn decrease_work_duration(&mut self) {
        self.step_duration(Stage::Working, -1);
    }

    pub fn increase_rest_duration(&mut self) {
        self.step_duration(Stage::Resting, 1);
    }

    pub fn decrease_rest_duration(&mut self) {
        self.step_duration(Stage::Resting, -1);
    }

    /// Replace the work duration, e.g. from a typed-in value
    pub fn set_work_duration(&mut self, tenths: u32) {
        self.set_duration(Stage::Working, tenths);
    }

    /// Replace the rest duration, e.g. from a typed-in value
    pub fn set_rest_duration(&mut self, tenths: u32) {
        self.set_duration(Stage::Resting, tenths);
    }

    pub fn increase_sets(&mut self) {
        let before = self.observed();
        self.config.total_sets = self.config.total_sets.saturating_add(1);
        debug!("Total sets increased to {}", self.config.total_sets);
        self.publish(before);
    }

    /// Remove one set, unless that would drop below the set in progress
    pub fn decrease_sets(&mut self) {
        if self.config.total_sets <= self.completed_sets + 1 {
            debug!(
                "Decrease ignored, {} sets completed of {}",
                self.completed_sets, self.config.total_sets
            );
            return;
        }

        let before = self.observed();
        self.config.total_sets -= 1;
        debug!("Total sets decreased to {}", self.config.total_sets);
        self.publish(before);
    }

    /// Replace the total set count, e.g. from a typed-in value.
    ///
    /// Zero and counts not above the completed sets are rejected. A
    /// [`Property::Sets`] notification is emitted either way, so an observer
    /// showing a rejected value is corrected.
    pub fn set_total_sets(&mut self, total: u32) {
        let before = self.observed();

        if total != 0 && total > self.completed_sets {
            self.config.total_sets = total;
            debug!("Total sets set to {}", total);
        } else {
            debug!(
                "Rejected total of {} sets with {} completed",
                total, self.completed_sets
            );
        }

        let emitted = self.publish(before);
        if !emitted.contains(&Property::Sets) {
            self.sink.property_changed(Property::Sets);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stage(&self) -> Stage {
        self.phase.stage()
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn is_working(&self) -> bool {
        self.phase.stage() == Stage::Working
    }

    pub fn completed_sets(&self) -> u32 {
        self.completed_sets
    }

    pub fn total_sets(&self) -> u32 {
        self.config.total_sets
    }

    /// Work countdown in tenths of a second, as of the last evaluation
    pub fn work_remaining(&self) -> u32 {
        self.work_remaining
    }

    /// Rest countdown in tenths of a second, as of the last evaluation
    pub fn rest_remaining(&self) -> u32 {
        self.rest_remaining
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn step_duration(&mut self, stage: Stage, sign: i64) {
        let current = self.config.duration(stage);
        if sign < 0 && current < 10 {
            debug!("Decrease ignored, {:?} duration already {}", stage, current);
            return;
        }

        let next = step_tenths(current, sign).max(TimerConfig::floor(stage));
        self.set_duration(stage, next);
    }

    fn set_duration(&mut self, stage: Stage, tenths: u32) {
        let before = self.observed();
        self.config.set_duration(stage, tenths);
        self.evaluate();
        debug!("{:?} duration set to {}", stage, tenths);
        self.publish(before);
    }

    fn set_remaining(&mut self, stage: Stage, tenths: u32) {
        match stage {
            Stage::Working => self.work_remaining = tenths,
            Stage::Resting => self.rest_remaining = tenths,
        }
    }

    fn finish_work(&mut self) {
        self.clock.mark_resume_start();
        self.phase = Phase::Started(Stage::Resting);
        info!("Set {} work finished, resting", self.completed_sets + 1);
    }

    fn finish_rest(&mut self) {
        self.completed_sets += 1;

        if self.completed_sets < self.config.total_sets {
            self.work_remaining = self.config.work_tenths;
            self.rest_remaining = self.config.rest_tenths;
            self.clock.mark_resume_start();
            self.phase = Phase::Started(Stage::Working);
            info!(
                "Set {} of {} completed",
                self.completed_sets, self.config.total_sets
            );
        } else {
            info!("All {} sets completed, stopping", self.config.total_sets);
            self.clock.reset();
            self.rewind();
        }
    }

    fn rewind(&mut self) {
        self.phase = Phase::Stopped;
        self.completed_sets = 0;
        self.work_remaining = self.config.work_tenths;
        self.rest_remaining = self.config.rest_tenths;
    }

    fn observed(&self) -> Observed {
        Observed {
            running: self.is_running(),
            working: self.is_working(),
            work_remaining: self.work_remaining,
            rest_remaining: self.rest_remaining,
            sets: (self.completed_sets, self.config.total_sets),
            work_duration: self.config.work_tenths,
            rest_duration: self.config.rest_tenths,
        }
    }

    /// Notify the sink of every property that differs from `before`
    fn publish(&mut self, before: Observed) -> Vec<Property> {
        let after = self.observed();
        let changes = [
            (Property::Running, before.running != after.running),
            (Property::Working, before.working != after.working),
            (Property::WorkRemaining, before.work_remaining != after.work_remaining),
            (Property::RestRemaining, before.rest_remaining != after.rest_remaining),
            (Property::Sets, before.sets != after.sets),
            (Property::WorkDuration, before.work_duration != after.work_duration),
            (Property::RestDuration, before.rest_duration != after.rest_duration),
        ];

        let emitted: Vec<Property> = changes
            .into_iter()
            .filter_map(|(property, changed)| changed.then_some(property))
            .collect();

        for property in &emitted {
            debug!("Property changed: {}", property.as_str());
            self.sink.property_changed(*property);
        }
        emitted
    }
}

/// Whole tenths of a second in a duration
fn tenths(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis() / 100).unwrap_or(u32::MAX)
}
