//! Main application state management

use std::{
    sync::{Arc, Mutex, Weak},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

use super::{BroadcastSink, TimerSnapshot};
use crate::{
    clock::SystemClock,
    timer::{IntervalTimer, Property, TimerConfig},
};

/// The timer as owned by the daemon
pub type SharedTimer = IntervalTimer<SystemClock, BroadcastSink>;

/// Main application state that owns the interval timer
#[derive(Debug)]
pub struct AppState {
    /// The interval timer; every operation and tick runs under this lock
    pub timer: Mutex<SharedTimer>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Property change notifications emitted by the timer
    pub property_tx: broadcast::Sender<Property>,
    /// Snapshot after every operation and tick
    pub snapshot_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<TimerSnapshot>,
}

impl AppState {
    /// Create the state with a stopped timer ticking every `tick_period` once started
    pub fn new(port: u16, host: String, config: TimerConfig, tick_period: Duration) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<AppState>| {
            let weak = weak.clone();
            let clock = SystemClock::new(tick_period, move || {
                if let Some(state) = weak.upgrade() {
                    state.tick();
                }
            });

            let (property_tx, _) = broadcast::channel(100);
            let timer = IntervalTimer::new(config, clock, BroadcastSink::new(property_tx.clone()));
            let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::capture(&timer));

            Self {
                timer: Mutex::new(timer),
                start_time: Instant::now(),
                port,
                host,
                last_action: Mutex::new(None),
                last_action_time: Mutex::new(None),
                property_tx,
                snapshot_tx,
                _snapshot_rx: snapshot_rx,
            }
        })
    }

    /// Apply a user action to the timer and publish the resulting snapshot
    pub fn update_timer<F>(&self, action: &str, updater: F) -> Result<TimerSnapshot, String>
    where
        F: FnOnce(&mut SharedTimer),
    {
        info!("Timer action: {}", action);
        let snapshot = self.with_timer(updater)?;

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(snapshot)
    }

    /// Start or resume the timer
    pub fn start(&self) -> Result<TimerSnapshot, String> {
        self.update_timer("start", |timer| timer.start())
    }

    /// Stop the timer and rewind to the first set
    pub fn stop(&self) -> Result<TimerSnapshot, String> {
        self.update_timer("stop", |timer| timer.stop())
    }

    /// Periodic tick from the clock
    pub fn tick(&self) {
        if let Err(e) = self.with_timer(|timer| timer.tick()) {
            error!("Failed to tick timer: {}", e);
        }
    }

    /// Snapshot as of the last operation or tick
    pub fn get_snapshot(&self) -> TimerSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Snapshot read from the timer itself, after any operation in flight
    pub fn current_snapshot(&self) -> Result<TimerSnapshot, String> {
        self.timer.lock()
            .map(|timer| TimerSnapshot::capture(&*timer))
            .map_err(|e| format!("Failed to lock timer: {}", e))
    }

    /// Subscribe to property change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<Property> {
        self.property_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn with_timer<F>(&self, updater: F) -> Result<TimerSnapshot, String>
    where
        F: FnOnce(&mut SharedTimer),
    {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        updater(&mut *timer);
        let snapshot = TimerSnapshot::capture(&*timer);

        // Publish while still holding the lock so snapshots arrive in order
        if self.snapshot_tx.send(snapshot.clone()).is_err() {
            warn!("Failed to send timer snapshot");
        }
        drop(timer);

        Ok(snapshot)
    }
}
