//! Change notifications emitted by the interval timer

use serde::{Deserialize, Serialize};

/// Observable attribute of the timer whose visible value changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// The timer started, paused or stopped
    Running,
    /// The stage flipped between working and resting
    Working,
    WorkRemaining,
    RestRemaining,
    /// Completed or total set count
    Sets,
    WorkDuration,
    RestDuration,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Running => "running",
            Property::Working => "working",
            Property::WorkRemaining => "work_remaining",
            Property::RestRemaining => "rest_remaining",
            Property::Sets => "sets",
            Property::WorkDuration => "work_duration",
            Property::RestDuration => "rest_duration",
        }
    }
}

/// Receiver of property change notifications.
///
/// Called synchronously from inside the timer operation that caused the
/// change, once per changed property.
pub trait PropertySink {
    fn property_changed(&mut self, property: Property);
}

/// Collects every notification in order
impl PropertySink for Vec<Property> {
    fn property_changed(&mut self, property: Property) {
        self.push(property);
    }
}

/// Discards notifications
impl PropertySink for () {
    fn property_changed(&mut self, _property: Property) {}
}
