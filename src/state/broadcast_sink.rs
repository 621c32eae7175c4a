//! Property sink that fans notifications out over a tokio broadcast channel

use tokio::sync::broadcast;
use tracing::trace;

use crate::timer::{Property, PropertySink};

/// Forwards every property change to broadcast subscribers
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    tx: broadcast::Sender<Property>,
}

impl BroadcastSink {
    pub fn new(tx: broadcast::Sender<Property>) -> Self {
        Self { tx }
    }
}

impl PropertySink for BroadcastSink {
    fn property_changed(&mut self, property: Property) {
        // No subscribers is the normal idle case
        if self.tx.send(property).is_err() {
            trace!("No listeners for {} change", property.as_str());
        }
    }
}
