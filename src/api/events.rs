//! Server-sent stream of timer property changes

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::state::AppState;

/// Handle GET /events - One event per property change, named after the
/// property, carrying the timer snapshot as JSON
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!("Event stream subscriber connected");
    let rx = state.subscribe();

    let events = stream::unfold((rx, state), |(mut rx, state)| async move {
        loop {
            match rx.recv().await {
                Ok(property) => {
                    let snapshot = match state.current_snapshot() {
                        Ok(snapshot) => snapshot,
                        Err(e) => {
                            warn!("Skipping {} event: {}", property.as_str(), e);
                            continue;
                        }
                    };
                    match Event::default().event(property.as_str()).json_data(&snapshot) {
                        Ok(event) => return Some((Ok::<_, Infallible>(event), (rx, state))),
                        Err(e) => warn!("Failed to encode {} event: {}", property.as_str(), e),
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Event stream lagged, {} changes skipped", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
