//! # Event Logger
//!
//! Subscribes to every topic on the event bus and writes each event as a
//! structured log line with its JSON payload.
//!
//! ```text
//! Components ──publish──→ Event Bus ──subscribe──→ EventLogger ──→ tracing
//! ```

use shared_bus::{EventFilter, InMemoryEventBus, OracleEvent, Subscription};
use tracing::{error, info, instrument, warn};

/// Background task draining the event bus into the log.
pub struct EventLogger {
    subscription: Subscription,
}

impl EventLogger {
    /// Subscribe to all topics. Events published before this call are not seen.
    pub fn new(event_bus: &InMemoryEventBus) -> Self {
        Self {
            subscription: event_bus.subscribe(EventFilter::all()),
        }
    }

    /// Log events until the bus closes.
    #[instrument(skip(self), name = "event_logger")]
    pub async fn run(mut self) {
        info!("[EventLogger] Started listening for events");

        loop {
            match self.subscription.recv().await {
                Some(event) => log_event(&event),
                None => {
                    error!("[EventLogger] Event bus closed, shutting down");
                    break;
                }
            }
        }
    }
}

/// Write one event as a log line.
pub fn log_event(event: &OracleEvent) {
    match serde_json::to_string(event) {
        Ok(payload) => info!(
            topic = ?event.topic(),
            event = event.name(),
            payload = %payload,
            "Event emitted"
        ),
        Err(e) => warn!(event = event.name(), error = %e, "Event not serializable"),
    }
}
