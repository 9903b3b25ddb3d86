//! Background worker delivering redirect events to the analytics sink.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::domain::event::RedirectEvent;
use crate::infrastructure::analytics::AnalyticsSink;
use crate::infrastructure::reporting::ErrorReporter;

/// Drains the event channel and delivers each event to the sink.
///
/// Runs until the sender side of the channel is closed, then drains the
/// remaining events and returns; joining the spawned task therefore flushes
/// the queue during shutdown.
///
/// Delivery failures are logged and forwarded to the error reporter. They
/// never reach the HTTP layer: the response for the originating request has
/// usually already been sent when a failure surfaces here.
pub async fn run_event_worker(
    mut rx: mpsc::Receiver<RedirectEvent>,
    sink: Arc<dyn AnalyticsSink>,
    reporter: Arc<dyn ErrorReporter>,
) {
    while let Some(event) = rx.recv().await {
        debug!(
            action = event.action.as_str(),
            device = event.device.as_str(),
            "Delivering redirect event"
        );

        if let Err(e) = sink.send(&event).await {
            error!("Failed to deliver analytics event: {}", e);
            reporter
                .report(&format!("analytics delivery failed: {e}"))
                .await;
        }
    }

    debug!("Event channel closed, worker exiting");
}
