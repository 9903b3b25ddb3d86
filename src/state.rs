use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::event::RedirectEvent;
use crate::infrastructure::reporting::ErrorReporter;

/// Shared application state injected into all handlers.
///
/// Both collaborators are explicitly constructed in [`crate::server::run`]
/// and passed in, so tests can substitute doubles.
#[derive(Clone)]
pub struct AppState {
    pub event_tx: mpsc::Sender<RedirectEvent>,
    pub reporter: Arc<dyn ErrorReporter>,
}

impl AppState {
    pub fn new(event_tx: mpsc::Sender<RedirectEvent>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { event_tx, reporter }
    }
}
