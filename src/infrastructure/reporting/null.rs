//! No-op error reporter for disabled reporting.

use async_trait::async_trait;
use tracing::debug;

use super::reporter::ErrorReporter;

/// An error reporter that discards every report.
///
/// Used when no DSN is configured and in tests.
pub struct NullReporter;

impl NullReporter {
    /// Creates a new NullReporter instance.
    pub fn new() -> Self {
        debug!("Using NullReporter (error reporting disabled)");
        Self
    }
}

impl Default for NullReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ErrorReporter for NullReporter {
    async fn report(&self, _message: &str) {}
}
