//! No-op analytics sink for disabled tracking.

use async_trait::async_trait;
use tracing::debug;

use super::sink::{AnalyticsResult, AnalyticsSink};
use crate::domain::event::RedirectEvent;

/// An analytics sink that discards every event.
///
/// Used when no tracking id is configured and in tests. All deliveries
/// succeed immediately without any network traffic.
pub struct NullSink;

impl NullSink {
    /// Creates a new NullSink instance.
    pub fn new() -> Self {
        debug!("Using NullSink (tracking disabled)");
        Self
    }
}

impl Default for NullSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsSink for NullSink {
    async fn send(&self, _event: &RedirectEvent) -> AnalyticsResult<()> {
        Ok(())
    }
}
