//! Analytics sink trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::event::RedirectEvent;

/// Errors that can occur while delivering an analytics event.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("analytics transport error: {0}")]
    Transport(String),
    #[error("analytics endpoint returned status {0}")]
    Status(u16),
}

/// Result type for analytics delivery.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Trait for delivering redirect events to a tracking backend.
///
/// Implementations must be thread-safe and best-effort: a failed delivery is
/// reported to the caller, which logs it, and never influences any HTTP
/// response.
///
/// # Implementations
///
/// - [`crate::infrastructure::analytics::GoogleAnalyticsSink`] - Measurement
///   Protocol backend
/// - [`crate::infrastructure::analytics::NullSink`] - No-op implementation
///   for disabled tracking
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Delivers a single redirect event.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Transport`] when the backend is unreachable
    /// and [`AnalyticsError::Status`] when it answers with a non-success
    /// status code.
    async fn send(&self, event: &RedirectEvent) -> AnalyticsResult<()>;
}
