//! Error reporter trait.

use async_trait::async_trait;

/// Trait for forwarding service errors to an external monitoring backend.
///
/// Reporting is purely side-effecting: implementations must swallow their
/// own delivery failures (logging them at most) so that observability never
/// influences control flow.
///
/// # Implementations
///
/// - [`crate::infrastructure::reporting::SentryReporter`] - store-API backend
/// - [`crate::infrastructure::reporting::NullReporter`] - No-op implementation
///   for disabled reporting
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    /// Forwards one error message to the monitoring backend.
    async fn report(&self, message: &str);
}
