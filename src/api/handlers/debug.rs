//! Handler for the deliberate-failure endpoint.

use crate::error::AppError;

/// Fails on purpose so operators can verify the error-reporting pipeline.
///
/// # Endpoint
///
/// `GET /debug-error`
///
/// Always answers 500; the response-layer middleware forwards the failure to
/// the configured error reporter.
pub async fn debug_error_handler() -> AppError {
    AppError::internal("deliberate failure requested via /debug-error")
}
