//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`                      - Service status (public)
//! - `GET /debug-error`           - Deliberate failure for reporter checks
//! - `GET /{phonenum}`            - Deep-link redirect without message
//! - `GET /{phonenum}/{message}`  - Deep-link redirect with message text
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Error reporting** - 5xx responses forwarded to the error reporter
//! - **Path normalization** - Trailing slash handling

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    debug_error_handler, redirect_handler, redirect_with_message_handler, root_handler,
};
use crate::api::middleware::{error_report, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// Static routes take precedence over the `{phonenum}` captures, so
/// `/debug-error` is never treated as a phone number.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/debug-error", get(debug_error_handler))
        .route("/{phonenum}", get(redirect_handler))
        .route("/{phonenum}/{message}", get(redirect_with_message_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_report::layer,
        ))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
