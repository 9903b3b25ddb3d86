//! Middleware forwarding server errors to the error reporter.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Reports any 5xx response to the configured [`crate::infrastructure::reporting::ErrorReporter`].
///
/// Delivery happens on a spawned task so the response is never delayed by
/// the monitoring backend. 4xx responses (including the 400 for
/// unclassifiable clients) are expected outcomes and not reported.
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    if response.status().is_server_error() {
        let reporter = state.reporter.clone();
        let message = format!("{} {} answered {}", method, path, response.status());
        tokio::spawn(async move {
            reporter.report(&message).await;
        });
    }

    response
}
