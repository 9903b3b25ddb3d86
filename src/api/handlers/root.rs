//! Handler for the service root endpoint.

use axum::Json;

use crate::api::dto::status::StatusResponse;

/// Returns a fixed success body.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// {"status": "success", "message": "OK"}
/// ```
///
/// Doubles as the liveness probe: the service holds no connections to
/// external systems whose health could be usefully checked here.
pub async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}
