use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::status::StatusResponse;

#[derive(Debug)]
pub enum AppError {
    /// User agent matched neither desktop nor mobile signatures.
    UnknownDevice,
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UnknownDevice => StatusCode::BAD_REQUEST,
            AppError::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(StatusResponse::error())).into_response()
    }
}
