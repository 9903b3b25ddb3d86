//! Status response bodies.

use serde::Serialize;

/// Fixed-shape status body used by the root endpoint and error responses.
///
/// Serializes to `{"status":"success","message":"OK"}` for the root endpoint
/// and `{"status":"error"}` for failures (the message field is omitted).
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "success",
            message: Some("OK"),
        }
    }

    pub fn error() -> Self {
        Self {
            status: "error",
            message: None,
        }
    }
}
