//! Uniform JSON error bodies for the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ClientError;

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error body with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Maps a client error onto an HTTP status and a JSON error body.
///
/// Backend rejections propagate the backend's own status; unreachable or
/// undecodable backends map to 502, bad preference input to 422, and
/// local faults (missing configuration, storage) to 500.
pub fn client_error_response(error: ClientError) -> Response {
    let status = match &error {
        ClientError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ClientError::Backend { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        ClientError::Network(_) | ClientError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
        ClientError::Configuration(_) | ClientError::Repository(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ErrorResponse::new(error.to_string()))).into_response()
}
