//! Request error taxonomy and HTTP response mapping.
//!
//! Every error a handler can surface maps to a JSON body of the form
//! `{"ok": false, "error": "<message>"}`, so a failed request can never
//! carry acknowledgment fields alongside an error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The client's schema fingerprint does not match the server's expected hash
    #[error("Client schema mismatch.")]
    SchemaMismatch,

    /// The body decoded as JSON but its shape is not a valid submission
    #[error("Invalid payload.")]
    InvalidPayload,

    /// Anything outside normal operation, such as an unparseable request body
    #[error("{0}")]
    Unexpected(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::SchemaMismatch | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::Unexpected(_) => {
                tracing::error!("Unexpected error: {:?}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "ok": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
