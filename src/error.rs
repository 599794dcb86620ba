use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Custom error type for simple_webhook_relay operations
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Malformed payload for {event} event: {source}")]
    MalformedPayload {
        event: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Discord request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Helper type for Results that use RelayError
pub type Result<T> = std::result::Result<T, RelayError>;
