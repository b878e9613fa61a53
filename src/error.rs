use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Placeholder rendered in place of any value that is missing or cannot be
/// formatted.
pub const SENTINEL: &str = "N/A";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Failures inside the formatting layer. These never cross the public
/// formatter boundary; callers see [`SENTINEL`] instead.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("unsupported pattern token '{token}' in {pattern:?}")]
    UnsupportedToken { token: char, pattern: String },

    #[error("unterminated literal in pattern {0:?}")]
    UnterminatedLiteral(String),

    #[error("value is not finite")]
    NotFinite,

    #[error("unknown status code: {0}")]
    UnknownStatus(String),
}
