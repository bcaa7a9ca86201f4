use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-scoped failures surfaced by the handlers.
///
/// A failed lookup is the only expected error. The other variants are
/// rendering failures; they produce a 500 for the single request instead of
/// taking the process down.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("URL not found for: {0}")]
    NotFound(String),

    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("stored target is not a usable redirect location: {0}")]
    BadLocation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(code) => {
                (StatusCode::NOT_FOUND, format!("URL not found for: {code}")).into_response()
            }
            err => {
                tracing::error!("request failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
