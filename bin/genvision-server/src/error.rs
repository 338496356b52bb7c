//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors become a JSON `{"error": ...}`
//! body with an appropriate status code.
//!
//! Internal errors are logged with full detail, but the caller only ever
//! sees a fixed generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use genvision_core::{GenerationError, LikeError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate video. Please try again.";
pub const LIKE_FAILED_MESSAGE: &str = "Failed to like video";

#[derive(Debug, Error)]
pub enum ServerError {
    /// The caller sent an invalid request; the message is shown verbatim.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any fault while handling `POST /api/generate` that is not the caller's.
    #[error("generation failed: {0}")]
    GenerationFailed(String),

    /// Any fault while handling `POST /api/like`.
    #[error("like failed: {0}")]
    LikeFailed(String),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match self {
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ServerError::GenerationFailed(detail) => {
                error!(error = %detail, "error generating video");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERATION_FAILED_MESSAGE.to_owned(),
                )
            }
            ServerError::LikeFailed(detail) => {
                error!(error = %detail, "error liking video");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    LIKE_FAILED_MESSAGE.to_owned(),
                )
            }
            ServerError::Internal(detail) => {
                error!(error = %detail, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<GenerationError> for ServerError {
    fn from(e: GenerationError) -> Self {
        if e.is_client_error() {
            ServerError::BadRequest(e.to_string())
        } else {
            ServerError::GenerationFailed(e.to_string())
        }
    }
}

impl From<LikeError> for ServerError {
    fn from(e: LikeError) -> Self {
        ServerError::LikeFailed(e.to_string())
    }
}

impl From<minijinja::Error> for ServerError {
    fn from(e: minijinja::Error) -> Self {
        ServerError::Internal(format!("template rendering failed: {e:#}"))
    }
}
