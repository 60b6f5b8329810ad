use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use discovery::FETCH_ERROR_MESSAGE;

/// Unified application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Catalog API failure; the cause is logged, the user sees a fixed
    /// message.
    #[error("Catalog error: {0}")]
    Catalog(#[from] tmdb::TmdbError),
}

/// API error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {}", e);
                (StatusCode::BAD_GATEWAY, FETCH_ERROR_MESSAGE.to_string())
            }
        };

        let body = ErrorResponse {
            error: error_message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience alias.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}
