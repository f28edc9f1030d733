/// Unified error handling module
use crate::validation::Report;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error envelope for server-side failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
    /// Body could not be interpreted as a request at all
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Body exceeded the configured size limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
    /// Body was interpreted but failed domain validation
    #[error("{0}")]
    Rejected(Report),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Client errors carry plain text so the report reaches the caller verbatim
            ApiError::Rejected(report) => plain_text(StatusCode::BAD_REQUEST, report.render()),
            ApiError::InvalidInput(msg) => plain_text(StatusCode::BAD_REQUEST, msg),
            ApiError::PayloadTooLarge(msg) => plain_text(StatusCode::PAYLOAD_TOO_LARGE, msg),
            ApiError::NotFound(msg) => plain_text(StatusCode::NOT_FOUND, msg),
            ApiError::Database(e) => envelope("DATABASE_ERROR", e.to_string()),
            ApiError::Internal(msg) => envelope("INTERNAL_ERROR", msg),
        }
    }
}

fn plain_text(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

fn envelope(code: &str, message: String) -> Response {
    let error_response = ErrorResponse {
        ok: false,
        error: ErrorDetail {
            code: code.to_string(),
            message,
        },
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
