//! # REST API Errors
//!
//! Error types for the request pipeline. Every error is a caller
//! mistake, maps to HTTP 400, and renders as the `{"error": …}`
//! envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::ops::OpError;

/// Result type for request handling
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP callers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Operand missing, non-numeric, or non-finite
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Domain error raised by the operation set
    #[error("{0}")]
    Op(#[from] OpError),
}

impl ApiError {
    /// Invalid-operand error with the message matching the operation's
    /// arity
    pub fn invalid_input(arity: usize) -> Self {
        if arity == 1 {
            Self::InvalidInput("Invalid input number")
        } else {
            Self::InvalidInput("Invalid input numbers")
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Op(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
