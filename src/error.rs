//! # Centralized Error Handling
//!
//! The service has a single client-visible failure: the requested todo does
//! not exist. Everything else in a request is coerced rather than rejected.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Central application error type.
///
/// Converted into an HTTP response with a `{"error": ...}` body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    #[error("not found")]
    NotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        debug!(error = %self, "Responding with error");

        let (status, error) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found"),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
