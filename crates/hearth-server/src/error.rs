//! Application error types and Axum response conversion.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hearth_core::PredictError;

use crate::dto::ErrorResponse;

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    /// Any per-request failure; always reported as 400.
    BadRequest(String),
}

impl From<PredictError> for AppError {
    fn from(e: PredictError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<BytesRejection> for AppError {
    fn from(e: BytesRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::BadRequest(message) = self;
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
    }
}
