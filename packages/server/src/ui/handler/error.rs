//! Client-facing request errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::infrastructure::dto::http::ErrorDto;

/// Malformed submissions, rejected before reaching the stores
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Body is not valid JSON
    #[error("Invalid JSON")]
    InvalidJson,

    /// `user`, `message` or `timestamp` is absent or unusable
    #[error("Missing fields")]
    MissingFields,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorDto {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
