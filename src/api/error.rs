//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::service::ServiceError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unknown reference: {0}")]
    ReferenceNotFound(String),
    #[error("Scheduling conflict: {0}")]
    SchedulingConflict(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail),
            ApiError::ReferenceNotFound(detail) => {
                (StatusCode::BAD_REQUEST, "REFERENCE_NOT_FOUND", detail)
            }
            ApiError::SchedulingConflict(detail) => {
                (StatusCode::BAD_REQUEST, "SCHEDULING_CONFLICT", detail)
            }
            ApiError::Validation(detail) => (StatusCode::BAD_REQUEST, "VALIDATION", detail),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::NotFound { .. } => ApiError::NotFound(message),
            ServiceError::ReferenceNotFound { .. } => ApiError::ReferenceNotFound(message),
            ServiceError::SchedulingConflict { .. } => ApiError::SchedulingConflict(message),
            ServiceError::Validation { .. } => ApiError::Validation(message),
        }
    }
}
