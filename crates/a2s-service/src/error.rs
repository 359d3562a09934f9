//! API error types and responses.
//!
//! Every failure body has the shape `{ "success": false, "message": ... }`.
//! Validation failures add `errors`, one entry per violated field.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use a2s_core::{FieldIssue, ValidationError};

/// Message sent with every 400.
pub const INVALID_DATA_MESSAGE: &str = "Invalid data";

/// Message sent when a body exceeds the configured limit.
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Payload too large";

/// Message sent with every 500.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The candidate failed the schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body exceeded the configured size limit.
    #[error("request body too large")]
    PayloadTooLarge,

    /// Internal server error. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldIssue>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                INVALID_DATA_MESSAGE,
                Some(err.into_issues()),
            ),
            Self::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                PAYLOAD_TOO_LARGE_MESSAGE,
                None,
            ),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE, None)
            }
        };

        let body = ErrorResponse {
            success: false,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<a2s_store::StoreError> for ApiError {
    fn from(err: a2s_store::StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge;
        }

        Self::Validation(ValidationError::single(FieldIssue::root(
            rejection.body_text(),
        )))
    }
}
