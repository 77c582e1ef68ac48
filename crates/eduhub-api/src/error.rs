//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use eduhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Status code and machine-readable code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "AUTHENTICATION_ERROR"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "AUTHORIZATION_ERROR"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND_ERROR"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT_ERROR"),
        ErrorKind::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE_ERROR"),
        ErrorKind::UnsupportedMediaType => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_MEDIA_TYPE_ERROR",
        ),
        ErrorKind::Database
        | ErrorKind::Storage
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

fn render(error: AppError, details: Option<serde_json::Value>) -> Response {
    let (status, error_code) = status_for(error.kind);

    let message = if status.is_server_error() {
        tracing::error!(kind = %error.kind, error = %error.message, source = ?error.source, "Internal server error");
        "An internal error occurred".to_string()
    } else {
        error.message
    };

    let body = ApiErrorResponse {
        error: error_code.to_string(),
        message,
        details,
    };

    (status, Json(body)).into_response()
}

/// Handler error type: a domain error plus optional structured details.
///
/// Any `AppError` converts into it, so handlers propagate with `?`.
#[derive(Debug)]
pub struct ApiError {
    pub error: AppError,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Attach structured details to the response body.
    pub fn with_details(error: AppError, details: serde_json::Value) -> Self {
        Self {
            error,
            details: Some(details),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self {
            error,
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        render(self.error, self.details)
    }
}
