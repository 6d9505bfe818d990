//! Application error type mapping domain errors to RPC fault codes.
//!
//! The services classify failures; this module performs the single
//! translation step into the public fault categories. Store-layer faults
//! keep the coarse ABORTED code; invalid search text, violated
//! preconditions, and missing documents get their own codes so callers can
//! branch without parsing messages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use postbox_types::error::{ThreadError, UserError};

/// Application-level error that maps to RPC fault responses.
#[derive(Debug)]
pub enum AppError {
    /// Thread-related errors.
    Thread(ThreadError),
    /// User-related errors.
    User(UserError),
}

impl From<ThreadError> for AppError {
    fn from(e: ThreadError) -> Self {
        AppError::Thread(e)
    }
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        AppError::User(e)
    }
}

impl AppError {
    /// Status, fault code, and message for this error.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Thread(ThreadError::InvalidSearchText(msg)) => {
                (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT", msg.clone())
            }
            AppError::Thread(ThreadError::EmptyMessages) => (
                StatusCode::PRECONDITION_FAILED,
                "FAILED_PRECONDITION",
                "thread must contain at least one message".to_string(),
            ),
            AppError::Thread(ThreadError::NotFound) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Thread not found".to_string(),
            ),
            AppError::Thread(ThreadError::Storage(e)) => {
                (StatusCode::CONFLICT, "ABORTED", e.to_string())
            }
            AppError::User(UserError::NotFound) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "User not found".to_string(),
            ),
            AppError::User(UserError::Storage(e)) => {
                (StatusCode::CONFLICT, "ABORTED", e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = json!({
            "data": null,
            "meta": {
                "request_id": "",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": 0
            },
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
