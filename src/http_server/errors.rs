//! # API Errors
//!
//! Maps validation and store failures onto HTTP statuses and error bodies.
//!
//! | Variant      | Status | Body                      |
//! |--------------|--------|---------------------------|
//! | `Validation` | 400    | `{"error": [messages]}`   |
//! | `Rejected`   | 400    | `{"error": "<message>"}`  |
//! | `BulkRead`   | 500    | `{"error": "<message>"}`  |
//! | `Unavailable`| 503    | `{"error": "<message>"}`  |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required fields missing; the store was not touched
    #[error("validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// Store fault on a by-id read or any write
    #[error("{0}")]
    Rejected(StoreError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store fault on a select-all read
    #[error("{0}")]
    BulkRead(StoreError),

    /// Health probe could not reach the store
    #[error("{0}")]
    Unavailable(StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::BulkRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(messages) => {
                tracing::warn!(status = status.as_u16(), errors = ?messages, "request rejected");
                json!({ "error": messages })
            }
            ApiError::Rejected(err) | ApiError::BulkRead(err) | ApiError::Unavailable(err) => {
                tracing::error!(status = status.as_u16(), error = %err, "store error");
                json!({ "error": err.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}
