//! # API Errors
//!
//! Error types for the HTTP surface. Every failure renders as plain text —
//! this service has no structured error codes on the wire. Not-found is not
//! represented here at all: it is an expected lookup outcome, rendered as a
//! normal message by the handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body did not decode as a student record
    #[error("Invalid student record: {0}")]
    InvalidBody(String),

    /// Year path segment did not parse as an integer
    #[error("Error parsing year '{0}' to an integer")]
    InvalidYear(String),

    /// Create rejected: a record with this netid is already stored
    #[error("User with the same netid already exists")]
    Duplicate,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store adapter failure. Fails the current request only.
    #[error("Store error: {0}")]
    Store(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidYear(_) => StatusCode::BAD_REQUEST,
            ApiError::Duplicate => StatusCode::CONFLICT,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateNetId(_) => ApiError::Duplicate,
            other => ApiError::Store(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(msg) = &self {
            Logger::error("STORE_ERROR", &[("error", msg)]);
        }
        (self.status_code(), format!("{}\n", self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidBody("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidYear("abc".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Duplicate.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Store("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_store_error_maps_to_duplicate() {
        let err = ApiError::from(StoreError::DuplicateNetId("n1".to_string()));
        assert!(matches!(err, ApiError::Duplicate));

        let err = ApiError::from(StoreError::Internal("boom".to_string()));
        assert!(matches!(err, ApiError::Store(_)));
    }

    #[test]
    fn test_duplicate_wire_text() {
        assert_eq!(
            ApiError::Duplicate.to_string(),
            "User with the same netid already exists"
        );
    }
}
