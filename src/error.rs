//! Error types for the product service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Product Error Enum ==
/// Unified error type for the product service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    /// No product stored under the identifier
    #[error("Product not found: {0}")]
    NotFound(i64),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Persistence collaborator could not be reached
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProductError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ProductError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the product service.
pub type Result<T> = std::result::Result<T, ProductError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ProductError::NotFound(7), StatusCode::NOT_FOUND),
            (
                ProductError::InvalidRequest("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ProductError::StorageUnavailable("down".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ProductError::Internal("oops".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ProductError::NotFound(42).to_string(), "Product not found: 42");
    }
}
