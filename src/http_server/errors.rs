//! # REST Errors
//!
//! Request-level failures and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::entity::EntityError;
use crate::store::StoreError;

/// Result type for REST handlers
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body is not JSON or not a JSON object
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No entity with this name
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// No record with this id
    #[error("{0}")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Entity(EntityError::UnknownEntity(name)) => RestError::EntityNotFound(name),
            StoreError::Entity(err @ EntityError::NotFound { .. }) => {
                RestError::NotFound(err.to_string())
            }
            StoreError::Entity(err @ EntityError::MalformedRecord) => {
                RestError::InvalidBody(err.to_string())
            }
            other => RestError::Internal(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(event = "REQUEST_FAILED", error = %self);
        } else {
            tracing::debug!(event = "REQUEST_REJECTED", error = %self);
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::InvalidBody("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        let err = RestError::from(StoreError::Entity(EntityError::UnknownEntity("movies".into())));
        assert!(matches!(err, RestError::EntityNotFound(ref name) if name == "movies"));

        let err = RestError::from(StoreError::Entity(EntityError::NotFound {
            entity: "books".into(),
            id: "b-9".into(),
        }));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = RestError::from(StoreError::Entity(EntityError::MalformedRecord));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = RestError::from(StoreError::LockPoisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
