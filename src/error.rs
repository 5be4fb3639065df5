//! Error handling module
//!
//! Centralized error types and HTTP response conversion. Expected business
//! failures carry their domain code to the client; anything unexpected is
//! logged and rendered as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;
use crate::handlers::ValidationErrors;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Validation failed")]
    Validation(ValidationErrors),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Server errors (5xx)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Per-field validation messages, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details, field_errors) = match &self {
            // 400 Bad Request
            AppError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "invalid_request".to_string(),
                Some(msg.clone()),
                None,
            ),

            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_failed".to_string(),
                None,
                Some(errors.clone()),
            ),

            // Domain errors keep their own codes; only the lookup miss is 404
            AppError::Domain(domain_err) => {
                let status = if domain_err.is_not_found() {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::BAD_REQUEST
                };
                (status, domain_err.code().to_string(), None, None)
            }

            // 500 Internal Server Error: log the cause, respond generically
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                let body = ErrorResponse {
                    error: "An unexpected error occurred.".to_string(),
                    error_code: "internal_error".to_string(),
                    details: None,
                    errors: None,
                };
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code,
            details,
            errors: field_errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_domain_not_found_maps_to_404() {
        let response =
            AppError::from(DomainError::AccountNotFound(Uuid::new_v4())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_domain_rule_violation_maps_to_400() {
        let response = AppError::from(DomainError::NegativeValue).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let mut errors = ValidationErrors::default();
        errors.add("currency", "Currency is required.");
        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
