//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion into an `ExceptionResponse` body.

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::config::VALIDATION_FAILED_MESSAGE;
use crate::types::ExceptionResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Request body failed its declared constraints
    #[error("Validation Failed: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Internal
    #[error("{0}")]
    Internal(String),
}

/// Error details attached to the response so the exception middleware can
/// complete the body with a description of the request.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub message: String,
    /// Details supplied by the error itself; `None` means "describe the request"
    pub details: Option<String>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message and optional details reported to the client
    pub fn report(&self) -> ErrorReport {
        match self {
            AppError::Validation(details) => ErrorReport {
                message: VALIDATION_FAILED_MESSAGE.to_string(),
                details: Some(details.clone()),
            },
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorReport {
                    message: msg.clone(),
                    details: None,
                }
            }
            _ => ErrorReport {
                message: self.to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let report = self.report();
        let body = ExceptionResponse::new(
            report.message.clone(),
            report.details.clone().unwrap_or_default(),
        );

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(report);
        response
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    /// Missing user, reported as `ID[<id>] not found`
    pub fn user_not_found(id: i32) -> Self {
        AppError::NotFound(format!("ID[{}] not found", id))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::user_not_found(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_user_not_found_message() {
        let report = AppError::user_not_found(999).report();
        assert_eq!(report.message, "ID[999] not found");
        assert!(report.details.is_none());
    }

    #[test]
    fn test_validation_report_keeps_details() {
        let report = AppError::validation("userName is invalid").report();
        assert_eq!(report.message, "Validation Failed");
        assert_eq!(report.details.as_deref(), Some("userName is invalid"));
    }

    #[test]
    fn test_into_response_attaches_report() {
        let response = AppError::user_not_found(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.message, "ID[7] not found");
    }
}
