//! Quiz Error Types
//!
//! This module provides quiz-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Generator faults
//! never appear here: the question provider absorbs them (see
//! `application::generate_question`).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use auth::error::AuthError;

/// Quiz-specific result type alias
pub type QuizResult<T> = Result<T, QuizError>;

/// Quiz-specific error variants
#[derive(Debug, Error)]
pub enum QuizError {
    /// Required request field was not supplied
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// User not found (token was valid but no record exists)
    #[error("User not found")]
    UserNotFound,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuizError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuizError::MissingField(_) => StatusCode::BAD_REQUEST,
            QuizError::UserNotFound => StatusCode::NOT_FOUND,
            QuizError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::MissingField(_) => ErrorKind::BadRequest,
            QuizError::UserNotFound => ErrorKind::NotFound,
            QuizError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QuizError::Internal(msg) => {
                tracing::error!(message = %msg, "Quiz internal error");
            }
            QuizError::UserNotFound => {
                tracing::warn!("Authenticated token for unknown user");
            }
            _ => {
                tracing::debug!(error = %self, "Quiz error");
            }
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for QuizError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UserNotFound => QuizError::UserNotFound,
            other => QuizError::Internal(other.to_string()),
        }
    }
}
