//! Error handling - every failure renders as `{"message": "..."}`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use devconnect_core::{DomainError, RepoError};
use devconnect_shared::MessageResponse;
use devconnect_shared::response::POST_NOT_FOUND;
use std::fmt;

/// Application-level error type that converts to `{message}` responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// Carries the client-facing message only. Detail is logged where it occurs.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn post_not_found() -> Self {
        AppError::NotFound(POST_NOT_FOUND.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Internal(msg) => msg,
        };

        HttpResponse::build(self.status_code()).json(MessageResponse::new(message.as_str()))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(_) => AppError::BadRequest(err.message()),
        }
    }
}

/// Attach the operation's client-facing failure message to a store result.
pub trait StoreResultExt<T> {
    fn or_fail(self, message: &'static str) -> AppResult<T>;
}

impl<T> StoreResultExt<T> for Result<T, RepoError> {
    fn or_fail(self, message: &'static str) -> AppResult<T> {
        self.map_err(|err| match err {
            RepoError::NotFound => AppError::post_not_found(),
            RepoError::Connection(detail) => {
                tracing::error!(error = %detail, "Store connection error: {}", message);
                AppError::Internal(message.to_string())
            }
            RepoError::Query(detail) => {
                tracing::error!(error = %detail, "Store query error: {}", message);
                AppError::Internal(message.to_string())
            }
        })
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
