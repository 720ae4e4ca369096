//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or types that implement `Into<AppError>`) for errors and `?`
//! so they become `HttpAppError` and render consistently (status, body, logging).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use patentlens_core::{AppError, ErrorMetadata, LogLevel, ValidationError};
use patentlens_storage::StorageError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire format for every failure response: `{ "error": <message> }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Wrapper type for AppError to implement IntoResponse.
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from patentlens-core).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            // Names reaching storage are already sanitized; an invalid name here
            // is a server-side bug, not client input.
            StorageError::InvalidName(msg) => AppError::Internal(msg),
            StorageError::NotFound(name) => AppError::Storage(format!("object not found: {name}")),
            StorageError::WriteFailed(msg)
            | StorageError::ReadFailed(msg)
            | StorageError::ConfigError(msg) => AppError::Storage(msg),
            StorageError::IoError(err) => AppError::Storage(format!("IO error: {err}")),
        };
        HttpAppError(app)
    }
}

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        let app = match err {
            ValidationError::FileTooLarge { size, max } => AppError::PayloadTooLarge { size, max },
            ValidationError::InvalidContentType { content_type, .. } => {
                AppError::UnsupportedContentType(content_type)
            }
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, "Request rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, source = ?std::error::Error::source(error), "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Full detail goes to the log; the client only ever sees client_message,
        // which for 500s is deliberately opaque.
        log_error(app_error);

        let body = Json(ErrorResponse {
            error: app_error.client_message(),
        });

        (status, body).into_response()
    }
}
