//! Error types module
//!
//! This module provides the core error types used throughout the PatentLens
//! application. All errors are unified under the `AppError` enum, which carries
//! enough metadata to render a consistent HTTP response: status code, the
//! client-facing message, and whether internal detail must be withheld.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like resource limits
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether internal detail must never reach the client
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file field present in multipart body")]
    MissingFile,

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::MissingFile
            | AppError::PayloadTooLarge { .. }
            | AppError::UnsupportedContentType(_)
            | AppError::InvalidInput(_) => 400,
            AppError::Storage(_) | AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                500
            }
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFile => "No file was uploaded.".to_string(),
            AppError::PayloadTooLarge { .. } => {
                "File is too large. Please upload a file of 10 MB or less.".to_string()
            }
            AppError::UnsupportedContentType(_) => {
                "Unsupported file type. Please upload a PDF, TXT, DOC, or DOCX file.".to_string()
            }
            AppError::InvalidInput(msg) => msg.clone(),
            // Opaque by design: internal failure detail stays in the server logs.
            AppError::Storage(_) | AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "An error occurred while uploading the file.".to_string()
            }
        }
    }

    fn is_sensitive(&self) -> bool {
        matches!(
            self,
            AppError::Storage(_) | AppError::Internal(_) | AppError::InternalWithSource { .. }
        )
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::MissingFile
            | AppError::PayloadTooLarge { .. }
            | AppError::UnsupportedContentType(_)
            | AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::Storage(_) | AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                LogLevel::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(AppError::MissingFile.http_status_code(), 400);
        assert_eq!(
            AppError::PayloadTooLarge {
                size: 11_000_000,
                max: 10_485_760
            }
            .http_status_code(),
            400
        );
        assert_eq!(
            AppError::UnsupportedContentType("image/png".into()).http_status_code(),
            400
        );
    }

    #[test]
    fn internal_errors_are_opaque() {
        let err = AppError::Storage("disk full on /uploads".into());
        assert_eq!(err.http_status_code(), 500);
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "An error occurred while uploading the file.");
        assert!(!err.client_message().contains("disk"));
    }

    #[test]
    fn client_messages_name_the_constraint() {
        assert!(AppError::MissingFile.client_message().contains("No file"));
        assert!(AppError::PayloadTooLarge { size: 1, max: 1 }
            .client_message()
            .contains("10 MB"));
        assert!(AppError::UnsupportedContentType("x".into())
            .client_message()
            .contains("PDF"));
    }
}
