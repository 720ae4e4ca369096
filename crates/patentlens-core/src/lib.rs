//! PatentLens Core Library
//!
//! This crate provides the domain models, error types, configuration, and validation
//! shared across all PatentLens components: the upload descriptor returned by the API,
//! filename sanitization and upload-id generation, and the upload validation rules.

pub mod config;
pub mod constants;
pub mod error;
pub mod filename;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use filename::{sanitize_filename, UploadIdGenerator};
pub use validation::{UploadValidator, ValidationError};
