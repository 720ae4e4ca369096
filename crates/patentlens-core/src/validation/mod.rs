//! Upload validation rules.
//!
//! Checks run in a fixed order against the declared properties of the upload:
//! size first, then content type. The declared MIME type is trusted; bytes are
//! never sniffed.

use crate::constants::{ALLOWED_CONTENT_TYPES, MAX_UPLOAD_SIZE_BYTES};
use crate::Config;

/// Upload validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid content type: {content_type} (allowed: {allowed:?})")]
    InvalidContentType {
        content_type: String,
        allowed: Vec<String>,
    },
}

/// Validator for incoming uploads, configured with the size ceiling and the
/// content-type allow-list.
pub struct UploadValidator {
    max_file_size: usize,
    allowed_content_types: Vec<String>,
}

impl UploadValidator {
    pub fn new(max_file_size: usize, allowed_content_types: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_content_types,
        }
    }

    /// Validator with the documented defaults: 10 MiB ceiling, patent document types.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.max_upload_size_bytes(),
            ALLOWED_CONTENT_TYPES.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Validate the declared file size against the ceiling.
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Validate the declared content type against the allow-list. Compares the
    /// normalized MIME type only, so parameters cannot bypass the check.
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        let normalized = normalize_mime_type(content_type).to_lowercase();

        if !self.allowed_content_types.iter().any(|ct| ct == &normalized) {
            return Err(ValidationError::InvalidContentType {
                content_type: content_type.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        Ok(())
    }
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::new(
            MAX_UPLOAD_SIZE_BYTES,
            ALLOWED_CONTENT_TYPES.iter().map(|s| s.to_string()).collect(),
        )
    }
}

/// Strip MIME parameters (e.g. "text/plain; charset=utf-8" -> "text/plain").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_at_ceiling_passes_over_ceiling_fails() {
        let validator = UploadValidator::default();
        assert!(validator.validate_file_size(10 * 1024 * 1024).is_ok());
        assert!(validator.validate_file_size(0).is_ok());
        assert!(matches!(
            validator.validate_file_size(10 * 1024 * 1024 + 1),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn allow_listed_types_pass() {
        let validator = UploadValidator::default();
        for ct in [
            "application/pdf",
            "text/plain",
            "application/msword",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ] {
            assert!(validator.validate_content_type(ct).is_ok(), "{ct}");
        }
    }

    #[test]
    fn type_check_normalizes_case_and_parameters() {
        let validator = UploadValidator::default();
        assert!(validator.validate_content_type("Application/PDF").is_ok());
        assert!(validator
            .validate_content_type("text/plain; charset=utf-8")
            .is_ok());
    }

    #[test]
    fn disallowed_types_fail() {
        let validator = UploadValidator::default();
        for ct in ["image/png", "application/zip", "application/octet-stream", ""] {
            assert!(validator.validate_content_type(ct).is_err(), "{ct}");
        }
    }
}
