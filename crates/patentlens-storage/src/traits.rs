//! Storage abstraction trait
//!
//! This module defines the DocumentStore trait that all storage backends must
//! implement, plus the error and result types shared by the backends.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid object name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Metadata for a persisted object, reported by the backend after the write.
/// `size` is authoritative: it is what the backend actually stored, not what
/// the caller declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Object name inside the store.
    pub name: String,
    /// Filesystem path for backends that have one.
    pub path: Option<PathBuf>,
    /// Bytes persisted.
    pub size: u64,
}

/// Storage abstraction trait
///
/// All backends (local filesystem, in-memory) implement this trait. The upload
/// handler works against it without coupling to a concrete backend, and writes
/// under identical names are last-writer-wins in every backend.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `data` under `name`, replacing any existing object with that
    /// name, and return metadata for what was stored.
    async fn put(&self, name: &str, data: Vec<u8>) -> StorageResult<StoredObject>;

    /// Read an object back in full.
    async fn get(&self, name: &str) -> StorageResult<Vec<u8>>;

    /// Whether an object with this name exists.
    async fn exists(&self, name: &str) -> StorageResult<bool>;

    /// Number of objects currently stored.
    async fn count(&self) -> StorageResult<usize>;
}

/// Reject names that could escape a flat store: empty names, path separators,
/// and the `.`/`..` components. Shared by all backends so behavior stays
/// consistent.
pub fn validate_object_name(name: &str) -> StorageResult<()> {
    if name.is_empty() {
        return Err(StorageError::InvalidName("empty name".to_string()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(StorageError::InvalidName(format!(
            "name contains a path separator: {name}"
        )));
    }
    if name == "." || name == ".." {
        return Err(StorageError::InvalidName(format!(
            "name is a path traversal component: {name}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_names_are_accepted() {
        for name in ["a.pdf", "1700000000000001_my_patent__1.pdf", "..weird", "x"] {
            assert!(validate_object_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn separators_and_traversal_are_rejected() {
        for name in ["", "a/b.pdf", "..", ".", "\\windows", "../up.pdf"] {
            assert!(validate_object_name(name).is_err(), "{name:?}");
        }
    }
}
