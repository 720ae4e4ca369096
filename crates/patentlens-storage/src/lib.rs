//! PatentLens Storage Library
//!
//! Storage abstraction for accepted uploads. The API server writes documents
//! through the [`DocumentStore`] trait instead of touching a process-wide
//! upload folder directly, so tests can substitute the in-memory backend.
//!
//! # Object names
//!
//! Stores are flat: an object name is a single path component
//! (`<upload_id>_<sanitized-name>`). Names containing separators or traversal
//! components are rejected before any filesystem access.

pub mod local;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use local::LocalDocumentStore;
pub use memory::MemoryDocumentStore;
pub use traits::{DocumentStore, StorageError, StorageResult, StoredObject};
