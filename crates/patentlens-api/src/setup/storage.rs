//! Storage backend setup.

use patentlens_core::Config;
use patentlens_storage::{DocumentStore, LocalDocumentStore};
use std::sync::Arc;

/// Build the document store for the configured upload directory. The directory
/// itself is created on first write.
pub fn setup_storage(config: &Config) -> Arc<dyn DocumentStore> {
    tracing::info!(upload_dir = %config.upload_dir().display(), "Using local document store");
    Arc::new(LocalDocumentStore::new(config.upload_dir()))
}
