//! Application state shared by all handlers.

use patentlens_core::{Config, UploadIdGenerator, UploadValidator};
use patentlens_storage::DocumentStore;
use std::sync::Arc;

/// Shared state: configuration, the injected document store, the validator,
/// and the upload-id generator. Handlers receive it as `State<Arc<AppState>>`.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn DocumentStore>,
    pub validator: UploadValidator,
    pub upload_ids: UploadIdGenerator,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        let validator = UploadValidator::from_config(&config);
        AppState {
            config,
            store,
            validator,
            upload_ids: UploadIdGenerator::new(),
        }
    }
}
