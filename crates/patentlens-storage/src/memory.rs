use crate::traits::{validate_object_name, DocumentStore, StorageError, StorageResult, StoredObject};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store used by tests. Same name rules and last-writer-wins
/// semantics as the filesystem backend.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocumentStore {
    objects: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn put(&self, name: &str, data: Vec<u8>) -> StorageResult<StoredObject> {
        validate_object_name(name)?;
        let size = data.len() as u64;
        self.objects
            .write()
            .await
            .insert(name.to_string(), Bytes::from(data));

        Ok(StoredObject {
            name: name.to_string(),
            path: None,
            size,
        })
    }

    async fn get(&self, name: &str) -> StorageResult<Vec<u8>> {
        validate_object_name(name)?;
        self.objects
            .read()
            .await
            .get(name)
            .map(|b| b.to_vec())
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    async fn exists(&self, name: &str) -> StorageResult<bool> {
        validate_object_name(name)?;
        Ok(self.objects.read().await.contains_key(name))
    }

    async fn count(&self) -> StorageResult<usize> {
        Ok(self.objects.read().await.len())
    }
}
