use crate::traits::{validate_object_name, DocumentStore, StorageError, StorageResult, StoredObject};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem store: a single flat directory of uploaded documents.
#[derive(Clone, Debug)]
pub struct LocalDocumentStore {
    base_path: PathBuf,
}

impl LocalDocumentStore {
    /// Create a store rooted at `base_path`. The directory itself is created
    /// lazily on the first write, matching the upload-directory-on-first-use
    /// behavior callers expect.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        LocalDocumentStore {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn name_to_path(&self, name: &str) -> StorageResult<PathBuf> {
        validate_object_name(name)?;
        Ok(self.base_path.join(name))
    }

    async fn ensure_base_dir(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create upload directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn put(&self, name: &str, data: Vec<u8>) -> StorageResult<StoredObject> {
        let path = self.name_to_path(name)?;
        self.ensure_base_dir().await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        // Report what actually landed on disk, not what the caller handed us.
        let size = fs::metadata(&path).await?.len();

        tracing::info!(
            path = %path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local store write successful"
        );

        Ok(StoredObject {
            name: name.to_string(),
            path: Some(path),
            size,
        })
    }

    async fn get(&self, name: &str) -> StorageResult<Vec<u8>> {
        let path = self.name_to_path(name)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(name.to_string()));
        }

        fs::read(&path)
            .await
            .map_err(|e| StorageError::ReadFailed(format!("Failed to read {}: {}", path.display(), e)))
    }

    async fn exists(&self, name: &str) -> StorageResult<bool> {
        let path = self.name_to_path(name)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    async fn count(&self) -> StorageResult<usize> {
        if !fs::try_exists(&self.base_path).await.unwrap_or(false) {
            return Ok(0);
        }

        let mut entries = fs::read_dir(&self.base_path).await?;
        let mut count = 0;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                count += 1;
            }
        }
        Ok(count)
    }
}
