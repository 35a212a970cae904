use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};

use super::{BlobStore, BlobStoreError};

/// Filesystem blob store rooted at a single directory.
///
/// The uploads and processed directories are each one of these. The root is
/// created on construction; blobs live directly under it, named by their
/// sanitized filename.
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, std::io::Error> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn blob_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }
}

#[async_trait]
impl BlobStore for LocalStore {
    async fn put(&self, name: &str, data: Bytes) -> Result<(), BlobStoreError> {
        let path = self.blob_path(name);
        tokio::fs::write(&path, &data).await?;
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Bytes, BlobStoreError> {
        let path = self.blob_path(name);
        if !path.exists() {
            return Err(BlobStoreError::NotFound(name.to_string()));
        }
        let data = tokio::fs::read(&path).await?;
        Ok(Bytes::from(data))
    }

    async fn exists(&self, name: &str) -> Result<bool, BlobStoreError> {
        let path = self.blob_path(name);
        Ok(path.exists())
    }
}
