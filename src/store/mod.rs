mod local;

pub use local::LocalStore;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Blob not found: {0}")]
    NotFound(String),
}

/// Abstraction over blob storage for uploads and processed outputs.
/// Names are sanitized filenames; a put with an existing name overwrites,
/// so colliding uploads resolve as last-write-wins.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, name: &str, data: Bytes) -> Result<(), BlobStoreError>;
    async fn get(&self, name: &str) -> Result<Bytes, BlobStoreError>;
    async fn exists(&self, name: &str) -> Result<bool, BlobStoreError>;
}
