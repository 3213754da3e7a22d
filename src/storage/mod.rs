//! Object-storage backends.
//!
//! Each backend is constructed once from its configuration section and
//! exposed behind the minimal [`ObjectStorage`] trait: upload one local file
//! under an object name. Everything else (retries, multipart, lifecycle) is
//! the SDK's business, not ours.

pub mod gcs;
pub mod s3;

use std::io;
use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::config::Destination;

pub use gcs::{GcsConfig, GcsStorage};
pub use s3::{S3Config, S3Storage};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Source file not found: {0}")]
    NotFound(String),

    #[error("Credentials rejected: {0}")]
    CredentialsInvalid(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Storage configuration error: {0}")]
    ConfigError(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal upload-one-object interface over a cloud bucket.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    fn destination(&self) -> Destination;

    /// Read `file_path` and put its contents into the backend's bucket under
    /// `object_name`.
    async fn upload(&self, file_path: &Path, object_name: &str) -> StorageResult<()>;
}

/// Read the source file, mapping a missing or unreadable file to
/// `StorageError::NotFound`. Shared by all backends so the failure taxonomy
/// stays consistent.
pub(crate) async fn read_source(file_path: &Path) -> StorageResult<Bytes> {
    match tokio::fs::read(file_path).await {
        Ok(data) => Ok(Bytes::from(data)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(StorageError::NotFound(file_path.display().to_string()))
        }
        Err(e) => Err(StorageError::NotFound(format!(
            "{}: {}",
            file_path.display(),
            e
        ))),
    }
}

/// Collapse object_store's error surface onto our three upload failure modes.
pub(crate) fn map_store_error(e: object_store::Error) -> StorageError {
    match e {
        object_store::Error::Unauthenticated { .. } | object_store::Error::PermissionDenied { .. } => {
            StorageError::CredentialsInvalid(e.to_string())
        }
        other => StorageError::UploadFailed(other.to_string()),
    }
}
