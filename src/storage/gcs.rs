use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use object_store::ObjectStoreExt;
use object_store::gcp::{GoogleCloudStorage, GoogleCloudStorageBuilder};
use object_store::path::Path as StorePath;
use serde::Deserialize;

use crate::config::Destination;
use crate::storage::{ObjectStorage, StorageError, StorageResult, map_store_error, read_source};

/// Backend B settings. The service-account document path is explicit client
/// configuration consumed by the builder; the process environment is never
/// mutated. When omitted, `GOOGLE_SERVICE_ACCOUNT` et al. apply.
#[derive(Debug, Clone, Deserialize)]
pub struct GcsConfig {
    pub bucket: String,

    #[serde(default)]
    pub service_account_path: Option<PathBuf>,
}

pub struct GcsStorage {
    store: GoogleCloudStorage,
    bucket: String,
}

impl GcsStorage {
    pub fn new(config: &GcsConfig) -> StorageResult<Self> {
        let mut builder = GoogleCloudStorageBuilder::from_env().with_bucket_name(&config.bucket);

        if let Some(ref path) = config.service_account_path {
            builder = builder.with_service_account_path(path.display().to_string());
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(format!("failed to build GCS store: {e}")))?;

        Ok(Self {
            store,
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl ObjectStorage for GcsStorage {
    fn destination(&self) -> Destination {
        Destination::Gcs
    }

    async fn upload(&self, file_path: &Path, object_name: &str) -> StorageResult<()> {
        let data = read_source(file_path).await?;
        let size = data.len() as u64;
        let location = StorePath::from(object_name);
        let start = Instant::now();

        self.store
            .put(&location, data.into())
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %object_name,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "GCS upload failed"
                );
                map_store_error(e)
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %object_name,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "GCS upload successful"
        );

        Ok(())
    }
}
