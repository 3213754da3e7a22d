use std::path::Path;
use std::time::Instant;

use async_trait::async_trait;
use object_store::ObjectStoreExt;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path as StorePath;
use serde::Deserialize;

use crate::config::Destination;
use crate::storage::{ObjectStorage, StorageError, StorageResult, map_store_error, read_source};

fn default_region() -> String {
    "us-east-1".to_string()
}

/// Backend A settings. The access key pair may be omitted, in which case the
/// usual `AWS_*` environment variables apply. `endpoint_url` targets
/// S3-compatible stores (MinIO, Spaces); those need path-style addressing.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Config {
    pub bucket: String,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default)]
    pub access_key_id: Option<String>,

    #[serde(default)]
    pub secret_access_key: Option<String>,

    #[serde(default)]
    pub endpoint_url: Option<String>,
}

pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
}

impl S3Storage {
    pub fn new(config: &S3Config) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::from_env()
            .with_bucket_name(&config.bucket)
            .with_region(&config.region);

        if let Some(ref key_id) = config.access_key_id {
            builder = builder.with_access_key_id(key_id);
        }
        if let Some(ref secret) = config.secret_access_key {
            builder = builder.with_secret_access_key(secret);
        }
        if let Some(ref endpoint) = config.endpoint_url {
            builder = builder
                .with_endpoint(endpoint)
                .with_virtual_hosted_style_request(false)
                .with_allow_http(true);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(format!("failed to build S3 store: {e}")))?;

        Ok(Self {
            store,
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    fn destination(&self) -> Destination {
        Destination::S3
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
                    "S3 upload failed"
                );
                map_store_error(e)
            })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %object_name,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_explicit_credentials() {
        let config = S3Config {
            bucket: "test-bucket".to_string(),
            region: "eu-west-1".to_string(),
            access_key_id: Some("AKIATEST".to_string()),
            secret_access_key: Some("secret".to_string()),
            endpoint_url: None,
        };

        let storage = S3Storage::new(&config).unwrap();
        assert_eq!(storage.destination(), Destination::S3);
    }

    #[test]
    fn builds_with_custom_endpoint() {
        let config = S3Config {
            bucket: "test-bucket".to_string(),
            region: default_region(),
            access_key_id: Some("AKIATEST".to_string()),
            secret_access_key: Some("secret".to_string()),
            endpoint_url: Some("http://localhost:9000".to_string()),
        };

        assert!(S3Storage::new(&config).is_ok());
    }
}
