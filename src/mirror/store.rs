// src/mirror/store.rs
// =============================================================================
// This module is the object-storage collaborator.
//
// The mirror engine only depends on the `ObjectStore` trait: an upsert
// write of (key, bytes). The production implementation PUTs into a flat
// bucket namespace over HTTP (S3/COS style path upload), with a fixed
// storage-class header and an optional bearer token. No read-back, no
// listing — writes only.
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::MirrorError;

/// Upsert-only object storage. An existing object with the same key is
/// overwritten.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), MirrorError>;
}

/// Object store backed by an HTTP bucket endpoint: `PUT {bucket_url}/{key}`.
pub struct HttpObjectStore {
    client: Client,
    config: StoreConfig,
}

impl HttpObjectStore {
    pub fn new(client: Client, config: StoreConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), MirrorError> {
        let url = format!("{}/{}", self.config.bucket_url, key);
        debug!("uploading {} byte(s) to {}", body.len(), url);

        let mut request = self
            .client
            .put(&url)
            .header("x-cos-storage-class", &self.config.storage_class)
            .body(body);

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| MirrorError::UploadFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(MirrorError::UploadFailed {
                key: key.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        Ok(())
    }
}
