// src/mirror/engine.rs
// =============================================================================
// This module mirrors a batch of discovered files into object storage.
//
// For each location, strictly in order and one at a time:
// 1. Download the raw content
// 2. Derive the storage key from the final path segment
// 3. PUT the content into the object store under that key
//
// Failure policy:
// - A failed fetch skips that item; the rest of the batch continues.
// - A rejected upload is recorded and the batch continues.
// - There is no batch atomicity: objects uploaded before a failure stay
//   uploaded. Same-key objects are overwritten.
//
// The report carries every per-item outcome, so the caller can tell a
// clean run from a partial one without grepping logs.
// =============================================================================

use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use super::store::ObjectStore;
use crate::error::MirrorError;

/// Outcome of one mirror batch.
#[derive(Debug, Serialize)]
pub struct MirrorReport {
    /// Storage keys written, in upload order.
    pub uploaded: Vec<String>,
    /// Items that failed, with the stage that failed and why.
    pub failed: Vec<FailedItem>,
}

#[derive(Debug, Serialize)]
pub struct FailedItem {
    pub location: String,
    /// "fetch" or "upload"
    pub stage: String,
    pub reason: String,
}

impl MirrorReport {
    /// True when every input was fetched and uploaded.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetches each location and writes it into the store under its base name.
///
/// Never fails as a whole: per-item failures land in the report.
pub async fn mirror(client: &Client, store: &dyn ObjectStore, locations: &[String]) -> MirrorReport {
    let mut uploaded = Vec::new();
    let mut failed = Vec::new();

    for location in locations {
        let content = match fetch_file(client, location).await {
            Ok(content) => content,
            Err(e) => {
                warn!("skipping item: {}", e);
                failed.push(FailedItem {
                    location: location.clone(),
                    stage: e.stage().to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let key = derive_key(location);
        match store.put(&key, content).await {
            Ok(()) => {
                info!("mirrored {} -> {}", location, key);
                uploaded.push(key);
            }
            Err(e) => {
                warn!("upload rejected: {}", e);
                failed.push(FailedItem {
                    location: location.clone(),
                    stage: e.stage().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    MirrorReport { uploaded, failed }
}

// Downloads the raw content of a file location
async fn fetch_file(client: &Client, location: &str) -> Result<Vec<u8>, MirrorError> {
    let response = client
        .get(location)
        .send()
        .await
        .map_err(|e| MirrorError::FetchFailed {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(MirrorError::FetchFailed {
            location: location.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    let bytes = response.bytes().await.map_err(|e| MirrorError::FetchFailed {
        location: location.to_string(),
        reason: e.to_string(),
    })?;

    Ok(bytes.to_vec())
}

// Derives the flat storage key: the final path segment, with any query
// string or fragment stripped.
//
// Example: "https://example.com/root/sub/c.rs" -> "c.rs"
pub fn derive_key(location: &str) -> String {
    let path = location
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or(location);

    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
        .to_string()
}
