// src/config.rs
// =============================================================================
// This file resolves the object-storage settings.
//
// Resolution order: explicit CLI flag first, then environment variables.
// The credentials never appear on the command line:
// - MIRROR_BUCKET_URL: bucket endpoint, e.g. https://bucket.cos.region.host
// - MIRROR_TOKEN: optional bearer token for the PUT requests
// - MIRROR_STORAGE_CLASS: storage tier header value (default: STANDARD)
// =============================================================================

use anyhow::{Context, Result};
use std::env;

/// Where and how mirrored objects get written.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Bucket endpoint; keys are appended as path segments.
    pub bucket_url: String,
    /// Optional bearer token sent with every upload.
    pub token: Option<String>,
    /// Storage tier, sent as the x-cos-storage-class header.
    pub storage_class: String,
}

impl StoreConfig {
    /// Resolves settings from an optional flag value plus the environment.
    pub fn resolve(bucket_flag: Option<String>) -> Result<Self> {
        let bucket_url = bucket_flag
            .or_else(|| env::var("MIRROR_BUCKET_URL").ok())
            .context("no bucket endpoint: pass --bucket-url or set MIRROR_BUCKET_URL")?;

        Ok(Self {
            // A trailing slash would produce double-slash keys
            bucket_url: bucket_url.trim_end_matches('/').to_string(),
            token: env::var("MIRROR_TOKEN").ok(),
            storage_class: env::var("MIRROR_STORAGE_CLASS")
                .unwrap_or_else(|_| "STANDARD".to_string()),
        })
    }
}
