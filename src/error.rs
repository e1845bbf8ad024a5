// src/error.rs
// =============================================================================
// This file defines the error taxonomy for the whole tool.
//
// Every failure belongs to one of three kinds, matching the three network
// calls we make, and each kind has a fixed containment level:
// - ListingUnavailable: a directory listing could not be fetched.
//   Contained at the branch: that sub-tree yields nothing, siblings go on.
// - FetchFailed: a discovered file could not be downloaded.
//   Contained at the item: it is skipped, the batch goes on.
// - UploadFailed: the object-storage write was rejected.
//   Contained at the item and surfaced in the mirror report. Not retried.
//
// None of these is fatal to the process. Keeping them as distinct variants
// (instead of one opaque error) means the containment policy is visible in
// function signatures rather than buried in catch-all handlers.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    /// The listing collaborator returned a non-success response (or no
    /// response at all) for a directory.
    #[error("listing unavailable for {location}: {reason}")]
    ListingUnavailable { location: String, reason: String },

    /// A leaf file could not be downloaded.
    #[error("fetch failed for {location}: {reason}")]
    FetchFailed { location: String, reason: String },

    /// The object store rejected a write.
    #[error("upload failed for key '{key}': {reason}")]
    UploadFailed { key: String, reason: String },
}

impl MirrorError {
    /// Short stage name for log lines and reports.
    pub fn stage(&self) -> &'static str {
        match self {
            MirrorError::ListingUnavailable { .. } => "listing",
            MirrorError::FetchFailed { .. } => "fetch",
            MirrorError::UploadFailed { .. } => "upload",
        }
    }
}
