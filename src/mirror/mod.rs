// src/mirror/mod.rs
// =============================================================================
// This module turns crawl results into stored objects.
//
// Submodules:
// - engine: the sequential fetch-and-upload batch with its report
// - store: the object-storage collaborator (trait + HTTP implementation)
// =============================================================================

mod engine;
mod store;

// Re-export the public mirroring API
pub use engine::{derive_key, mirror, FailedItem, MirrorReport};
pub use store::{HttpObjectStore, ObjectStore};
