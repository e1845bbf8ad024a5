// src/crawl/mod.rs
// =============================================================================
// This module handles directory traversal.
//
// Submodules:
// - classify: decides whether a child reference is a file or a directory
// - walker: the recursive depth-first traversal with its visited set
//
// The traversal talks to the outside world only through the
// `listing::ListingSource` trait, which keeps it testable without a network.
// =============================================================================

mod classify;
mod walker;

// Re-export the public traversal API
pub use classify::{Classifier, Link, SuffixClassifier};
pub use walker::Crawler;
