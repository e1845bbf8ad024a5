// src/crawl/walker.rs
// =============================================================================
// This module implements the recursive directory traversal.
//
// How it works:
// 1. Skip the directory if this crawler has already visited it
// 2. Ask the listing source for the directory's children
// 3. Classify each child as a leaf (file) or a branch (sub-directory)
// 4. Collect the leaves, then recurse depth-first into each branch
// 5. Return all leaves in discovery order
//
// Failure policy:
// - A directory whose listing fails contributes nothing, but its siblings
//   are unaffected. One bad sub-directory must not abort the whole crawl.
//
// Visited-set scope:
// - The visited set belongs to the Crawler value, not to the process.
//   Re-using one Crawler skips directories it has already seen (useful for
//   incremental runs); a fresh Crawler (or reset()) re-crawls everything.
// =============================================================================

use futures::future::BoxFuture;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::classify::{Classifier, Link};
use crate::listing::ListingSource;

/// Depth-first directory crawler with a per-instance visited set.
pub struct Crawler {
    listing: Box<dyn ListingSource>,
    classifier: Box<dyn Classifier>,
    visited: HashSet<String>,
}

impl Crawler {
    pub fn new(listing: Box<dyn ListingSource>, classifier: Box<dyn Classifier>) -> Self {
        Self {
            listing,
            classifier,
            visited: HashSet::new(),
        }
    }

    /// Recursively discovers all leaf files under `root`.
    ///
    /// Returns fully-qualified file locations in discovery order: a
    /// directory's own files first (in listing order), then the contents
    /// of each sub-directory, depth-first.
    ///
    /// Directories already in this crawler's visited set contribute
    /// nothing, even when reached via a different path.
    pub async fn crawl(&mut self, root: &str) -> Vec<String> {
        self.crawl_dir(root.to_string()).await
    }

    /// Clears the visited set so the next crawl starts from scratch.
    pub fn reset(&mut self) {
        self.visited.clear();
    }

    // The recursive step. async fn cannot call itself directly (the future
    // type would be infinitely sized), so the recursion goes through a
    // boxed future.
    fn crawl_dir(&mut self, location: String) -> BoxFuture<'_, Vec<String>> {
        Box::pin(async move {
            // Duplicate/cycle guard: insert returns false if already present
            if !self.visited.insert(location.clone()) {
                debug!("already visited, skipping: {}", location);
                return Vec::new();
            }

            let children = match self.listing.list(&location).await {
                Ok(children) => children,
                Err(e) => {
                    // Contained here: this branch yields nothing, the rest
                    // of the crawl goes on.
                    warn!("skipping branch: {}", e);
                    return Vec::new();
                }
            };

            let mut leaves = Vec::new();
            let mut branches = Vec::new();
            for child in children {
                match self.classifier.classify(&child) {
                    Some(Link::Leaf(location)) => leaves.push(location),
                    Some(Link::Branch(location)) => branches.push(location),
                    None => {}
                }
            }

            debug!(
                "listed {}: {} file(s), {} sub-directorie(s)",
                location,
                leaves.len(),
                branches.len()
            );

            // This directory's files first, then each sub-tree in
            // discovery order.
            let mut results = leaves;
            for branch in branches {
                let nested = self.crawl_dir(branch).await;
                results.extend(nested);
            }

            results
        })
    }
}
