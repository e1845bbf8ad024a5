// src/listing/mod.rs
// =============================================================================
// This module is the listing collaborator: given a directory location, it
// produces the child references found there.
//
// The crawler only depends on the `ListingSource` trait, so the traversal
// algorithm never knows whether children came from an HTML directory index,
// a structured contents API, or a test double. The one production
// implementation scrapes HTML indexes (the format our upstreams serve).
// =============================================================================

mod html;

pub use html::{parse_index, HtmlIndexListing};

use crate::error::MirrorError;
use async_trait::async_trait;

/// Produces the children of a directory location as fully-qualified URLs.
///
/// A non-success response maps to `MirrorError::ListingUnavailable`; the
/// caller decides how far that failure propagates (the crawler contains it
/// at the branch level).
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn list(&self, location: &str) -> Result<Vec<String>, MirrorError>;
}
