// src/listing/html.rs
// =============================================================================
// This module reads HTML directory indexes (the autoindex pages served by
// nginx, Apache, raw file mirrors, etc.).
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Resolve relative hrefs against the directory URL (like a browser does)
// - Keep only children that actually live under the directory
//
// Index pages are noisy: they carry a parent link ("../"), sort links
// ("?C=N;O=D"), and sometimes absolute links to other hosts. All of those
// must be dropped or the crawl would climb out of its subtree.
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use super::ListingSource;
use crate::error::MirrorError;

/// Listing source backed by an HTTP HTML directory index.
pub struct HtmlIndexListing {
    client: Client,
}

impl HtmlIndexListing {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ListingSource for HtmlIndexListing {
    async fn list(&self, location: &str) -> Result<Vec<String>, MirrorError> {
        let response = self.client.get(location).send().await.map_err(|e| {
            MirrorError::ListingUnavailable {
                location: location.to_string(),
                reason: e.to_string(),
            }
        })?;

        if !response.status().is_success() {
            return Err(MirrorError::ListingUnavailable {
                location: location.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| MirrorError::ListingUnavailable {
                location: location.to_string(),
                reason: e.to_string(),
            })?;

        Ok(parse_index(&html, location))
    }
}

// Extracts child URLs from an index page
//
// Parameters:
//   html: the HTML content of the directory index
//   location: the URL the index was fetched from (for resolving hrefs)
//
// Returns: Vec<String> of fully-qualified URLs strictly below `location`,
// in document order.
//
// Example:
//   html = "<a href='../'>..</a><a href='a.rs'>a.rs</a><a href='sub/'>sub</a>"
//   location = "https://example.com/contracts/"
//   result = ["https://example.com/contracts/a.rs",
//             "https://example.com/contracts/sub/"]
pub fn parse_index(html: &str, location: &str) -> Vec<String> {
    let mut children = Vec::new();

    // Resolution needs a trailing slash, otherwise "a.rs" would resolve
    // as a sibling of the directory instead of a child.
    let raw = if location.ends_with('/') {
        location.to_string()
    } else {
        format!("{}/", location)
    };

    let base = match Url::parse(&raw) {
        Ok(url) => url,
        Err(_) => {
            warn!("invalid directory URL: {}", raw);
            return children;
        }
    };

    // join() returns normalized URLs (default ports dropped, host
    // lowercased), so the descendant check below must compare against the
    // normalized base, not the raw input.
    let base_str = base.as_str().to_string();

    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            // Anchors, sort links and mail links are navigation chrome,
            // not directory entries.
            if href.starts_with('#') || href.starts_with('?') || href.starts_with("mailto:") {
                continue;
            }

            let resolved = match base.join(href) {
                Ok(url) => url.to_string(),
                Err(_) => continue,
            };

            // Keep only strict descendants: this drops the parent link,
            // the self link ("./") and anything resolving to another host
            // or another subtree. Query-carrying links are sort variants
            // of the index itself.
            if resolved.len() > base_str.len()
                && resolved.starts_with(base_str.as_str())
                && !resolved.contains('?')
            {
                children.push(resolved);
            }
        }
    }

    children
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com/contracts/";

    #[test]
    fn test_extract_children_in_document_order() {
        let html = r#"
            <a href="a.rs">a.rs</a>
            <a href="b.rs">b.rs</a>
            <a href="sub/">sub/</a>
        "#;
        let children = parse_index(html, BASE);
        assert_eq!(
            children,
            vec![
                "https://example.com/contracts/a.rs",
                "https://example.com/contracts/b.rs",
                "https://example.com/contracts/sub/",
            ]
        );
    }

    #[test]
    fn test_skip_parent_link() {
        let html = r#"<a href="../">Parent Directory</a><a href="a.rs">a.rs</a>"#;
        let children = parse_index(html, BASE);
        assert_eq!(children, vec!["https://example.com/contracts/a.rs"]);
    }

    #[test]
    fn test_skip_sort_links() {
        let html = r#"<a href="?C=N;O=D">Name</a><a href="?C=M;O=A">Modified</a>"#;
        let children = parse_index(html, BASE);
        assert!(children.is_empty());
    }

    #[test]
    fn test_skip_other_host() {
        let html = r#"<a href="https://other.com/x.rs">x.rs</a><a href="a.rs">a.rs</a>"#;
        let children = parse_index(html, BASE);
        assert_eq!(children, vec!["https://example.com/contracts/a.rs"]);
    }

    #[test]
    fn test_skip_self_link() {
        let html = r#"<a href="./">.</a>"#;
        let children = parse_index(html, BASE);
        assert!(children.is_empty());
    }

    #[test]
    fn test_explicit_default_port_root() {
        // join() strips the default port; the children must survive
        let html = r#"<a href="a.rs">a.rs</a>"#;
        let children = parse_index(html, "https://example.com:443/dir/");
        assert_eq!(children, vec!["https://example.com/dir/a.rs"]);
    }

    #[test]
    fn test_uppercase_host_root() {
        let html = r#"<a href="a.rs">a.rs</a>"#;
        let children = parse_index(html, "https://EXAMPLE.com/contracts/");
        assert_eq!(children, vec!["https://example.com/contracts/a.rs"]);
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let html = r#"<a href="a.rs">a.rs</a>"#;
        let children = parse_index(html, "https://example.com/contracts");
        assert_eq!(children, vec!["https://example.com/contracts/a.rs"]);
    }

    #[tokio::test]
    async fn test_list_non_success_is_listing_unavailable() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/gone/")
            .with_status(503)
            .create_async()
            .await;

        let listing = HtmlIndexListing::new(Client::new());
        let err = listing
            .list(&format!("{}/gone/", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, MirrorError::ListingUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_list_resolves_against_served_url() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/dir/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(r#"<html><body><a href="x.rs">x.rs</a></body></html>"#)
            .create_async()
            .await;

        let listing = HtmlIndexListing::new(Client::new());
        let children = listing.list(&format!("{}/dir/", server.url())).await.unwrap();
        assert_eq!(children, vec![format!("{}/dir/x.rs", server.url())]);
    }
}
