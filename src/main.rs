// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Initialize tracing (diagnostics go to stderr, output stays on stdout)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Print results and exit with proper code
//    (0 = clean, 1 = partial failures, 2 = unexpected error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - object-storage settings
mod crawl; // src/crawl/ - recursive directory traversal
mod error; // src/error.rs - failure taxonomy
mod listing; // src/listing/ - directory-index scraping
mod mirror; // src/mirror/ - fetch-and-upload batch

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::StoreConfig;
use crawl::{Crawler, SuffixClassifier};
use listing::HtmlIndexListing;
use mirror::{HttpObjectStore, MirrorReport};

#[tokio::main]
async fn main() {
    // Diagnostics go through tracing so stdout stays machine-readable;
    // RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dir_mirror=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl { root_url, ext, json } => handle_crawl(&root_url, &ext, json).await,
        Commands::Mirror {
            root_url,
            ext,
            bucket_url,
            json,
        } => handle_mirror(&root_url, &ext, bucket_url, json).await,
    }
}

// Builds the HTTP client shared by listing, fetching and uploading.
// Per-request timeout so one unresponsive upstream can't stall the crawl
// forever.
fn http_client() -> Result<Client> {
    let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
    Ok(client)
}

// Runs the traversal and returns the discovered file locations.
// A fresh Crawler per invocation keeps repeated runs idempotent.
async fn discover(client: &Client, root_url: &str, ext: &str) -> Vec<String> {
    let mut crawler = Crawler::new(
        Box::new(HtmlIndexListing::new(client.clone())),
        Box::new(SuffixClassifier::new(ext)),
    );
    crawler.crawl(root_url).await
}

// Prints a human status line. Under --json it goes to stderr so stdout
// carries nothing but the document.
fn status(json: bool, message: &str) {
    if json {
        eprintln!("{}", message);
    } else {
        println!("{}", message);
    }
}

// Handles the 'crawl' subcommand: discover and print, no uploads
async fn handle_crawl(root_url: &str, ext: &str, json: bool) -> Result<i32> {
    status(json, &format!("🔍 Crawling directory index: {}", root_url));

    let client = http_client()?;
    let files = discover(&client, root_url, ext).await;

    println!("{}", render_files(&files, json)?);

    Ok(0)
}

// Handles the 'mirror' subcommand: discover, then fetch and upload each file
async fn handle_mirror(
    root_url: &str,
    ext: &str,
    bucket_url: Option<String>,
    json: bool,
) -> Result<i32> {
    let store_config = StoreConfig::resolve(bucket_url)?;

    status(json, &format!("🔍 Crawling directory index: {}", root_url));

    let client = http_client()?;
    let files = discover(&client, root_url, ext).await;

    if files.is_empty() {
        status(json, "✅ Nothing to mirror");
        if json {
            // Still emit a document so consumers always get one
            let empty = MirrorReport {
                uploaded: Vec::new(),
                failed: Vec::new(),
            };
            println!("{}", render_report(&empty, true)?);
        }
        return Ok(0);
    }

    status(
        json,
        &format!("📦 Mirroring {} file(s) to {}", files.len(), store_config.bucket_url),
    );

    let store = HttpObjectStore::new(client.clone(), store_config);
    let report = mirror::mirror(&client, &store, &files).await;

    println!("{}", render_report(&report, json)?);

    if report.is_clean() {
        Ok(0) // Exit code 0 = everything uploaded
    } else {
        Ok(1) // Exit code 1 = some items failed
    }
}

// Renders the crawl result list either as JSON or a plain list
fn render_files(files: &[String], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(files)?);
    }

    let mut out = String::new();
    for file in files {
        out.push_str(file);
        out.push('\n');
    }
    out.push_str(&format!("\n📋 Found {} file(s)", files.len()));
    Ok(out)
}

// Renders the mirror report either as JSON or a table
fn render_report(report: &MirrorReport, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut out = String::new();
    for key in &report.uploaded {
        out.push_str(&format!("   ✅ {}\n", key));
    }
    for item in &report.failed {
        out.push_str(&format!("   ❌ {} ({}: {})\n", item.location, item.stage, item.reason));
    }

    out.push_str("\n📊 Summary:\n");
    out.push_str(&format!("   ✅ Uploaded: {}\n", report.uploaded.len()));
    out.push_str(&format!("   ❌ Failed: {}\n", report.failed.len()));
    out.push_str(&format!(
        "   📋 Total: {}",
        report.uploaded.len() + report.failed.len()
    ));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mirror::FailedItem;

    fn report() -> MirrorReport {
        MirrorReport {
            uploaded: vec!["a.rs".to_string()],
            failed: vec![FailedItem {
                location: "https://example.com/b.rs".to_string(),
                stage: "fetch".to_string(),
                reason: "HTTP 404".to_string(),
            }],
        }
    }

    #[test]
    fn test_json_report_is_a_pure_document() {
        let out = render_report(&report(), true).unwrap();
        // Must parse from the first byte: no status prefix allowed
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["uploaded"][0], "a.rs");
        assert_eq!(value["failed"][0]["stage"], "fetch");
    }

    #[test]
    fn test_json_file_list_is_a_pure_document() {
        let files = vec!["https://example.com/a.rs".to_string()];
        let out = render_files(&files, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0], "https://example.com/a.rs");
    }

    #[test]
    fn test_table_report_counts() {
        let out = render_report(&report(), false).unwrap();
        assert!(out.contains("Uploaded: 1"));
        assert!(out.contains("Failed: 1"));
        assert!(out.contains("Total: 2"));
    }
}
