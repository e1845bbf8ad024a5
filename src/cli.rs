// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "dir-mirror",
    version = "0.1.0",
    about = "Crawl an HTTP directory index and mirror matching files into object storage",
    long_about = "dir-mirror walks a directory index recursively, collects every file with the \
                  target extension, and can re-upload each one into a flat object-storage \
                  namespace under its base name."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (crawl, mirror)
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover matching files under a directory index and print them
    ///
    /// Example: dir-mirror crawl https://files.example.com/contracts/
    Crawl {
        /// Root directory URL to start from
        root_url: String,

        /// File extension to collect (with or without the leading dot)
        #[arg(long, default_value = "rs")]
        ext: String,

        /// Output results in JSON format instead of a plain list
        #[arg(long)]
        json: bool,
    },

    /// Discover matching files, download each and upload it to the bucket
    ///
    /// Example: dir-mirror mirror https://files.example.com/contracts/ --bucket-url https://bucket.example.com
    Mirror {
        /// Root directory URL to start from
        root_url: String,

        /// File extension to collect (with or without the leading dot)
        #[arg(long, default_value = "rs")]
        ext: String,

        /// Bucket endpoint to upload into (falls back to MIRROR_BUCKET_URL)
        #[arg(long)]
        bucket_url: Option<String>,

        /// Output the report in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}
