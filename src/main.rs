// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "snapshare")]
#[command(about = "Pick a photo, preview filters, and share it to an object store")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available photo filters
    ListFilters,

    /// Render every filter preview for a photo and save them to disk
    Preview {
        /// Photo to preview (default: newest image in the photo library)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory to write the previews to (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Upload a photo, optionally applying a filter first
    Upload {
        /// Photo to upload (default: newest image in the photo library)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Filter to apply before uploading (monochrome, chrome, vintage)
        #[arg(short, long)]
        filter: Option<String>,

        /// Upload endpoint (default: the configured URL)
        #[arg(short, long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=snapshare=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ListFilters => {
            cli::list_filters();
            Ok(())
        }
        Commands::Preview { input, output } => cli::preview(input, output).await,
        Commands::Upload { input, filter, url } => cli::upload(input, filter, url).await,
    }
}
