// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands driving the share workflow
//!
//! This module provides command-line functionality for:
//! - Listing the available filters
//! - Rendering filter previews to disk
//! - Uploading a photo, optionally filtered

use snapshare::config::Config;
use snapshare::constants::UPLOAD_JPEG_QUALITY;
use snapshare::encoding;
use snapshare::filters::{CpuFilterService, FilterVariant};
use snapshare::sources::{CaptureSource, FileSource, LibrarySource, SourceKind};
use snapshare::upload::HttpObjectStorage;
use snapshare::workflow::CaptureUploadWorkflow;
use std::path::PathBuf;

/// List the available filters
pub fn list_filters() {
    println!("Available filters:");
    println!();
    for variant in FilterVariant::ALL {
        println!("  {:<12} {}", variant.slug(), variant.description());
    }
}

/// Render every filter preview for a photo and save them next to each other
pub async fn preview(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&output_dir)?;

    match input {
        Some(path) => run_preview(FileSource::new(path), output_dir).await,
        None => run_preview(LibrarySource::new(config.resolve_library_dir()), output_dir).await,
    }
}

async fn run_preview<C: CaptureSource>(
    capture: C,
    output_dir: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    // The storage client is unused here; previews never leave the machine
    let mut workflow =
        CaptureUploadWorkflow::new(capture, CpuFilterService, HttpObjectStorage::new(""));

    if !workflow.select_photo(SourceKind::PhotoLibrary).await? {
        println!("Cancelled.");
        return Ok(());
    }

    let mut rendered = Vec::new();
    workflow
        .preview_filters_with(|variant, photo| rendered.push((variant, photo.clone())))
        .await?;

    for (variant, photo) in rendered {
        let data = encoding::encode_jpeg(&photo, UPLOAD_JPEG_QUALITY)?;
        let filename = encoding::object_name(variant.slug());
        std::fs::write(output_dir.join(&filename), &data)?;
        println!("  {:<12} -> {}", variant.display_name(), filename);
    }

    Ok(())
}

/// Upload a photo, optionally applying a filter first
pub async fn upload(
    input: Option<PathBuf>,
    filter: Option<String>,
    url: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();

    let endpoint = match url {
        Some(url) => url,
        None if !config.upload_url.is_empty() => config.upload_url.clone(),
        None => {
            return Err("no upload endpoint configured; pass --url or set upload_url in the config"
                .into());
        }
    };

    let variant = filter
        .map(|name| name.parse::<FilterVariant>())
        .transpose()?;
    let prefix = config.object_name_prefix.clone();

    match input {
        Some(path) => run_upload(FileSource::new(path), endpoint, prefix, variant).await,
        None => {
            let capture = LibrarySource::new(config.resolve_library_dir());
            run_upload(capture, endpoint, prefix, variant).await
        }
    }
}

async fn run_upload<C: CaptureSource>(
    capture: C,
    endpoint: String,
    prefix: String,
    variant: Option<FilterVariant>,
) -> Result<(), Box<dyn std::error::Error>> {
    let storage = HttpObjectStorage::new(endpoint);
    let mut workflow = CaptureUploadWorkflow::new(capture, CpuFilterService, storage)
        .with_object_prefix(prefix);

    if !workflow.select_photo(SourceKind::PhotoLibrary).await? {
        println!("Cancelled.");
        return Ok(());
    }

    if let Some(variant) = variant {
        workflow.preview_filters().await?;
        workflow.commit_filter(variant)?;
        println!("Applied the {} filter", variant.display_name());
    }

    workflow.upload().await?;
    println!("Upload complete.");
    Ok(())
}
