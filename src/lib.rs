// SPDX-License-Identifier: GPL-3.0-only

//! snapshare - pick a photo, preview filters, and share it
//!
//! This library drives a small photo-sharing session: acquire an image
//! from a capture source, render three canned filter previews, commit one,
//! and upload the resulting JPEG to an object store.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`workflow`]: The capture → preview → upload state machine
//! - [`sources`]: Capture sources (photo library, pinned file)
//! - [`filters`]: The fixed filter set and the CPU renderer
//! - [`upload`]: Object storage client
//! - [`encoding`]: JPEG encoding and object naming
//! - [`config`]: User configuration handling
//!
//! Capture, filtering, and storage sit behind traits, so the workflow can
//! be driven in tests with stub collaborators.

pub mod config;
pub mod constants;
pub mod encoding;
pub mod errors;
pub mod filters;
pub mod photo;
pub mod sources;
pub mod upload;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use errors::{AppError, AppResult, CaptureError, StorageError, WorkflowError};
pub use filters::{CpuFilterService, FilterService, FilterVariant};
pub use photo::Photo;
pub use sources::{CaptureSource, FileSource, LibrarySource, PickOutcome, SourceKind};
pub use upload::{HttpObjectStorage, ObjectStorage};
pub use workflow::{CaptureUploadWorkflow, WorkflowState};
