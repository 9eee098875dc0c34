// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the share workflow and its collaborators

use crate::filters::FilterVariant;
use crate::sources::SourceKind;
use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Workflow state machine errors
    Workflow(WorkflowError),
    /// Photo capture/pick errors
    Capture(CaptureError),
    /// Photo encoding errors
    Photo(PhotoError),
    /// Object storage errors
    Storage(StorageError),
    /// Configuration errors
    Config(String),
    /// Generic error with message
    Other(String),
}

/// Errors surfaced by the capture → preview → upload workflow
#[derive(Debug, Clone)]
pub enum WorkflowError {
    /// The requested capture source is not present on this device
    SourceUnavailable(SourceKind),
    /// An operation that needs a current photo was called without one
    NoPhotoSelected,
    /// A filter was committed without a rendered preview for it
    FilterNotPreviewed(FilterVariant),
    /// An upload was requested while another one is in flight
    UploadInFlight,
    /// The upload attempt failed (transport or backend, opaque reason)
    UploadFailed(String),
    /// Picking a photo from the capture source failed
    Capture(CaptureError),
    /// Encoding the photo for upload failed
    Photo(PhotoError),
}

/// Capture source errors
#[derive(Debug, Clone)]
pub enum CaptureError {
    /// Reading the picked image failed
    PickFailed(String),
    /// The picked image could not be decoded
    DecodeFailed(String),
    /// The photo library contains no images
    EmptyLibrary,
}

/// Photo encoding errors
#[derive(Debug, Clone)]
pub enum PhotoError {
    /// Encoding to the transport format failed
    EncodingFailed(String),
}

/// Filter service errors
#[derive(Debug, Clone)]
pub enum FilterError {
    /// The render task did not run to completion
    TaskFailed(String),
    /// The transform itself failed
    RenderFailed(String),
}

/// Object storage errors
#[derive(Debug, Clone)]
pub enum StorageError {
    /// The request could not be sent or the transport failed mid-flight
    RequestFailed(String),
    /// The backend answered with a non-success status
    Rejected(u16),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Workflow(e) => write!(f, "Workflow error: {}", e),
            AppError::Capture(e) => write!(f, "Capture error: {}", e),
            AppError::Photo(e) => write!(f, "Photo error: {}", e),
            AppError::Storage(e) => write!(f, "Storage error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowError::SourceUnavailable(kind) => {
                write!(f, "{} is not available on this device", kind.display_name())
            }
            WorkflowError::NoPhotoSelected => write!(f, "No photo selected"),
            WorkflowError::FilterNotPreviewed(variant) => {
                write!(
                    f,
                    "No preview rendered for the {} filter",
                    variant.display_name()
                )
            }
            WorkflowError::UploadInFlight => write!(f, "An upload is already in flight"),
            WorkflowError::UploadFailed(msg) => write!(f, "Upload failed: {}", msg),
            WorkflowError::Capture(e) => write!(f, "{}", e),
            WorkflowError::Photo(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PickFailed(msg) => write!(f, "Failed to pick image: {}", msg),
            CaptureError::DecodeFailed(msg) => write!(f, "Failed to decode image: {}", msg),
            CaptureError::EmptyLibrary => write!(f, "The photo library contains no images"),
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
        }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::TaskFailed(msg) => write!(f, "Filter task failed: {}", msg),
            FilterError::RenderFailed(msg) => write!(f, "Filter render failed: {}", msg),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::RequestFailed(msg) => write!(f, "Upload request failed: {}", msg),
            StorageError::Rejected(status) => {
                write!(f, "Upload rejected by the backend (HTTP {})", status)
            }
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for WorkflowError {}
impl std::error::Error for CaptureError {}
impl std::error::Error for PhotoError {}
impl std::error::Error for FilterError {}
impl std::error::Error for StorageError {}

// Conversions from sub-errors to WorkflowError
impl From<CaptureError> for WorkflowError {
    fn from(err: CaptureError) -> Self {
        WorkflowError::Capture(err)
    }
}

impl From<PhotoError> for WorkflowError {
    fn from(err: PhotoError) -> Self {
        WorkflowError::Photo(err)
    }
}

// Conversions from sub-errors to AppError
impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        AppError::Workflow(err)
    }
}

impl From<CaptureError> for AppError {
    fn from(err: CaptureError) -> Self {
        AppError::Capture(err)
    }
}

impl From<PhotoError> for AppError {
    fn from(err: PhotoError) -> Self {
        AppError::Photo(err)
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Other(err.to_string())
    }
}
