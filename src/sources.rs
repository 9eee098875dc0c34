// SPDX-License-Identifier: GPL-3.0-only

//! Capture sources the workflow can pick a photo from
//!
//! The workflow only depends on the [`CaptureSource`] trait. Two
//! implementations ship with the crate: [`LibrarySource`] picks the newest
//! image out of a photo directory, [`FileSource`] pins one file (used by
//! the CLI's `--input`).

use crate::errors::CaptureError;
use crate::photo::Photo;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a photo can be acquired from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Camera,
    PhotoLibrary,
}

impl SourceKind {
    /// Get display name for the source
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKind::Camera => "Camera",
            SourceKind::PhotoLibrary => "Photo library",
        }
    }
}

/// Result of a pick: either a photo or a user cancellation
#[derive(Debug, Clone)]
pub enum PickOutcome {
    Picked(Photo),
    Cancelled,
}

/// Image capture collaborator
#[allow(async_fn_in_trait)]
pub trait CaptureSource {
    /// Whether the given source kind is present on this device
    fn is_available(&self, kind: SourceKind) -> bool;

    /// Pick an image from the source
    async fn pick_image(&self, kind: SourceKind) -> Result<PickOutcome, CaptureError>;
}

/// Picks the most recently modified JPEG/PNG out of a directory
#[derive(Debug, Clone)]
pub struct LibrarySource {
    root: PathBuf,
}

impl LibrarySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CaptureSource for LibrarySource {
    fn is_available(&self, kind: SourceKind) -> bool {
        matches!(kind, SourceKind::PhotoLibrary) && self.root.is_dir()
    }

    async fn pick_image(&self, kind: SourceKind) -> Result<PickOutcome, CaptureError> {
        if kind != SourceKind::PhotoLibrary {
            return Err(CaptureError::PickFailed(format!(
                "{} is not backed by a library source",
                kind.display_name()
            )));
        }

        let root = self.root.clone();
        let newest = tokio::task::spawn_blocking(move || newest_image_in(&root))
            .await
            .map_err(|e| CaptureError::PickFailed(e.to_string()))?;

        let Some(path) = newest else {
            return Err(CaptureError::EmptyLibrary);
        };

        debug!(path = ?path, "Picking newest library image");
        load_photo(&path).await.map(PickOutcome::Picked)
    }
}

/// A capture source pinned to one image file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CaptureSource for FileSource {
    fn is_available(&self, kind: SourceKind) -> bool {
        matches!(kind, SourceKind::PhotoLibrary) && self.path.is_file()
    }

    async fn pick_image(&self, kind: SourceKind) -> Result<PickOutcome, CaptureError> {
        if kind != SourceKind::PhotoLibrary {
            return Err(CaptureError::PickFailed(format!(
                "{} is not backed by a file source",
                kind.display_name()
            )));
        }

        load_photo(&self.path).await.map(PickOutcome::Picked)
    }
}

/// Read and decode an image file into a [`Photo`]
///
/// The file is read asynchronously; decoding runs on the blocking pool.
pub async fn load_photo(path: &Path) -> Result<Photo, CaptureError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CaptureError::PickFailed(format!("{}: {}", path.display(), e)))?;

    tokio::task::spawn_blocking(move || image::load_from_memory(&bytes).map(Photo::from))
        .await
        .map_err(|e| CaptureError::PickFailed(e.to_string()))?
        .map_err(|e| CaptureError::DecodeFailed(e.to_string()))
}

/// Find the most recently modified JPEG/PNG in a directory
fn newest_image_in(dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;

    entries
        .flatten()
        .filter(|entry| {
            let path = entry.path();
            // A directory can carry an image extension too
            path.is_file()
                && path.extension().is_some_and(|ext| {
                    let ext = ext.to_string_lossy();
                    ext.eq_ignore_ascii_case("jpg")
                        || ext.eq_ignore_ascii_case("jpeg")
                        || ext.eq_ignore_ascii_case("png")
                })
        })
        .max_by_key(|entry| entry.metadata().ok().and_then(|m| m.modified().ok()))
        .map(|entry| entry.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::time::Duration;

    fn write_test_image(path: &Path, color: [u8; 3]) {
        RgbImage::from_pixel(8, 8, Rgb(color)).save(path).unwrap();
    }

    #[test]
    fn library_reports_camera_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = LibrarySource::new(dir.path());
        assert!(!source.is_available(SourceKind::Camera));
        assert!(source.is_available(SourceKind::PhotoLibrary));
    }

    #[tokio::test]
    async fn empty_library_has_nothing_to_pick() {
        let dir = tempfile::tempdir().unwrap();
        let source = LibrarySource::new(dir.path());
        let result = source.pick_image(SourceKind::PhotoLibrary).await;
        assert!(matches!(result, Err(CaptureError::EmptyLibrary)));
    }

    #[tokio::test]
    async fn library_picks_the_newest_image() {
        let dir = tempfile::tempdir().unwrap();
        write_test_image(&dir.path().join("old.png"), [255, 0, 0]);
        // Separate the modification times
        std::thread::sleep(Duration::from_millis(20));
        write_test_image(&dir.path().join("new.png"), [0, 255, 0]);

        let source = LibrarySource::new(dir.path());
        let outcome = source.pick_image(SourceKind::PhotoLibrary).await.unwrap();
        let PickOutcome::Picked(photo) = outcome else {
            panic!("expected a picked photo");
        };
        assert_eq!(photo.pixels().get_pixel(0, 0), &Rgb([0, 255, 0]));
    }

    #[tokio::test]
    async fn directories_with_image_extensions_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_test_image(&dir.path().join("real.png"), [1, 2, 3]);
        std::thread::sleep(Duration::from_millis(20));
        std::fs::create_dir(dir.path().join("folder.jpg")).unwrap();

        let source = LibrarySource::new(dir.path());
        let outcome = source.pick_image(SourceKind::PhotoLibrary).await.unwrap();
        let PickOutcome::Picked(photo) = outcome else {
            panic!("expected a picked photo");
        };
        assert_eq!(photo.pixels().get_pixel(0, 0), &Rgb([1, 2, 3]));
    }

    #[tokio::test]
    async fn file_source_loads_the_pinned_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        write_test_image(&path, [10, 20, 30]);

        let source = FileSource::new(&path);
        assert!(source.is_available(SourceKind::PhotoLibrary));
        let outcome = source.pick_image(SourceKind::PhotoLibrary).await.unwrap();
        assert!(matches!(outcome, PickOutcome::Picked(_)));
    }

    #[tokio::test]
    async fn unreadable_file_is_a_pick_failure() {
        let source = FileSource::new("/nonexistent/photo.jpg");
        let result = source.pick_image(SourceKind::PhotoLibrary).await;
        assert!(matches!(result, Err(CaptureError::PickFailed(_))));
    }
}
