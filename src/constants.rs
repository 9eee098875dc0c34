// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// JPEG quality used when encoding a photo for upload (0-100).
///
/// Matches the 0.7 compression quality the backend expects.
pub const UPLOAD_JPEG_QUALITY: u8 = 70;

/// Default prefix for uploaded object names (`IMG_<timestamp>.jpg`)
pub const DEFAULT_OBJECT_PREFIX: &str = "IMG";

/// Multipart field name the storage endpoint reads the image from
pub const UPLOAD_FIELD_NAME: &str = "image";

/// Directory name used under the platform config dir
pub const APP_NAME: &str = "snapshare";
