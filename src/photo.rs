// SPDX-License-Identifier: GPL-3.0-only

//! The in-memory photo type passed through the workflow

use image::RgbImage;
use std::fmt;
use std::sync::Arc;

/// A photo held in memory as an RGB bitmap.
///
/// Cloning is cheap: the pixel buffer is shared behind an `Arc`. The
/// workflow never mutates pixels in place; every transition replaces the
/// whole `Photo` with a new one.
#[derive(Clone)]
pub struct Photo {
    pixels: Arc<RgbImage>,
}

impl Photo {
    pub fn new(pixels: RgbImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the underlying pixel buffer
    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}

impl From<image::DynamicImage> for Photo {
    fn from(image: image::DynamicImage) -> Self {
        Self::new(image.to_rgb8())
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Photo({}x{})", self.width(), self.height())
    }
}
