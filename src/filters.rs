// SPDX-License-Identifier: GPL-3.0-only

//! The fixed filter set and the CPU renderer behind it
//!
//! Filters are per-pixel RGB transforms. The workflow only sees the
//! [`FilterService`] trait, so tests can substitute a deterministic stub.

use crate::errors::FilterError;
use crate::photo::Photo;
use image::RgbImage;

/// The closed set of filters a photo can be previewed and committed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterVariant {
    /// Luma grayscale
    Monochrome,
    /// Boosted saturation and contrast
    Chrome,
    /// Warm, faded tone with lifted blacks
    Vintage,
}

impl FilterVariant {
    /// All variants, in the order the previews are requested
    pub const ALL: [FilterVariant; 3] = [
        FilterVariant::Monochrome,
        FilterVariant::Chrome,
        FilterVariant::Vintage,
    ];

    /// Get display name for the filter
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterVariant::Monochrome => "Monochrome",
            FilterVariant::Chrome => "Chrome",
            FilterVariant::Vintage => "Vintage",
        }
    }

    /// Lowercase name used in file names and CLI arguments
    pub fn slug(&self) -> &'static str {
        match self {
            FilterVariant::Monochrome => "monochrome",
            FilterVariant::Chrome => "chrome",
            FilterVariant::Vintage => "vintage",
        }
    }

    /// One-line description for CLI listings
    pub fn description(&self) -> &'static str {
        match self {
            FilterVariant::Monochrome => "Black & white",
            FilterVariant::Chrome => "Vivid colors with extra punch",
            FilterVariant::Vintage => "Warm, faded film look",
        }
    }
}

impl std::str::FromStr for FilterVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monochrome" | "mono" => Ok(FilterVariant::Monochrome),
            "chrome" => Ok(FilterVariant::Chrome),
            "vintage" => Ok(FilterVariant::Vintage),
            other => Err(format!(
                "unknown filter '{}' (expected monochrome, chrome, or vintage)",
                other
            )),
        }
    }
}

/// Asynchronous filter transform collaborator
///
/// One call per variant; calls are independent and may complete in any
/// order.
#[allow(async_fn_in_trait)]
pub trait FilterService {
    async fn apply(&self, variant: FilterVariant, photo: Photo) -> Result<Photo, FilterError>;
}

/// CPU filter renderer
///
/// Runs the pixel loop on the blocking thread pool so the caller's task
/// is never stalled by a large photo.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuFilterService;

impl FilterService for CpuFilterService {
    async fn apply(&self, variant: FilterVariant, photo: Photo) -> Result<Photo, FilterError> {
        tokio::task::spawn_blocking(move || render(variant, &photo))
            .await
            .map_err(|e| FilterError::TaskFailed(e.to_string()))
    }
}

/// Render a filtered copy of the photo
fn render(variant: FilterVariant, photo: &Photo) -> Photo {
    let src = photo.pixels();
    let mut out = RgbImage::new(src.width(), src.height());

    for (dst, px) in out.pixels_mut().zip(src.pixels()) {
        let mut r = px[0] as f32 / 255.0;
        let mut g = px[1] as f32 / 255.0;
        let mut b = px[2] as f32 / 255.0;

        apply_filter_rgb(&mut r, &mut g, &mut b, variant);

        dst[0] = (r.clamp(0.0, 1.0) * 255.0) as u8;
        dst[1] = (g.clamp(0.0, 1.0) * 255.0) as u8;
        dst[2] = (b.clamp(0.0, 1.0) * 255.0) as u8;
    }

    Photo::new(out)
}

/// Apply filter effect to RGB values in-place
#[inline]
fn apply_filter_rgb(r: &mut f32, g: &mut f32, b: &mut f32, variant: FilterVariant) {
    let luminance = 0.299 * *r + 0.587 * *g + 0.114 * *b;

    match variant {
        FilterVariant::Monochrome => {
            *r = luminance;
            *g = luminance;
            *b = luminance;
        }

        FilterVariant::Chrome => {
            // Saturation boost around the luminance, then a contrast lift
            *r = (luminance + (*r - luminance) * 1.4).clamp(0.0, 1.0);
            *g = (luminance + (*g - luminance) * 1.4).clamp(0.0, 1.0);
            *b = (luminance + (*b - luminance) * 1.4).clamp(0.0, 1.0);
            *r = ((*r - 0.5) * 1.15 + 0.5).clamp(0.0, 1.0);
            *g = ((*g - 0.5) * 1.15 + 0.5).clamp(0.0, 1.0);
            *b = ((*b - 0.5) * 1.15 + 0.5).clamp(0.0, 1.0);
        }

        FilterVariant::Vintage => {
            // Desaturate toward the luminance, shift warm, lift the blacks
            *r = (luminance + (*r - luminance) * 0.6) * 1.08;
            *g = (luminance + (*g - luminance) * 0.6) * 0.98;
            *b = (luminance + (*b - luminance) * 0.6) * 0.82;
            *r = (*r * 0.85 + 0.1).clamp(0.0, 1.0);
            *g = (*g * 0.85 + 0.1).clamp(0.0, 1.0);
            *b = (*b * 0.85 + 0.1).clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn colorful_photo() -> Photo {
        let mut img = RgbImage::new(4, 2);
        for (i, px) in img.pixels_mut().enumerate() {
            *px = Rgb([(i as u8) * 30, 200 - (i as u8) * 20, 60]);
        }
        Photo::new(img)
    }

    #[test]
    fn monochrome_output_is_gray() {
        let rendered = render(FilterVariant::Monochrome, &colorful_photo());
        for px in rendered.pixels().pixels() {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn render_preserves_dimensions() {
        let photo = colorful_photo();
        for variant in FilterVariant::ALL {
            let rendered = render(variant, &photo);
            assert_eq!(rendered.width(), photo.width());
            assert_eq!(rendered.height(), photo.height());
        }
    }

    #[test]
    fn variants_produce_distinct_output() {
        let photo = colorful_photo();
        let chrome = render(FilterVariant::Chrome, &photo);
        let vintage = render(FilterVariant::Vintage, &photo);
        assert_ne!(chrome.pixels().as_raw(), vintage.pixels().as_raw());
        assert_ne!(chrome.pixels().as_raw(), photo.pixels().as_raw());
    }

    #[test]
    fn variant_parses_from_slug() {
        for variant in FilterVariant::ALL {
            assert_eq!(variant.slug().parse::<FilterVariant>().unwrap(), variant);
        }
        assert!("sepia".parse::<FilterVariant>().is_err());
    }
}
