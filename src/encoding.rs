// SPDX-License-Identifier: GPL-3.0-only

//! JPEG encoding and object naming for the upload path

use crate::errors::PhotoError;
use crate::photo::Photo;

/// Encode a photo as JPEG at the given quality (0-100)
pub fn encode_jpeg(photo: &Photo, quality: u8) -> Result<Vec<u8>, PhotoError> {
    let image = photo.pixels();
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);

    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality);
    encoder
        .encode(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| PhotoError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Build a timestamped object name, e.g. `IMG_20260827_153012.jpg`
pub fn object_name(prefix: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}.jpg", prefix, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn encoded_photo_is_a_jpeg() {
        let photo = Photo::new(RgbImage::from_pixel(16, 16, Rgb([120, 80, 40])));
        let data = encode_jpeg(&photo, 70).unwrap();

        // JPEG SOI and EOI markers
        assert_eq!(data[..2], [0xFF, 0xD8]);
        assert_eq!(data[data.len() - 2..], [0xFF, 0xD9]);
    }

    #[test]
    fn lower_quality_means_fewer_bytes() {
        let mut img = RgbImage::new(64, 64);
        for (i, px) in img.pixels_mut().enumerate() {
            *px = Rgb([(i % 251) as u8, (i % 241) as u8, (i % 239) as u8]);
        }
        let photo = Photo::new(img);

        let low = encode_jpeg(&photo, 20).unwrap();
        let high = encode_jpeg(&photo, 95).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn object_name_has_prefix_and_extension() {
        let name = object_name("IMG");
        assert!(name.starts_with("IMG_"));
        assert!(name.ends_with(".jpg"));
    }
}
