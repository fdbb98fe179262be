//! Raster reader backed by the `image` crate.
//!
//! The container format is guessed from the leading bytes rather than from the
//! file extension, so a mislabelled file still decodes and a renamed text file
//! is still rejected.

use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::chlorophyll::common::error::{EstimationError, Result};
use crate::chlorophyll::raster::reader::RasterReader;

/// Reader for every format enabled on the `image` dependency (PNG, JPEG,
/// TIFF, BMP, GIF, WebP).
pub struct ImageCrateReader;

impl RasterReader for ImageCrateReader {
    /// Decodes `data` and converts the result to 8-bit RGB.
    ///
    /// Grayscale inputs are expanded to three equal channels, alpha is
    /// dropped, and 16-bit or float samples are scaled down to 8 bits.
    fn read_raster(&self, data: &[u8]) -> Result<RgbImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| EstimationError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded image: {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(match decoded {
            DynamicImage::ImageRgb8(rgb) => rgb,
            other => other.to_rgb8(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_reads_rgb_png() {
        let source = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let bytes = encode_png(DynamicImage::ImageRgb8(source.clone()));

        let raster = ImageCrateReader.read_raster(&bytes).unwrap();

        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster, source);
    }

    #[test]
    fn test_drops_alpha_channel() {
        let source = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 7]));
        let bytes = encode_png(DynamicImage::ImageRgba8(source));

        let raster = ImageCrateReader.read_raster(&bytes).unwrap();

        assert!(raster.pixels().all(|p| *p == Rgb([200, 100, 50])));
    }

    #[test]
    fn test_rejects_non_image_bytes() {
        let result = ImageCrateReader.read_raster(b"this is not an image");

        assert!(matches!(result, Err(EstimationError::DecodeError(_))));
    }

    #[test]
    fn test_rejects_empty_input() {
        let result = ImageCrateReader.read_raster(&[]);

        assert!(matches!(result, Err(EstimationError::DecodeError(_))));
    }
}
