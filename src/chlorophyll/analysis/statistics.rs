use image::RgbImage;
use tracing::debug;

use crate::chlorophyll::analysis::hue::hue_degrees;
use crate::chlorophyll::common::error::ComputeError;

/// Aggregate color statistics for one image.
///
/// The `Default` value (all zeros) is what an estimator reports before a
/// successful computation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelStatistics {
    /// Floor of the mean red intensity over all pixels
    pub average_red: u8,
    /// Floor of the mean green intensity over all pixels
    pub average_green: u8,
    /// Floor of the mean blue intensity over all pixels
    pub average_blue: u8,
    /// Sum of the three averages, 0..=765
    pub channel_sum: u16,
    pub red_ratio: f64,
    pub green_ratio: f64,
    pub blue_ratio: f64,
    /// Hue of the averages in whole degrees, 0..360
    pub hue_degrees: u16,
}

impl ChannelStatistics {
    /// Scans every pixel once and derives averages, ratios and hue.
    pub fn from_raster(image: &RgbImage) -> Result<Self, ComputeError> {
        let (width, height) = image.dimensions();
        let pixel_count = u64::from(width) * u64::from(height);

        if pixel_count == 0 {
            return Err(ComputeError::EmptyImage { width, height });
        }

        let mut totals = [0u64; 3];
        for pixel in image.pixels() {
            totals[0] += u64::from(pixel[0]);
            totals[1] += u64::from(pixel[1]);
            totals[2] += u64::from(pixel[2]);
        }

        debug!(
            "Channel totals over {} pixels: r={} g={} b={}",
            pixel_count, totals[0], totals[1], totals[2]
        );

        // Each total is at most 255 * pixel_count, so the quotient fits in a u8.
        Self::from_averages(
            (totals[0] / pixel_count) as u8,
            (totals[1] / pixel_count) as u8,
            (totals[2] / pixel_count) as u8,
        )
    }

    /// Derives ratios and hue from already-computed channel averages.
    pub fn from_averages(red: u8, green: u8, blue: u8) -> Result<Self, ComputeError> {
        let channel_sum = u16::from(red) + u16::from(green) + u16::from(blue);
        if channel_sum == 0 {
            return Err(ComputeError::ZeroChannelSum);
        }

        let sum = f64::from(channel_sum);
        Ok(Self {
            average_red: red,
            average_green: green,
            average_blue: blue,
            channel_sum,
            red_ratio: f64::from(red) / sum,
            green_ratio: f64::from(green) / sum,
            blue_ratio: f64::from(blue) / sum,
            hue_degrees: hue_degrees(red, green, blue),
        })
    }
}
