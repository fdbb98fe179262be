use std::path::Path;

use image::RgbImage;
use tracing::{debug, info_span};

use crate::chlorophyll::analysis::statistics::ChannelStatistics;
use crate::chlorophyll::common::error::{ComputeError, EstimationError, Result};
use crate::chlorophyll::raster::{ImageCrateReader, RasterReader};

/// Where an estimator is in its lifecycle.
///
/// A file that fails to decode never produces an `Estimator`; the
/// constructor's error stands in for the invalid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorState {
    /// Raster decoded, statistics not computed yet
    Decoded,
    /// Statistics computed and available for reporting
    Ready,
    /// Statistics computation failed; accessors return zero defaults
    Errored(ComputeError),
}

/// One analyzed image: the decoded raster plus its channel statistics.
#[derive(Debug, Clone)]
pub struct Estimator {
    source_path: String,
    image: RgbImage,
    statistics: ChannelStatistics,
    state: EstimatorState,
}

impl Estimator {
    /// Reads and decodes the image at `path` with the `image` crate.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, &ImageCrateReader)
    }

    /// Reads the file at `path` and decodes it with a custom reader.
    pub fn open_with<P: AsRef<Path>, R: RasterReader + ?Sized>(path: P, reader: &R) -> Result<Self> {
        let path = path.as_ref();

        let data = {
            let _span = info_span!("read_input_file").entered();
            std::fs::read(path).map_err(|e| {
                EstimationError::InputReadError(format!("{}: {}", path.display(), e))
            })?
        };

        let image = {
            let _span = info_span!("decode_image", input_size = data.len()).entered();
            reader.read_raster(&data)?
        };

        Ok(Self::from_raster(path.to_string_lossy(), image))
    }

    /// Wraps an already-decoded raster.
    pub fn from_raster(source_path: impl Into<String>, image: RgbImage) -> Self {
        Self {
            source_path: source_path.into(),
            image,
            statistics: ChannelStatistics::default(),
            state: EstimatorState::Decoded,
        }
    }

    /// Computes averages, ratios and hue from the owned raster.
    ///
    /// Calling this again recomputes from the same raster and yields the same
    /// outcome. On failure the cached statistics are reset to zero so no
    /// accessor reports values from a computation that did not happen.
    pub fn compute_statistics(&mut self) -> std::result::Result<&ChannelStatistics, ComputeError> {
        let _span = info_span!(
            "compute_statistics",
            width = self.image.width(),
            height = self.image.height()
        )
        .entered();

        match ChannelStatistics::from_raster(&self.image) {
            Ok(statistics) => {
                debug!(?statistics, "Statistics computed");
                self.statistics = statistics;
                self.state = EstimatorState::Ready;
                Ok(&self.statistics)
            }
            Err(e) => {
                self.statistics = ChannelStatistics::default();
                self.state = EstimatorState::Errored(e);
                Err(e)
            }
        }
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn state(&self) -> EstimatorState {
        self.state
    }

    /// Statistics, or `None` unless the last computation succeeded.
    pub fn statistics(&self) -> Option<&ChannelStatistics> {
        match self.state {
            EstimatorState::Ready => Some(&self.statistics),
            _ => None,
        }
    }

    pub fn average_red(&self) -> u8 {
        self.statistics.average_red
    }

    pub fn average_green(&self) -> u8 {
        self.statistics.average_green
    }

    pub fn average_blue(&self) -> u8 {
        self.statistics.average_blue
    }

    pub fn channel_sum(&self) -> u16 {
        self.statistics.channel_sum
    }

    pub fn red_ratio(&self) -> f64 {
        self.statistics.red_ratio
    }

    pub fn green_ratio(&self) -> f64 {
        self.statistics.green_ratio
    }

    pub fn blue_ratio(&self) -> f64 {
        self.statistics.blue_ratio
    }

    pub fn hue_degrees(&self) -> u16 {
        self.statistics.hue_degrees
    }
}
