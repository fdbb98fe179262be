//! Chlorophyll estimation module
//!
//! This module estimates a chlorophyll proxy for algae photographs from the
//! average color of the whole frame, with separate modules for raster
//! decoding, color analysis, log formatting and batch orchestration.

pub mod common;
pub mod raster;
pub mod analysis;
pub mod report;
pub mod pipeline;

pub use common::{
    ComputeError,
    EstimationError,
    Result,
};

pub use raster::{
    RasterReader,
    ImageCrateReader,
};

pub use analysis::{
    ChannelStatistics,
    Estimator,
    EstimatorState,
    hue_degrees,
};

pub use report::{
    AppendLogWriter,
    DEFAULT_OUTPUT_PATH,
    ReportEntry,
    ReportWriter,
    RunConfig,
    RunConfigBuilder,
};

pub use pipeline::{
    EstimationRun,
    FileOutcome,
    RunSummary,
};
