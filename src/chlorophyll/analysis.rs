//! Color analysis module
//!
//! Channel averages, ratios and hue for a single decoded image.

mod hue;
mod statistics;
mod estimator;


pub use hue::hue_degrees;
pub use statistics::ChannelStatistics;
pub use estimator::{Estimator, EstimatorState};
