//! Raster reading module
//!
//! Turns encoded image bytes into an 8-bit RGB pixel grid.

mod reader;
mod image_crate_reader;

pub use reader::RasterReader;
pub use image_crate_reader::ImageCrateReader;
