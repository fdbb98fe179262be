use image::RgbImage;

use crate::chlorophyll::common::error::Result;

pub trait RasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<RgbImage>;
}
