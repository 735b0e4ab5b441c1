//! The raster seam between the embedding codec and concrete image types.

use image::{RgbImage, RgbaImage};

/// Narrow view onto a raster image: dimensions, channel count, and byte
/// access to a single channel of a single pixel. The embedding codec works
/// exclusively through this trait, so any image representation that can
/// expose channel bytes will do.
pub trait Raster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn channels(&self) -> u8;
    fn channel(&self, x: u32, y: u32, channel: u8) -> u8;
    fn set_channel(&mut self, x: u32, y: u32, channel: u8, value: u8);
}

impl Raster for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn channels(&self) -> u8 {
        3
    }

    fn channel(&self, x: u32, y: u32, channel: u8) -> u8 {
        self.get_pixel(x, y).0[usize::from(channel)]
    }

    fn set_channel(&mut self, x: u32, y: u32, channel: u8, value: u8) {
        self.get_pixel_mut(x, y).0[usize::from(channel)] = value;
    }
}

impl Raster for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn channels(&self) -> u8 {
        4
    }

    fn channel(&self, x: u32, y: u32, channel: u8) -> u8 {
        self.get_pixel(x, y).0[usize::from(channel)]
    }

    fn set_channel(&mut self, x: u32, y: u32, channel: u8, value: u8) {
        self.get_pixel_mut(x, y).0[usize::from(channel)] = value;
    }
}
