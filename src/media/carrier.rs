//! File-facing carrier handling.

use std::fs::File;
use std::path::Path;

use image::RgbImage;
use log::error;

use crate::error::StegocryptError;
use crate::result::Result;

use super::Persist;

/// A carrier image for the pipeline.
///
/// Only lossless raster formats are accepted from disk; a lossy format
/// would destroy the channel LSBs on re-encoding. Stego output is always
/// persisted as PNG.
#[derive(Debug, Clone)]
pub struct Carrier {
    image: RgbImage,
}

impl Carrier {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .ok_or(StegocryptError::UnsupportedCarrierFormat)?;

        match ext.as_str() {
            "png" | "bmp" | "tif" | "tiff" => {
                let image = image::open(path)
                    .map_err(|_e| StegocryptError::InvalidImageMedia)?
                    .to_rgb8();
                Ok(Self { image })
            }
            "jpg" | "jpeg" => Err(StegocryptError::LossyCarrierFormat(ext)),
            _ => Err(StegocryptError::UnsupportedCarrierFormat),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let mut f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegocryptError::WriteError { source: e }
        })?;

        self.image
            .write_to(&mut f, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegocryptError::ImageEncodingError
            })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::media::sample;

    #[test]
    fn lossy_extensions_are_rejected_before_any_io() {
        match Carrier::from_file(Path::new("missing-photo.jpg")) {
            Err(StegocryptError::LossyCarrierFormat(ext)) => assert_eq!(ext, "jpg"),
            other => panic!("expected LossyCarrierFormat, got {other:?}"),
        }
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        match Carrier::from_file(Path::new("notes.txt")) {
            Err(StegocryptError::UnsupportedCarrierFormat) => (),
            other => panic!("expected UnsupportedCarrierFormat, got {other:?}"),
        }
        match Carrier::from_file(Path::new("extensionless")) {
            Err(StegocryptError::UnsupportedCarrierFormat) => (),
            other => panic!("expected UnsupportedCarrierFormat, got {other:?}"),
        }
    }

    #[test]
    fn broken_png_files_are_invalid_media() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png at all").unwrap();

        match Carrier::from_file(&path) {
            Err(StegocryptError::InvalidImageMedia) => (),
            other => panic!("expected InvalidImageMedia, got {other:?}"),
        }
    }

    #[test]
    fn png_round_trips_pixel_exact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("carrier.png");

        let mut carrier = Carrier::from_image(sample::gradient(16, 12));
        carrier.save_as(&path).unwrap();

        let reloaded = Carrier::from_file(&path).unwrap();
        assert_eq!(reloaded.image(), carrier.image());
    }
}
