//! Sample carrier generation for tests and demos.

use image::RgbImage;

/// A gradient RGB image: red grows left to right, green top to bottom,
/// blue along the diagonal.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    let (w, h) = (u64::from(width.max(1)), u64::from(height.max(1)));
    RgbImage::from_fn(width, height, |x, y| {
        let (x, y) = (u64::from(x), u64::from(y));
        image::Rgb([
            (255 * x / w) as u8,
            (255 * y / h) as u8,
            (255 * (x + y) / (w + h)) as u8,
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_has_the_requested_dimensions() {
        let img = gradient(20, 10);

        assert_eq!(img.dimensions(), (20, 10));
    }

    #[test]
    fn gradient_varies_across_the_image() {
        let img = gradient(100, 100);

        assert_ne!(img.get_pixel(0, 0), img.get_pixel(99, 99));
    }
}
