use anyhow::{bail, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resample filter used for every resize; icons always get the highest quality.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Resize to exactly `size` x `size`, ignoring the input aspect ratio.
pub fn resize_square(image: &RgbaImage, size: u32) -> Result<RgbaImage> {
    if size == 0 {
        bail!("Target size must be >= 1");
    }
    if image.width() == 0 || image.height() == 0 {
        bail!(
            "Cannot resize an empty {}x{} image",
            image.width(),
            image.height()
        );
    }

    Ok(imageops::resize(image, size, size, RESIZE_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_resize_any_aspect_to_square() {
        for (w, h) in [(100, 100), (70, 30), (13, 200), (1, 1)] {
            let img = RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255]));
            let out = resize_square(&img, 48).unwrap();
            assert_eq!(out.dimensions(), (48, 48));
        }
    }

    #[test]
    fn test_resize_preserves_flat_color() {
        let img = RgbaImage::from_pixel(96, 96, Rgba([200, 100, 50, 255]));
        let out = resize_square(&img, 48).unwrap();
        assert_eq!(out.get_pixel(24, 24), &Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_resize_rejects_empty() {
        let img = RgbaImage::new(0, 10);
        assert!(resize_square(&img, 48).is_err());
        let img = RgbaImage::new(10, 10);
        assert!(resize_square(&img, 0).is_err());
    }
}
