use anyhow::{bail, Result};
use image::{imageops, GrayImage, Luma, Rgba, RgbaImage};

/// Build a circular mask for a `size` x `size` square.
///
/// Pixels whose center lies inside the circle of radius `size / 2 - padding`
/// are 255, all others 0. A positive `soften_radius` Gaussian-blurs the edge
/// with that sigma.
pub fn circle_mask(size: u32, padding: u32, soften_radius: f32) -> GrayImage {
    let center = size as f32 / 2.0;
    let radius = (center - padding as f32).max(0.0);
    let r2 = radius * radius;

    let mask = GrayImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if dx * dx + dy * dy <= r2 {
            Luma([255])
        } else {
            Luma([0])
        }
    });

    if soften_radius > 0.0 {
        imageops::blur(&mask, soften_radius)
    } else {
        mask
    }
}

/// Composite `image` onto a transparent canvas through `mask`.
///
/// Alpha becomes `src_alpha * mask / 255`; fully masked pixels are cleared.
/// Unlike a per-channel paste over transparent black, RGB is not scaled by the
/// mask, so soft edges fade out without darkening.
pub fn apply_mask(image: &RgbaImage, mask: &GrayImage) -> Result<RgbaImage> {
    if image.dimensions() != mask.dimensions() {
        bail!(
            "Mask is {}x{} but image is {}x{}",
            mask.width(),
            mask.height(),
            image.width(),
            image.height()
        );
    }

    Ok(RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let weight = mask.get_pixel(x, y)[0] as u32;
        if weight == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        let alpha = (a as u32 * weight + 127) / 255;
        Rgba([r, g, b, alpha as u8])
    }))
}

/// Circle-mask a square image with the given padding and edge softening.
pub fn mask_circle(image: &RgbaImage, padding: u32, soften_radius: f32) -> Result<RgbaImage> {
    if image.width() != image.height() {
        bail!(
            "Circular mask needs a square image, got {}x{}",
            image.width(),
            image.height()
        );
    }
    let mask = circle_mask(image.width(), padding, soften_radius);
    apply_mask(image, &mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outside_circle(x: u32, y: u32, size: u32) -> bool {
        let c = size as f32 / 2.0;
        let dx = x as f32 + 0.5 - c;
        let dy = y as f32 + 0.5 - c;
        dx * dx + dy * dy > c * c
    }

    #[test]
    fn test_hard_mask_corners_and_center() {
        let mask = circle_mask(48, 0, 0.0);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(47, 0)[0], 0);
        assert_eq!(mask.get_pixel(0, 47)[0], 0);
        assert_eq!(mask.get_pixel(47, 47)[0], 0);
        assert_eq!(mask.get_pixel(24, 24)[0], 255);
        // Edge midpoints sit inside the inscribed circle
        assert_eq!(mask.get_pixel(0, 24)[0], 255);
        assert_eq!(mask.get_pixel(24, 0)[0], 255);
    }

    #[test]
    fn test_padding_shrinks_circle() {
        let mask = circle_mask(96, 2, 0.0);
        assert_eq!(mask.get_pixel(0, 48)[0], 0);
        assert_eq!(mask.get_pixel(1, 48)[0], 0);
        assert_eq!(mask.get_pixel(2, 48)[0], 255);
    }

    #[test]
    fn test_softened_mask_has_gradient() {
        let hard = circle_mask(96, 2, 0.0);
        let soft = circle_mask(96, 2, 1.0);
        assert!(soft.get_pixel(48, 48)[0] >= 254);
        assert_eq!(soft.get_pixel(0, 0)[0], 0);
        let partial = soft.pixels().filter(|p| p[0] > 0 && p[0] < 255).count();
        let hard_partial = hard.pixels().filter(|p| p[0] > 0 && p[0] < 255).count();
        assert_eq!(hard_partial, 0);
        assert!(partial > 0);
    }

    #[test]
    fn test_apply_mask_clears_outside_keeps_center() {
        let size = 48;
        let img = RgbaImage::from_pixel(size, size, Rgba([90, 160, 220, 200]));
        let out = mask_circle(&img, 0, 0.0).unwrap();

        for (x, y, p) in out.enumerate_pixels() {
            if outside_circle(x, y, size) {
                assert_eq!(p[3], 0, "pixel ({}, {}) should be transparent", x, y);
            }
        }
        assert_eq!(out.get_pixel(24, 24), &Rgba([90, 160, 220, 200]));
    }

    #[test]
    fn test_apply_mask_scales_alpha() {
        let img = RgbaImage::from_pixel(2, 1, Rgba([10, 10, 10, 255]));
        let mask = GrayImage::from_raw(2, 1, vec![128, 0]).unwrap();
        let out = apply_mask(&img, &mask).unwrap();
        assert_eq!(out.get_pixel(0, 0), &Rgba([10, 10, 10, 128]));
        assert_eq!(out.get_pixel(1, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_apply_mask_keeps_color_at_soft_edge() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 255]));
        let mask = GrayImage::from_raw(1, 1, vec![128]).unwrap();
        let out = apply_mask(&img, &mask).unwrap();
        assert_eq!(out.get_pixel(0, 0), &Rgba([200, 100, 50, 128]));
    }

    #[test]
    fn test_mask_dimension_checks() {
        let img = RgbaImage::new(10, 10);
        let mask = GrayImage::new(8, 8);
        assert!(apply_mask(&img, &mask).is_err());
        assert!(mask_circle(&RgbaImage::new(10, 8), 0, 0.0).is_err());
    }
}
