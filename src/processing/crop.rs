use anyhow::{bail, Result};
use image::{imageops, RgbaImage};

use crate::types::CropMargin;

/// Margin removed from each side of an axis of length `len` when keeping `ratio`.
pub fn crop_margin(len: u32, ratio: f32) -> u32 {
    (len as f64 * (1.0 - ratio as f64) / 2.0) as u32
}

/// Keep the centered `ratio` of the image, trimming a margin from every side.
///
/// With `CropMargin::PerAxis` width and height are trimmed independently, so a
/// non-square input keeps its aspect. With `CropMargin::Uniform` the margin
/// derived from the width is removed from all four sides, and an image too
/// short for that margin is an error. `ratio == 1.0` returns an identical copy.
pub fn crop_center(image: &RgbaImage, ratio: f32, margin: CropMargin) -> Result<RgbaImage> {
    if !(ratio > 0.0 && ratio <= 1.0) {
        bail!("Crop ratio must be in (0, 1], got {}", ratio);
    }

    let (width, height) = image.dimensions();
    let margin_w = crop_margin(width, ratio);
    let margin_h = match margin {
        CropMargin::PerAxis => crop_margin(height, ratio),
        CropMargin::Uniform => margin_w,
    };

    if height < margin_h * 2 {
        bail!(
            "Image height {} is smaller than the {}px crop margin on both sides",
            height,
            margin_h
        );
    }

    Ok(imageops::crop_imm(
        image,
        margin_w,
        margin_h,
        width - margin_w * 2,
        height - margin_h * 2,
    )
    .to_image())
}
