use image::{imageops, RgbaImage};

use crate::types::IconSet;

/// Split a combined image into three vertical slices, left to right.
///
/// Each slice is `width / 3` wide except the last, which absorbs the
/// remainder. Widths below 3 yield zero-width slices rather than an error.
pub fn split_thirds(image: &RgbaImage) -> IconSet<RgbaImage> {
    let (width, height) = image.dimensions();
    let part = width / 3;

    let slice = |x: u32, w: u32| imageops::crop_imm(image, x, 0, w, height).to_image();

    IconSet::new(
        slice(0, part),
        slice(part, part),
        slice(part * 2, width - part * 2),
    )
}
