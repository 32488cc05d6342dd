use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::RgbaImage;
use std::fs;
use std::path::Path;

/// Save RGBA data as PNG, creating the parent directory and replacing any
/// existing file.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut output = fs::File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    let encoder = PngEncoder::new(&mut output);

    image
        .write_with_encoder(encoder)
        .context("Failed to encode PNG")?;

    Ok(())
}
