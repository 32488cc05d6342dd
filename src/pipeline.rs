use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::input;
use crate::output;
use crate::processing::{crop, mask, resize, split};
use crate::types::{IconRole, PipelineConfig, RunReport};

/// Run crop, resize and mask on a single icon.
pub fn process_icon(image: &RgbaImage, config: &PipelineConfig) -> Result<RgbaImage> {
    let mut img = match config.crop_ratio {
        Some(ratio) => crop::crop_center(image, ratio, config.crop_margin)?,
        None => image.clone(),
    };

    // Two-pass works at double resolution until the final downscale
    let working_size = config
        .size
        .map(|s| if config.two_pass { s.saturating_mul(2) } else { s });

    if let Some(size) = working_size {
        img = resize::resize_square(&img, size)?;
    }

    if config.circle_mask {
        img = mask::mask_circle(&img, config.mask_padding, config.soften_radius)?;
    }

    if let (Some(size), true) = (config.size, config.two_pass) {
        img = resize::resize_square(&img, size)?;
    }

    log::debug!("Processed icon to {}x{}", img.width(), img.height());
    Ok(img)
}

/// Progress label for one icon: plain resizes report as such.
pub fn progress_verb(config: &PipelineConfig) -> &'static str {
    if config.crop_ratio.is_none() && !config.circle_mask && config.size.is_some() {
        "Resized"
    } else {
        "Processed"
    }
}

/// Split a combined source image into the three icons and write each one.
pub fn process_source(
    source: &Path,
    out_dir: &Path,
    config: &PipelineConfig,
) -> Result<RunReport> {
    let img = input::load_image(source)?;
    log::info!(
        "Splitting {} ({}x{}) into 3 icons",
        source.display(),
        img.width(),
        img.height()
    );

    let mut report = RunReport::default();

    for (role, part) in split::split_thirds(&img).into_roles() {
        let icon = process_icon(&part, config)
            .with_context(|| format!("Failed to process {}", role.file_name()))?;
        let path = out_dir.join(role.file_name());
        output::save_png(&icon, &path)?;
        log::info!("Saved: {} ({}x{})", path.display(), icon.width(), icon.height());
        report.written.push(path);
    }

    Ok(report)
}

/// Process the three named icons found in `in_dir`.
///
/// Missing files are logged and skipped; a file that exists but cannot be
/// decoded aborts the run.
pub fn process_directory(
    in_dir: &Path,
    out_dir: &Path,
    config: &PipelineConfig,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    for role in IconRole::ALL {
        let in_path = in_dir.join(role.file_name());
        if !in_path.exists() {
            log::warn!("Not found: {}", in_path.display());
            report.missing.push(in_path);
            continue;
        }

        let img = input::load_image(&in_path)?;
        let icon = process_icon(&img, config)
            .with_context(|| format!("Failed to process {}", in_path.display()))?;
        let out_path = out_dir.join(role.file_name());
        output::save_png(&icon, &out_path)?;
        log::info!(
            "{}: {} -> {}x{}",
            progress_verb(config),
            role.file_name(),
            icon.width(),
            icon.height()
        );
        report.written.push(out_path);
    }

    Ok(report)
}
