use std::path::Path;

use anyhow::{bail, Context, Result};
use image::RgbaImage;

use crate::pipeline;
use crate::types::{CropMargin, PipelineConfig, Preset, RunReport};

pub struct IconProcessor {
    config: PipelineConfig,
}

impl IconProcessor {
    pub fn new() -> Self {
        IconProcessor {
            config: PipelineConfig::default(),
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        IconProcessor {
            config: preset.config(),
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.config.size = Some(size);
        self
    }

    pub fn without_resize(mut self) -> Self {
        self.config.size = None;
        self
    }

    pub fn with_crop_ratio(mut self, ratio: f32) -> Self {
        self.config.crop_ratio = Some(ratio);
        self
    }

    pub fn with_crop_margin(mut self, margin: CropMargin) -> Self {
        self.config.crop_margin = margin;
        self
    }

    pub fn without_crop(mut self) -> Self {
        self.config.crop_ratio = None;
        self
    }

    pub fn with_circle_mask(mut self) -> Self {
        self.config.circle_mask = true;
        self
    }

    pub fn without_mask(mut self) -> Self {
        self.config.circle_mask = false;
        self
    }

    pub fn with_soften_radius(mut self, radius: f32) -> Self {
        self.config.soften_radius = radius.max(0.0);
        self
    }

    pub fn with_mask_padding(mut self, padding: u32) -> Self {
        self.config.mask_padding = padding;
        self
    }

    pub fn with_two_pass(mut self, enabled: bool) -> Self {
        self.config.two_pass = enabled;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Reject settings the pipeline can never satisfy before touching any file.
    pub fn validate(&self) -> Result<()> {
        if let Some(ratio) = self.config.crop_ratio {
            if !(ratio > 0.0 && ratio <= 1.0) {
                bail!("Crop ratio must be in (0, 1], got {}", ratio);
            }
        }
        if self.config.size == Some(0) {
            bail!("Size must be >= 1");
        }
        if !self.config.soften_radius.is_finite() {
            bail!("Soften radius must be a finite number");
        }
        Ok(())
    }

    /// Process one in-memory icon without writing to disk.
    pub fn process(&self, image: &RgbaImage) -> Result<RgbaImage> {
        self.validate()?;
        pipeline::process_icon(image, &self.config)
    }

    /// Split a combined source image and write the three icons to `out_dir`.
    pub fn process_source<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        out_dir: Q,
    ) -> Result<RunReport> {
        self.validate()?;
        pipeline::process_source(source.as_ref(), out_dir.as_ref(), &self.config)
            .context("Icon processing failed")
    }

    /// Process `icon_*.png` files from `in_dir` into `out_dir`.
    pub fn process_directory<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        in_dir: P,
        out_dir: Q,
    ) -> Result<RunReport> {
        self.validate()?;
        pipeline::process_directory(in_dir.as_ref(), out_dir.as_ref(), &self.config)
            .context("Icon processing failed")
    }
}

impl Default for IconProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_builder_overrides_preset() {
        let processor = IconProcessor::from_preset(Preset::Process)
            .with_size(32)
            .with_crop_ratio(0.5)
            .with_two_pass(false)
            .with_crop_margin(CropMargin::Uniform)
            .without_mask();
        let config = processor.config();
        assert_eq!(config.size, Some(32));
        assert_eq!(config.crop_ratio, Some(0.5));
        assert_eq!(config.crop_margin, CropMargin::Uniform);
        assert!(!config.two_pass);
        assert!(!config.circle_mask);
        assert_eq!(config.mask_padding, 2);
    }

    #[test]
    fn test_negative_soften_clamps_to_zero() {
        let processor = IconProcessor::new().with_soften_radius(-3.0);
        assert_eq!(processor.config().soften_radius, 0.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(IconProcessor::new().with_crop_ratio(0.0).validate().is_err());
        assert!(IconProcessor::new().with_crop_ratio(1.01).validate().is_err());
        assert!(IconProcessor::new().with_size(0).validate().is_err());
        assert!(IconProcessor::new().with_crop_ratio(1.0).validate().is_ok());
    }

    #[test]
    fn test_process_in_memory() {
        let img = RgbaImage::from_pixel(120, 120, Rgba([5, 5, 5, 255]));
        let out = IconProcessor::new()
            .with_size(16)
            .with_circle_mask()
            .process(&img)
            .unwrap();
        assert_eq!(out.dimensions(), (16, 16));
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(8, 8)[3], 255);
    }

    #[test]
    fn test_invalid_config_touches_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");
        let result = IconProcessor::new()
            .with_size(0)
            .process_directory(dir.path(), &out_dir);
        assert!(result.is_err());
        assert!(!out_dir.exists());
    }
}
