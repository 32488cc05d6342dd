use std::path::PathBuf;

/// The three icon states, in the left-to-right order they appear in a
/// combined source image.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum IconRole {
    Idle,
    Recording,
    Processing,
}

impl IconRole {
    pub const ALL: [IconRole; 3] = [IconRole::Idle, IconRole::Recording, IconRole::Processing];

    pub fn file_name(self) -> &'static str {
        match self {
            IconRole::Idle => "icon_idle.png",
            IconRole::Recording => "icon_recording.png",
            IconRole::Processing => "icon_processing.png",
        }
    }

    fn index(self) -> usize {
        match self {
            IconRole::Idle => 0,
            IconRole::Recording => 1,
            IconRole::Processing => 2,
        }
    }
}

/// Fixed ordered triple, one value per `IconRole`.
#[derive(Clone, Debug, PartialEq)]
pub struct IconSet<T> {
    items: [T; 3],
}

impl<T> IconSet<T> {
    pub fn new(idle: T, recording: T, processing: T) -> Self {
        IconSet {
            items: [idle, recording, processing],
        }
    }

    pub fn get(&self, role: IconRole) -> &T {
        &self.items[role.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (IconRole, &T)> {
        IconRole::ALL.into_iter().zip(self.items.iter())
    }

    pub fn into_roles(self) -> impl Iterator<Item = (IconRole, T)> {
        IconRole::ALL.into_iter().zip(self.items)
    }
}

/// How the center crop sizes its vertical margin.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CropMargin {
    /// Each axis loses its own share: `w*(1-r)/2` horizontally, `h*(1-r)/2` vertically.
    PerAxis,
    /// The width-derived margin is removed from all four sides.
    Uniform,
}

impl CropMargin {
    pub fn name(self) -> &'static str {
        match self {
            CropMargin::PerAxis => "per-axis",
            CropMargin::Uniform => "uniform",
        }
    }

    pub fn from_name(name: &str) -> Option<CropMargin> {
        [CropMargin::PerAxis, CropMargin::Uniform]
            .into_iter()
            .find(|m| m.name() == name)
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PipelineConfig {
    /// Fraction of width/height kept by the center crop (None = no crop).
    pub crop_ratio: Option<f32>,
    pub crop_margin: CropMargin,
    /// Final square edge length in pixels (None = keep the input size).
    pub size: Option<u32>,
    pub circle_mask: bool,
    /// Gaussian sigma applied to the mask edge (0 = hard edge).
    pub soften_radius: f32,
    /// Inset of the circle from the square's border, at working resolution.
    pub mask_padding: u32,
    /// Resize to 2x, mask, then downscale to the final size.
    pub two_pass: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            crop_ratio: None,
            crop_margin: CropMargin::PerAxis,
            size: Some(48),
            circle_mask: false,
            soften_radius: 0.0,
            mask_padding: 0,
            two_pass: false,
        }
    }
}

/// Where a preset reads its icons from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputMode {
    /// One combined image holding all three icons side by side.
    Source,
    /// A directory holding the three icon files by name.
    Directory,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Preset {
    Split,
    Resize,
    Circle,
    CropCircle,
    Process,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Split,
        Preset::Resize,
        Preset::Circle,
        Preset::CropCircle,
        Preset::Process,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Split => "split",
            Preset::Resize => "resize",
            Preset::Circle => "circle",
            Preset::CropCircle => "crop-circle",
            Preset::Process => "process",
        }
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn input_mode(self) -> InputMode {
        match self {
            Preset::Split | Preset::Process => InputMode::Source,
            Preset::Resize | Preset::Circle | Preset::CropCircle => InputMode::Directory,
        }
    }

    pub fn config(self) -> PipelineConfig {
        let base = PipelineConfig::default();
        match self {
            Preset::Split => PipelineConfig { size: None, ..base },
            Preset::Resize => base,
            Preset::Circle => PipelineConfig {
                circle_mask: true,
                ..base
            },
            Preset::CropCircle => PipelineConfig {
                crop_ratio: Some(0.65),
                crop_margin: CropMargin::Uniform,
                circle_mask: true,
                ..base
            },
            Preset::Process => PipelineConfig {
                crop_ratio: Some(0.70),
                circle_mask: true,
                soften_radius: 1.0,
                mask_padding: 2,
                two_pass: true,
                ..base
            },
        }
    }
}

/// Outcome of one pipeline run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
    /// Expected inputs that were absent and skipped.
    pub missing: Vec<PathBuf>,
}
