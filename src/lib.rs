pub mod converter;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use converter::IconProcessor;
pub use types::{CropMargin, IconRole, IconSet, InputMode, PipelineConfig, Preset, RunReport};
