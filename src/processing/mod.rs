pub mod crop;
pub mod mask;
pub mod resize;
pub mod split;
