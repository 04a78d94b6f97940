pub mod dot;
pub mod plotter;

use thiserror::Error;

pub use crate::picture::Picture;
pub use plotter::{PlotConfig, Plotter};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match a {xres}x{yres} picture")]
    BufferSize { xres: usize, yres: usize },
}
