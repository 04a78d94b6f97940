use std::path::PathBuf;

use tracing::{info, trace, warn};

use crate::{
    constants::{
        DEFAULT_BACKGROUND_COLOR, DEFAULT_FOREGROUND_COLOR, DEFAULT_OUTPUT_PATH, DEFAULT_PICTURE_DIMENSIONS, DEFAULT_POINT_RADIUS,
    },
    interpreter::PointSink,
    picture::{Color, Picture},
};
use super::{dot::draw_dot, RenderError};

#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub width: usize,
    pub height: usize,
    pub point_radius: usize,
    pub background: Color,
    pub foreground: Color,
    pub output: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PICTURE_DIMENSIONS.0,
            height: DEFAULT_PICTURE_DIMENSIONS.1,
            point_radius: DEFAULT_POINT_RADIUS,
            background: DEFAULT_BACKGROUND_COLOR,
            foreground: DEFAULT_FOREGROUND_COLOR,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Draws every emitted point as a dot and writes the picture as a PNG on finish.
pub struct Plotter {
    picture: Picture,
    config: PlotConfig,
    drawn: usize,
    skipped: usize,
}

impl Plotter {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            picture: Picture::new(config.width, config.height, &config.background),
            config,
            drawn: 0,
            skipped: 0,
        }
    }

    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl PointSink for Plotter {
    fn draw_point(&mut self, x: f64, y: f64) {
        if draw_dot(&mut self.picture, x, y, self.config.point_radius, &self.config.foreground) {
            self.drawn += 1;
        } else {
            trace!(x, y, "point skipped");
            self.skipped += 1;
        }
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        if self.skipped > 0 {
            warn!(skipped = self.skipped, "some points were off the canvas or not finite");
        }

        self.picture.save_as_file(&self.config.output)?;
        info!(points = self.drawn, "{} created.", self.config.output.display());

        Ok(())
    }
}
