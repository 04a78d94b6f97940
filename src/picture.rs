use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::render::RenderError;

pub type Color = (usize, usize, usize);

/// An RGB raster, row-major with three bytes per pixel and (0, 0) at the top-left.
pub struct Picture {
    pub xres: usize,
    pub yres: usize,
    pub data: Vec<u8>,
    background: Color,
}

impl Picture {
    pub fn new(xres: usize, yres: usize, background: &Color) -> Self {
        let mut picture = Self {
            xres,
            yres,
            data: vec![0; xres * yres * 3],
            background: *background,
        };
        picture.clear();
        picture
    }

    pub fn clear(&mut self) {
        let (r, g, b) = to_rgb(&self.background);

        for pixel in self.data.chunks_mut(3) {
            pixel.copy_from_slice(&[r, g, b]);
        }
    }

    /// Sets one pixel; coordinates outside the canvas are ignored.
    pub fn plot(&mut self, x: isize, y: isize, color: &Color) {
        if x < 0 || y < 0 || x as usize >= self.xres || y as usize >= self.yres {
            return;
        }

        let i = (y as usize * self.xres + x as usize) * 3;
        let (r, g, b) = to_rgb(color);
        self.data[i..i + 3].copy_from_slice(&[r, g, b]);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<(u8, u8, u8)> {
        if x >= self.xres || y >= self.yres {
            return None;
        }

        let i = (y * self.xres + x) * 3;
        Some((self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    pub fn save_as_file(&self, file_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let image = RgbImage::from_raw(self.xres as u32, self.yres as u32, self.data.clone())
            .ok_or(RenderError::BufferSize { xres: self.xres, yres: self.yres })?;

        image.save_with_format(file_path, ImageFormat::Png)?;

        Ok(())
    }
}

fn to_rgb(color: &Color) -> (u8, u8, u8) {
    (color.0.min(255) as u8, color.1.min(255) as u8, color.2.min(255) as u8)
}
