//! In-memory display used by the unit tests.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::BLACK;

/// Framebuffer that records how many primitive calls reached it.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
    /// Number of `draw_iter`/`fill_solid` calls since the last reset.
    pub calls: usize,
}

impl Canvas {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; (width * height) as usize],
            calls: 0,
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb888 {
        self.pixels[self.index(x, y).expect("pixel outside canvas")]
    }

    /// Number of pixels currently holding `color`.
    pub fn count(
        &self,
        color: Rgb888,
    ) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Columns in row `y` holding `color`, left to right.
    pub fn columns_with(
        &self,
        y: i32,
        color: Rgb888,
    ) -> Vec<i32> {
        (0..self.width as i32).filter(|&x| self.pixel(x, y) == color).collect()
    }

    /// Rows in column `x` holding `color`, top to bottom.
    pub fn rows_with(
        &self,
        x: i32,
        color: Rgb888,
    ) -> Vec<i32> {
        (0..self.height as i32).filter(|&y| self.pixel(x, y) == color).collect()
    }

    pub fn reset_calls(&mut self) { self.calls = 0; }

    fn index(
        &self,
        x: i32,
        y: i32,
    ) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.calls += 1;
        for Pixel(p, color) in pixels {
            if let Some(i) = self.index(p.x, p.y) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.calls += 1;
        for p in area.points() {
            if let Some(i) = self.index(p.x, p.y) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
