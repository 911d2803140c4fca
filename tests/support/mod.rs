//! Framebuffer shared by the integration tests.

#![allow(dead_code)]

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Color the framebuffer starts with, never used by the renderers.
pub const UNTOUCHED: Rgb888 = Rgb888::new(1, 2, 3);

pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
    /// Primitive calls since the last reset.
    pub calls: usize,
}

impl Framebuffer {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            width,
            height,
            pixels: vec![UNTOUCHED; (width * height) as usize],
            calls: 0,
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb888 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn pixels(&self) -> &[Rgb888] { &self.pixels }

    /// Columns in row `y` holding `color`.
    pub fn columns_with(
        &self,
        y: i32,
        color: Rgb888,
    ) -> Vec<i32> {
        (0..self.width as i32).filter(|&x| self.pixel(x, y) == color).collect()
    }

    /// Points outside `keep` whose color differs from `other`.
    pub fn changed_outside(
        &self,
        other: &Self,
        keep: &Rectangle,
    ) -> Vec<Point> {
        (0..self.height as i32)
            .flat_map(|y| (0..self.width as i32).map(move |x| Point::new(x, y)))
            .filter(|&p| !keep.contains(p) && self.pixel(p.x, p.y) != other.pixel(p.x, p.y))
            .collect()
    }

    fn set(
        &mut self,
        p: Point,
        color: Rgb888,
    ) {
        if p.x >= 0 && p.y >= 0 && p.x < self.width as i32 && p.y < self.height as i32 {
            self.pixels[p.y as usize * self.width as usize + p.x as usize] = color;
        }
    }
}

impl Clone for Framebuffer {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
            calls: 0,
        }
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for Framebuffer {
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
            self.set(p, color);
        }
        Ok(())
    }
}
