//! Fixed-point anti-aliased line walker (Wu's algorithm).
//!
//! The walker steps along the major axis one pixel at a time and keeps a
//! 16-bit fraction of how far the ideal line has drifted along the minor
//! axis. Each step lights two pixels straddling the ideal line; the top
//! 8 bits of the fraction split the intensity between them.
//!
//! Weights are *fades toward the background*: `0` is the full line color and
//! `255` is the background. The two pixels of a step always sum to 255, and
//! both endpoints are emitted at weight 0 because the ideal line passes
//! exactly through their centers.
//!
//! Horizontal, vertical and 45° lines pass through every pixel center, so
//! [`WuLine::new`] returns `None` for them and [`draw_aa_line`] falls back to a
//! crisp line.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::colors::blend;
use crate::surface::Surface;

/// Fraction bits of the error accumulator.
const ERROR_BITS: u32 = 16;

/// Intensity resolution of the emitted weights.
const INTENSITY_BITS: u32 = 8;

/// Mask that flips a weight into its complement.
const WEIGHT_COMPLEMENT_MASK: u8 = u8::MAX;

/// A pixel to draw and how far to fade it toward the background.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeightedPixel {
    pub point: Point,
    pub weight: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Major {
    X,
    Y,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Start,
    Step,
    Paired(WeightedPixel),
    End,
    Done,
}

/// Iterator over the weighted pixels of one anti-aliased segment.
#[derive(Clone, Debug)]
pub struct WuLine {
    current: Point,
    start: Point,
    end: Point,
    x_dir: i32,
    major: Major,
    /// Interior steps still to emit.
    remaining: u32,
    error_acc: u16,
    error_adj: u16,
    phase: Phase,
}

impl WuLine {
    /// Plan a segment from `a` to `b`.
    ///
    /// Returns `None` for horizontal, vertical, 45° diagonal and single-point
    /// segments, which need no blending.
    pub fn new(
        a: Point,
        b: Point,
    ) -> Option<Self> {
        // Always walk top to bottom
        let (start, end) = if a.y > b.y { (b, a) } else { (a, b) };

        let delta_y = end.y - start.y;
        let delta_x = (end.x - start.x).abs();
        let x_dir = if end.x >= start.x { 1 } else { -1 };

        if delta_y == 0 || delta_x == 0 || delta_x == delta_y {
            return None;
        }

        let (major, major_len, minor_len) = if delta_y > delta_x {
            (Major::Y, delta_y, delta_x)
        } else {
            (Major::X, delta_x, delta_y)
        };

        // Truncating division keeps the walk from overshooting the endpoint
        let error_adj = ((u64::from(minor_len.unsigned_abs()) << ERROR_BITS) / u64::from(major_len.unsigned_abs())) as u16;

        Some(Self {
            current: start,
            start,
            end,
            x_dir,
            major,
            remaining: major_len.unsigned_abs() - 1,
            error_acc: 0,
            error_adj,
            phase: Phase::Start,
        })
    }

    /// The endpoint the walk starts from (the upper one).
    pub const fn start(&self) -> Point { self.start }

    /// The endpoint the walk finishes on (the lower one).
    pub const fn end(&self) -> Point { self.end }

    fn step(&mut self) -> (WeightedPixel, WeightedPixel) {
        let (acc, carried) = self.error_acc.overflowing_add(self.error_adj);
        self.error_acc = acc;
        let weight = (acc >> (ERROR_BITS - INTENSITY_BITS)) as u8;

        let neighbor = match self.major {
            Major::Y => {
                if carried {
                    self.current.x += self.x_dir;
                }
                self.current.y += 1;
                Point::new(self.current.x + self.x_dir, self.current.y)
            }
            Major::X => {
                if carried {
                    self.current.y += 1;
                }
                self.current.x += self.x_dir;
                Point::new(self.current.x, self.current.y + 1)
            }
        };

        (
            WeightedPixel {
                point: self.current,
                weight,
            },
            WeightedPixel {
                point: neighbor,
                weight: weight ^ WEIGHT_COMPLEMENT_MASK,
            },
        )
    }
}

impl Iterator for WuLine {
    type Item = WeightedPixel;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Start => {
                self.phase = if self.remaining > 0 { Phase::Step } else { Phase::End };
                Some(WeightedPixel {
                    point: self.start,
                    weight: 0,
                })
            }
            Phase::Step => {
                let (primary, paired) = self.step();
                self.remaining -= 1;
                self.phase = Phase::Paired(paired);
                Some(primary)
            }
            Phase::Paired(pixel) => {
                self.phase = if self.remaining > 0 { Phase::Step } else { Phase::End };
                Some(pixel)
            }
            Phase::End => {
                self.phase = Phase::Done;
                Some(WeightedPixel {
                    point: self.end,
                    weight: 0,
                })
            }
            Phase::Done => None,
        }
    }
}

/// Draw an anti-aliased segment, blending intermediate pixels from `line`
/// toward `background`.
///
/// Every emitted pixel lies inside the bounding box of `a` and `b`.
pub fn draw_aa_line<S: Surface>(
    surface: &mut S,
    a: Point,
    b: Point,
    line: Rgb888,
    background: Rgb888,
) -> Result<(), S::Error> {
    match WuLine::new(a, b) {
        Some(walker) => {
            for pixel in walker {
                let color = if pixel.weight == 0 { line } else { blend(line, background, pixel.weight) };
                surface.draw_pixel(pixel.point, color)?;
            }
            Ok(())
        }
        None => surface.draw_line(a, b, line),
    }
}

// =============================================================================
// Tests
// =============================================================================
