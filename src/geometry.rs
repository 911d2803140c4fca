//! Plot geometry: pixel bounds, value domains and the transforms between them.
//!
//! # Coordinate Conventions
//!
//! - Pixel rows grow downward, so the domain maximum `yf` maps to `min_y`.
//! - Every projection truncates toward zero; callers rely on this to keep the
//!   output identical from frame to frame for equal inputs.
//! - Time is wrapped into `[x0, x0 + span)` before projecting so the time
//!   axis repeats forever without the pixel math growing unbounded.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
#[cfg(not(test))]
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::{MIN_PLOT_EDGE, PLOT_INSET, PLOT_SPAN_SHRINK};
use crate::error::{ConfigError, ConfigResult, check_domain};

// =============================================================================
// Domain
// =============================================================================

/// Data-space window of a strip chart.
///
/// `x0..xf` is the time window shown across the plot width (one sweep),
/// `y0..yf` the value range shown bottom to top.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Domain {
    pub x0: f32,
    pub xf: f32,
    pub y0: f32,
    pub yf: f32,
}

impl Domain {
    pub const fn new(
        x0: f32,
        xf: f32,
        y0: f32,
        yf: f32,
    ) -> Self {
        Self { x0, xf, y0, yf }
    }

    /// Length of one sweep in time units.
    #[inline]
    pub fn x_span(&self) -> f32 { self.xf - self.x0 }

    /// Height of the value range.
    #[inline]
    pub fn y_span(&self) -> f32 { self.yf - self.y0 }
}

// =============================================================================
// Plot Area
// =============================================================================

/// Pixel rectangle of a strip chart together with its data domain.
///
/// The outermost pixel ring belongs to the axis outline; samples are drawn in
/// the interior `[min_x, max_x] x [min_y, max_y]`.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlotArea {
    bounds: Rectangle,
    domain: Domain,
    min: Point,
    max: Point,
    /// Pixel span (`max - min`) along each axis.
    span: Point,
}

impl PlotArea {
    /// Validate and derive the drawable bounds.
    ///
    /// Fails when either domain span is empty or the rectangle is too small to
    /// leave at least one drawable pixel span inside the outline.
    pub fn new(
        bounds: Rectangle,
        domain: Domain,
    ) -> ConfigResult<Self> {
        check_domain(domain.x0, domain.xf)?;
        check_domain(domain.y0, domain.yf)?;

        let Size { width, height } = bounds.size;
        if width < MIN_PLOT_EDGE || height < MIN_PLOT_EDGE {
            return Err(ConfigError::AreaTooSmall { width, height });
        }

        let min = bounds.top_left + Point::new(PLOT_INSET, PLOT_INSET);
        let span = Point::new((width - PLOT_SPAN_SHRINK) as i32, (height - PLOT_SPAN_SHRINK) as i32);

        Ok(Self {
            bounds,
            domain,
            min,
            max: min + span,
            span,
        })
    }

    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    #[inline]
    pub const fn domain(&self) -> Domain { self.domain }

    #[inline]
    pub const fn min_x(&self) -> i32 { self.min.x }

    #[inline]
    pub const fn max_x(&self) -> i32 { self.max.x }

    #[inline]
    pub const fn min_y(&self) -> i32 { self.min.y }

    #[inline]
    pub const fn max_y(&self) -> i32 { self.max.y }

    /// Drawable width in pixels minus one (`max_x - min_x`).
    #[inline]
    pub const fn dx(&self) -> i32 { self.span.x }

    /// Drawable height in pixels minus one (`max_y - min_y`).
    #[inline]
    pub const fn dy(&self) -> i32 { self.span.y }

    /// Top-left and bottom-right corners of the plot interior, including the
    /// one-pixel gap kept free of samples.
    pub fn interior(&self) -> (Point, Point) {
        let br = self.bounds.top_left + self.bounds.size - Point::new(2, 2);
        (self.bounds.top_left + Point::new(1, 1), br)
    }

    /// Corners of the axis outline.
    pub fn outline(&self) -> (Point, Point) {
        let br = self.bounds.top_left + self.bounds.size - Point::new(1, 1);
        (self.bounds.top_left, br)
    }

    /// Reduce `time` into `[x0, x0 + span)`.
    pub fn wrap_time(
        &self,
        time: f32,
    ) -> f32 {
        let span = self.domain.x_span();
        let rel = time - self.domain.x0;
        let mut wrapped = rel - (rel / span).floor() * span;
        // floor() can leave a rounding residue exactly on the span edge
        if !(0.0..span).contains(&wrapped) {
            wrapped = 0.0;
        }
        self.domain.x0 + wrapped
    }

    /// Column of an already wrapped time, clamped to `max_x`.
    pub fn column(
        &self,
        wrapped_time: f32,
    ) -> i32 {
        let offset = ((wrapped_time - self.domain.x0) / self.domain.x_span() * self.span.x as f32) as i32;
        self.min.x.saturating_add(offset).min(self.max.x)
    }

    /// Earliest wrapped time that projects onto column `x`.
    pub fn column_time(
        &self,
        x: i32,
    ) -> f32 {
        self.domain.x0 + (x - self.min.x) as f32 * self.domain.x_span() / self.span.x as f32
    }

    /// Value at the lower edge of row `y`: values above it project to `y` or
    /// a row further up.
    pub fn row_value(
        &self,
        y: i32,
    ) -> f32 {
        self.domain.yf - (y - self.min.y) as f32 * self.domain.y_span() / self.span.y as f32
    }

    /// Row of `value` without clamping. Values above `yf` land above `min_y`.
    pub fn raw_row(
        &self,
        value: f32,
    ) -> i32 {
        let offset = ((self.domain.yf - value) / self.domain.y_span() * self.span.y as f32) as i32;
        self.min.y.saturating_add(offset)
    }

    /// Clamp a row into the drawable range.
    #[inline]
    pub fn clamp_row(
        &self,
        row: i32,
    ) -> i32 {
        row.clamp(self.min.y, self.max.y)
    }

    /// Row of `value`, clamped to the drawable range.
    #[inline]
    pub fn row(
        &self,
        value: f32,
    ) -> i32 {
        self.clamp_row(self.raw_row(value))
    }

    /// Row where the segment from `prev` to `(column, raw_row)` crosses the
    /// right edge when the sweep wraps around.
    ///
    /// The new point is treated as if it sat `column - min_x + 1` pixels past
    /// the right edge, so the two halves of the wrapped segment have the same
    /// slope. Integer math only; the result is clamped to the drawable rows.
    pub fn wrap_row(
        &self,
        prev: Point,
        column: i32,
        raw_row: i32,
    ) -> i32 {
        let to_edge = i64::from(self.max.x - prev.x);
        let rise = i64::from(raw_row) - i64::from(prev.y);
        // Run is `+ 1`, not `+ 2`: min_x sits one pixel past max_x, not two
        let run = to_edge + i64::from(column - self.min.x) + 1;
        let row = i64::from(prev.y) + to_edge * rise / run;
        row.clamp(i64::from(self.min.y), i64::from(self.max.y)) as i32
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Same geometry as the dashboard's first temperature plot.
    fn area() -> PlotArea {
        PlotArea::new(
            Rectangle::new(Point::new(50, 0), Size::new(271, 40)),
            Domain::new(0.0, 5.5, -1.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn test_derived_bounds() {
        let area = area();
        assert_eq!(area.min_x(), 51);
        assert_eq!(area.max_x(), 50 + 271 - 2);
        assert_eq!(area.dx(), 268);
        assert_eq!(area.min_y(), 1);
        assert_eq!(area.max_y(), 38);
        assert_eq!(area.dy(), 37);
        assert_eq!(area.max_x() - area.min_x(), area.dx());
    }

    #[test]
    fn test_rejects_empty_domain() {
        let rect = Rectangle::new(Point::zero(), Size::new(100, 40));
        assert!(PlotArea::new(rect, Domain::new(1.0, 1.0, 0.0, 1.0)).is_err());
        assert!(PlotArea::new(rect, Domain::new(0.0, 1.0, 2.0, -2.0)).is_err());
    }

    #[test]
    fn test_rejects_tiny_rectangle() {
        let result = PlotArea::new(Rectangle::new(Point::zero(), Size::new(3, 40)), Domain::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(result, Err(ConfigError::AreaTooSmall { width: 3, height: 40 }));
    }

    #[test]
    fn test_wrap_time() {
        let area = area();
        assert_eq!(area.wrap_time(0.0), 0.0);
        assert!((area.wrap_time(8.7) - 3.2).abs() < 1e-5);
        assert!((area.wrap_time(11.0) - 0.0).abs() < 1e-5);
        assert!((area.wrap_time(-1.0) - 4.5).abs() < 1e-5);
    }

    #[test]
    fn test_wrap_time_nonzero_origin() {
        let area = PlotArea::new(
            Rectangle::new(Point::zero(), Size::new(103, 20)),
            Domain::new(10.0, 20.0, 0.0, 1.0),
        )
        .unwrap();
        assert!((area.wrap_time(25.0) - 15.0).abs() < 1e-5);
        assert!((area.wrap_time(10.0) - 10.0).abs() < 1e-5);
        assert_eq!(area.column(15.0), area.min_x() + 50);
    }

    #[test]
    fn test_column_projection() {
        let area = area();
        assert_eq!(area.column(0.0), 51);
        // 1.0 / 5.5 * 268 = 48.7 -> 48
        assert_eq!(area.column(1.0), 51 + 48);
        assert_eq!(area.column(5.5), area.max_x());
        assert_eq!(area.column(100.0), area.max_x());
    }

    #[test]
    fn test_inverse_projections() {
        let area = area();
        for x in [area.min_x(), 100, area.max_x()] {
            assert_eq!(area.column(area.column_time(x) + 1e-4), x);
        }
        for y in [area.min_y() + 1, 20, area.max_y()] {
            assert_eq!(area.row(area.row_value(y) - 1e-4), y);
            assert_eq!(area.row(area.row_value(y) + 1e-4), y - 1);
        }
    }

    #[test]
    fn test_row_projection_and_clamp() {
        let area = area();
        assert_eq!(area.row(1.0), area.min_y());
        assert_eq!(area.row(-1.0), area.max_y());
        assert_eq!(area.row(0.0), 1 + 18);
        assert_eq!(area.row(5.0), area.min_y());
        assert_eq!(area.row(-5.0), area.max_y());
        assert!(area.raw_row(-5.0) > area.max_y());
        assert!(area.raw_row(f32::MAX) <= area.min_y());
    }

    #[test]
    fn test_wrap_row_continues_slope() {
        let area = area();
        // Flat line stays flat across the wrap
        assert_eq!(area.wrap_row(Point::new(300, 20), 60, 20), 20);
        // Rising 20 rows over 20 + 9 + 1 = 30 pixels, 20 of them before the edge
        let row = area.wrap_row(Point::new(area.max_x() - 20, 30), area.min_x() + 9, 10);
        assert_eq!(row, 30 - 20 * 20 / 30);
    }

    #[test]
    fn test_wrap_row_clamps_and_never_divides_by_zero() {
        let area = area();
        assert_eq!(area.wrap_row(Point::new(area.max_x(), 10), area.min_x(), 10), 10);
        let row = area.wrap_row(Point::new(area.min_x(), area.max_y()), area.min_x(), -10_000);
        assert_eq!(row, area.min_y());
    }
}
