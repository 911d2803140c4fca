//! The drawing capability the renderers are generic over.
//!
//! Renderers only ever need four primitives. Each one takes its color as an
//! argument, so several renderers can share one display without any hidden
//! "current color" state leaking between them.
//!
//! Every [`DrawTarget`] whose color type converts from [`Rgb888`] is a
//! [`Surface`]: panel drivers, `embedded-graphics-simulator` displays and
//! in-memory framebuffers all work unchanged.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};

/// Pixel-level drawing primitives.
///
/// Rectangles are given by two opposite corners in any order; both corners
/// are inclusive.
pub trait Surface {
    /// Error reported by the underlying display.
    type Error;

    /// Set a single pixel.
    fn draw_pixel(
        &mut self,
        p: Point,
        color: Rgb888,
    ) -> Result<(), Self::Error>;

    /// Draw a 1px line including both endpoints.
    fn draw_line(
        &mut self,
        a: Point,
        b: Point,
        color: Rgb888,
    ) -> Result<(), Self::Error>;

    /// Draw a 1px rectangle outline.
    fn draw_rect(
        &mut self,
        a: Point,
        b: Point,
        color: Rgb888,
    ) -> Result<(), Self::Error>;

    /// Fill a rectangle.
    fn fill_rect(
        &mut self,
        a: Point,
        b: Point,
        color: Rgb888,
    ) -> Result<(), Self::Error>;
}

impl<D> Surface for D
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    type Error = D::Error;

    fn draw_pixel(
        &mut self,
        p: Point,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        Pixel(p, color.into()).draw(self)
    }

    fn draw_line(
        &mut self,
        a: Point,
        b: Point,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        Line::new(a, b)
            .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
            .draw(self)
    }

    fn draw_rect(
        &mut self,
        a: Point,
        b: Point,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(color.into())
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        Rectangle::with_corners(a, b).into_styled(style).draw(self)
    }

    fn fill_rect(
        &mut self,
        a: Point,
        b: Point,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        self.fill_solid(&Rectangle::with_corners(a, b), color.into())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, RED, WHITE};
    use crate::test_support::Canvas;

    #[test]
    fn test_fill_rect_corners_any_order() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_rect(Point::new(5, 6), Point::new(2, 3), RED).unwrap();
        assert_eq!(canvas.count(RED), 4 * 4);
        assert_eq!(canvas.pixel(2, 3), RED);
        assert_eq!(canvas.pixel(5, 6), RED);
        assert_eq!(canvas.pixel(6, 6), BLACK);
    }

    #[test]
    fn test_draw_rect_is_inclusive_outline() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_rect(Point::new(1, 1), Point::new(4, 3), WHITE).unwrap();
        // 4x3 outline: 2*4 + 2*1 pixels
        assert_eq!(canvas.count(WHITE), 10);
        assert_eq!(canvas.pixel(4, 3), WHITE);
        assert_eq!(canvas.pixel(2, 2), BLACK);
    }

    #[test]
    fn test_draw_line_includes_endpoints() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_line(Point::new(0, 0), Point::new(5, 0), RED).unwrap();
        assert_eq!(canvas.count(RED), 6);
        canvas.draw_pixel(Point::new(9, 9), WHITE).unwrap();
        assert_eq!(canvas.pixel(9, 9), WHITE);
    }
}
