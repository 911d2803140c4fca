//! Dashed grid overlay for strip charts.
//!
//! Grids are drawn incrementally, only over the columns the sweep just
//! crossed, and always before the data segment so samples paint on top.
//!
//! # Dash Pattern
//!
//! Both directions use the same 2-on / 2-off pattern. Horizontal dashes are
//! keyed to the column offset from the plot's left edge, so the phase stays
//! continuous no matter how the sweep is split into updates or where it
//! wraps.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
#[cfg(not(test))]
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::{DASH_ON, DASH_PERIOD};
use crate::geometry::PlotArea;
use crate::surface::Surface;

/// Fraction of an interval tolerated when snapping grid values, so
/// accumulated float error never skips a line sitting on a domain edge.
const SNAP_EPSILON: f32 = 1e-4;

/// Horizontal grid lines anchored to multiples of `interval`.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct YGrid {
    pub interval: f32,
    /// First grid value at or above the domain origin.
    pub start: f32,
}

/// Grid configuration of one strip chart. `None` disables a direction.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridSpec {
    x_interval: Option<f32>,
    y: Option<YGrid>,
}

impl GridSpec {
    /// Both directions disabled.
    pub const fn disabled() -> Self { Self { x_interval: None, y: None } }

    #[inline]
    pub const fn x_interval(&self) -> Option<f32> { self.x_interval }

    #[inline]
    pub const fn y_grid(&self) -> Option<YGrid> { self.y }

    /// Set the vertical tick spacing in time units. Zero, negative or
    /// non-finite intervals disable the X grid.
    pub fn set_x_interval(
        &mut self,
        interval: f32,
    ) {
        self.x_interval = valid_interval(interval);
    }

    /// Set the horizontal line spacing in value units and anchor the first
    /// line to the smallest multiple of `interval` at or above `origin`.
    pub fn set_y_interval(
        &mut self,
        interval: f32,
        origin: f32,
    ) {
        self.y = valid_interval(interval).map(|interval| YGrid {
            interval,
            start: first_multiple_at_or_above(origin, interval),
        });
    }
}

fn valid_interval(interval: f32) -> Option<f32> {
    if interval.is_finite() && interval > 0.0 {
        Some(interval)
    } else {
        if interval != 0.0 {
            plot_warn!("grid interval {} rejected, grid disabled", interval);
        }
        None
    }
}

/// Smallest `k * interval >= origin` for integer `k`.
pub fn first_multiple_at_or_above(
    origin: f32,
    interval: f32,
) -> f32 {
    (origin / interval - SNAP_EPSILON).ceil() * interval
}

/// True if column `x` is lit in the horizontal dash pattern.
#[inline]
pub fn is_dash_column(
    area: &PlotArea,
    x: i32,
) -> bool {
    (x - area.min_x()).rem_euclid(DASH_PERIOD) < DASH_ON
}

/// Draw a vertical dashed tick over the full plot height at column `x`.
pub fn draw_x_tick<S: Surface>(
    surface: &mut S,
    area: &PlotArea,
    x: i32,
    color: Rgb888,
) -> Result<(), S::Error> {
    let mut y = area.min_y();
    while y + DASH_ON - 1 <= area.max_y() {
        surface.draw_line(Point::new(x, y), Point::new(x, y + DASH_ON - 1), color)?;
        y += DASH_PERIOD;
    }
    Ok(())
}

/// Index of the first grid value at or past `offset` from the grid origin.
/// `None` once the index no longer fits a `u32`.
fn first_index_at_or_after(
    offset: f32,
    interval: f32,
) -> Option<u32> {
    let k = (offset / interval - SNAP_EPSILON).ceil().max(0.0);
    (k < u32::MAX as f32).then_some(k as u32)
}

/// Next grid index to try: the first one reaching `offset`, but always past
/// `index`.
fn advance(
    index: u32,
    offset: f32,
    interval: f32,
) -> Option<u32> {
    let skip = first_index_at_or_after(offset, interval)?;
    Some(skip.max(index.checked_add(1)?))
}

/// Draw X-grid ticks for every grid time in `[from, to]`.
///
/// Grid times are `x0 + k * interval`; only the ones the sweep has reached
/// since `from` are drawn. Grid times sharing a column draw one tick, so the
/// work is bounded by the columns crossed, not by the interval.
pub fn draw_x_ticks<S: Surface>(
    surface: &mut S,
    area: &PlotArea,
    interval: f32,
    from: f32,
    to: f32,
    color: Rgb888,
) -> Result<(), S::Error> {
    let x0 = area.domain().x0;
    let mut index = first_index_at_or_after(from - x0, interval);
    let mut last = None;
    while let Some(k) = index {
        let t = x0 + k as f32 * interval;
        if t > to {
            break;
        }
        let x = area.column(t);
        if last != Some(x) {
            draw_x_tick(surface, area, x, color)?;
            last = Some(x);
        }
        index = advance(k, area.column_time(x + 1) - x0, interval);
    }
    Ok(())
}

/// Draw the dashed segment of every Y-grid line over columns `[from_x, to_x]`.
pub fn draw_y_dashes<S: Surface>(
    surface: &mut S,
    area: &PlotArea,
    grid: YGrid,
    from_x: i32,
    to_x: i32,
    color: Rgb888,
) -> Result<(), S::Error> {
    let from_x = from_x.max(area.min_x());
    let to_x = to_x.min(area.max_x());
    if from_x > to_x {
        return Ok(());
    }

    let limit = area.domain().yf + grid.interval * SNAP_EPSILON;
    let mut index = Some(0u32);
    let mut last = None;
    while let Some(k) = index {
        let value = grid.start + k as f32 * grid.interval;
        if value > limit {
            break;
        }
        let y = area.row(value);
        if last != Some(y) {
            for x in (from_x..=to_x).filter(|&x| is_dash_column(area, x)) {
                surface.draw_pixel(Point::new(x, y), color)?;
            }
            last = Some(y);
        }
        index = advance(k, area.row_value(y) - grid.start, grid.interval);
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
