//! Incremental strip chart with a wrap-around time axis.
//!
//! A [`StripChart`] owns one plot rectangle and remembers the last pixel it
//! drew. Each [`StripChart::add_data`] call only touches the columns between
//! that cursor and the new sample:
//!
//! 1. clear the eraser window ahead of the sweep
//! 2. redraw the grid over the columns just crossed
//! 3. draw the new segment (split in two when the sweep wraps)
//! 4. optionally highlight the sweep position
//!
//! Samples that land in the same column as the previous one are dropped, so
//! polling faster than the plot's pixel resolution costs nothing.
//!
//! # Usage
//!
//! ```ignore
//! let mut chart = StripChart::new(
//!     Rectangle::new(Point::new(50, 0), Size::new(270, 40)),
//!     Domain::new(0.0, 5.5, -1.0, 1.0),
//! )?;
//! chart.set_y_grid_interval(0.5);
//! chart.redraw_axis(&mut display)?;
//!
//! loop {
//!     chart.add_data_millis(&mut display, now_ms(), read_sensor())?;
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::antialias::draw_aa_line;
use crate::config::MILLIS_PER_SECOND;
use crate::error::ConfigResult;
use crate::geometry::{Domain, PlotArea};
use crate::grid::{GridSpec, draw_x_ticks, draw_y_dashes};
use crate::style::{ChartStyle, LineMode};
use crate::surface::Surface;

// =============================================================================
// Render Cursor
// =============================================================================

/// Drawing state carried from one sample to the next.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderCursor {
    /// Last drawn pixel (clamped row). `None` until the first sample.
    pub position: Option<Point>,
    /// Wrapped time of the last drawn sample.
    pub time: f32,
    /// Number of times the sweep has wrapped back to the left edge.
    pub sweeps: u32,
}

impl RenderCursor {
    const fn new(origin: f32) -> Self {
        Self {
            position: None,
            time: origin,
            sweeps: 0,
        }
    }
}

// =============================================================================
// Strip Chart
// =============================================================================

/// Rolling time-series plot that redraws only what changed.
#[derive(Clone, Debug)]
pub struct StripChart {
    area: PlotArea,
    grid: GridSpec,
    style: ChartStyle,
    cursor: RenderCursor,
    /// Column currently holding the cursor overlay line.
    overlay: Option<i32>,
}

impl StripChart {
    /// Create a chart over `bounds` showing `domain`.
    ///
    /// The time axis spans `domain.x0..domain.xf` and repeats forever. Grids
    /// start disabled and the style starts at [`ChartStyle::new`].
    pub fn new(
        bounds: Rectangle,
        domain: Domain,
    ) -> ConfigResult<Self> {
        let area = PlotArea::new(bounds, domain)?;
        plot_debug!(
            "strip chart at ({},{}) span {}x{}px",
            area.min_x(),
            area.min_y(),
            area.dx(),
            area.dy()
        );
        Ok(Self {
            area,
            grid: GridSpec::disabled(),
            style: ChartStyle::new(),
            cursor: RenderCursor::new(domain.x0),
            overlay: None,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn area(&self) -> &PlotArea { &self.area }

    #[inline]
    pub const fn grid(&self) -> &GridSpec { &self.grid }

    #[inline]
    pub const fn style(&self) -> &ChartStyle { &self.style }

    #[inline]
    pub const fn cursor(&self) -> &RenderCursor { &self.cursor }

    /// Number of completed sweeps across the plot.
    #[inline]
    pub const fn sweeps(&self) -> u32 { self.cursor.sweeps }

    // -------------------------------------------------------------------------
    // Style
    // -------------------------------------------------------------------------

    pub fn set_axis_color(
        &mut self,
        color: Rgb888,
    ) {
        self.style.axis = color;
    }

    pub fn set_background_color(
        &mut self,
        color: Rgb888,
    ) {
        self.style.background = color;
    }

    pub fn set_line_color(
        &mut self,
        color: Rgb888,
    ) {
        self.style.line = color;
    }

    pub fn set_grid_color(
        &mut self,
        color: Rgb888,
    ) {
        self.style.grid = color;
    }

    /// Set how many pixels ahead of the sweep are cleared each update.
    pub fn set_eraser_width(
        &mut self,
        width: u32,
    ) {
        self.style.eraser_width = width;
    }

    /// Enable or disable the sweep position highlight.
    pub fn set_cursor(
        &mut self,
        enabled: bool,
    ) {
        self.style.cursor = enabled;
    }

    pub fn set_line_mode(
        &mut self,
        mode: LineMode,
    ) {
        self.style.line_mode = mode;
    }

    /// Vertical grid tick every `interval` time units (`0` disables).
    pub fn set_x_grid_interval(
        &mut self,
        interval: f32,
    ) {
        self.grid.set_x_interval(interval);
    }

    /// Horizontal grid line every `interval` value units (`0` disables).
    ///
    /// Lines sit on multiples of `interval`, not on offsets from `y0`.
    pub fn set_y_grid_interval(
        &mut self,
        interval: f32,
    ) {
        self.grid.set_y_interval(interval, self.area.domain().y0);
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Clear the plot interior and draw the axis outline.
    ///
    /// Used at startup or after the display was cleared. The render cursor is
    /// kept, so the next sample continues the line from where it left off.
    pub fn redraw_axis<S: Surface>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        let (tl, br) = self.area.interior();
        surface.fill_rect(tl, br, self.style.background)?;
        let (tl, br) = self.area.outline();
        surface.draw_rect(tl, br, self.style.axis)?;
        self.overlay = None;
        Ok(())
    }

    /// Plot a sample taken from a millisecond clock.
    ///
    /// The domain is interpreted in seconds. When the sweep length is a whole
    /// number of milliseconds the clock is reduced with integer math first,
    /// so precision does not degrade however long the device has been up.
    pub fn add_data_millis<S: Surface>(
        &mut self,
        surface: &mut S,
        millis: u64,
        value: f32,
    ) -> Result<(), S::Error> {
        let span_ms = self.area.domain().x_span() * MILLIS_PER_SECOND as f32;
        let whole_ms = span_ms as u64;
        let millis = if whole_ms > 0 && whole_ms as f32 == span_ms { millis % whole_ms } else { millis };
        self.add_data(surface, millis as f32 / MILLIS_PER_SECOND as f32, value)
    }

    /// Plot `value` at `time`, drawing only the pixels that changed.
    ///
    /// `time` may grow without bound; it is wrapped into the domain window.
    /// Values outside `y0..yf` are drawn clipped to the plot edge.
    pub fn add_data<S: Surface>(
        &mut self,
        surface: &mut S,
        time: f32,
        value: f32,
    ) -> Result<(), S::Error> {
        let time = self.area.wrap_time(time);
        let column = self.area.column(time);

        let prev = self.cursor.position;
        if prev.is_some_and(|p| p.x == column) {
            return Ok(());
        }

        let raw_row = self.area.raw_row(value);
        let point = Point::new(column, self.area.clamp_row(raw_row));

        self.clear_overlay(surface)?;

        let Some(prev) = prev else {
            self.draw_grid(surface, None, time, column)?;
            surface.draw_pixel(point, self.style.line)?;
            self.cursor.position = Some(point);
            self.cursor.time = time;
            return Ok(());
        };

        let (min_x, max_x) = (self.area.min_x(), self.area.max_x());
        let eraser = i32::try_from(self.style.eraser_width).unwrap_or(i32::MAX);

        if column < prev.x {
            // Sweep wrapped: clear the start of the plot ahead of the new pass
            self.erase_columns(surface, min_x, column.saturating_add(eraser).min(max_x))?;
            self.draw_grid(surface, Some(prev), time, column)?;

            let edge_row = self.area.wrap_row(prev, column, raw_row);
            self.draw_segment(surface, prev, Point::new(max_x, edge_row))?;
            self.draw_segment(surface, Point::new(min_x, edge_row), point)?;

            self.cursor.sweeps = self.cursor.sweeps.wrapping_add(1);
            plot_trace!("sweep {} wrapped at column {}", self.cursor.sweeps, column);
        } else {
            // The previous column keeps its pixels even without an eraser lead
            let start = prev.x.saturating_add(eraser.max(1));
            if start < max_x || self.style.cursor {
                self.erase_columns(surface, start.min(max_x), column.saturating_add(eraser).min(max_x))?;
            }
            self.draw_grid(surface, Some(prev), time, column)?;
            self.draw_segment(surface, prev, point)?;
        }

        self.cursor.position = Some(point);
        self.cursor.time = time;

        if self.style.cursor && column < max_x {
            let x = column + 1;
            surface.draw_line(
                Point::new(x, self.area.min_y()),
                Point::new(x, self.area.max_y()),
                self.style.axis,
            )?;
            self.overlay = Some(x);
        }

        Ok(())
    }

    /// Fill columns `[from, to]` over the full plot height with background.
    fn erase_columns<S: Surface>(
        &self,
        surface: &mut S,
        from: i32,
        to: i32,
    ) -> Result<(), S::Error> {
        surface.fill_rect(
            Point::new(from, self.area.min_y()),
            Point::new(to, self.area.max_y()),
            self.style.background,
        )
    }

    fn clear_overlay<S: Surface>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        match self.overlay.take() {
            Some(x) => self.erase_columns(surface, x, x),
            None => Ok(()),
        }
    }

    /// Draw the grid over the columns between the previous cursor and the new
    /// sample. `prev == None` draws from the left edge.
    fn draw_grid<S: Surface>(
        &self,
        surface: &mut S,
        prev: Option<Point>,
        time: f32,
        column: i32,
    ) -> Result<(), S::Error> {
        let domain = self.area.domain();
        let wrapped = prev.is_some_and(|p| column < p.x);

        if let Some(interval) = self.grid.x_interval() {
            if wrapped {
                draw_x_ticks(surface, &self.area, interval, self.cursor.time, domain.xf, self.style.grid)?;
                draw_x_ticks(surface, &self.area, interval, domain.x0, time, self.style.grid)?;
            } else {
                draw_x_ticks(surface, &self.area, interval, self.cursor.time, time, self.style.grid)?;
            }
        }

        if let Some(y_grid) = self.grid.y_grid() {
            let (min_x, max_x) = (self.area.min_x(), self.area.max_x());
            match prev {
                None => draw_y_dashes(surface, &self.area, y_grid, min_x, column, self.style.grid)?,
                Some(p) if wrapped => {
                    draw_y_dashes(surface, &self.area, y_grid, p.x + 1, max_x, self.style.grid)?;
                    draw_y_dashes(surface, &self.area, y_grid, min_x, column, self.style.grid)?;
                }
                Some(p) => draw_y_dashes(surface, &self.area, y_grid, p.x + 1, column, self.style.grid)?,
            }
        }

        Ok(())
    }

    fn draw_segment<S: Surface>(
        &self,
        surface: &mut S,
        a: Point,
        b: Point,
    ) -> Result<(), S::Error> {
        match self.style.line_mode {
            LineMode::Crisp => surface.draw_line(a, b, self.style.line),
            LineMode::AntiAliased => draw_aa_line(surface, a, b, self.style.line, self.style.background),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
