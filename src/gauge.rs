//! Horizontal bar gauge with optional split baseline and alert coloring.
//!
//! The bar grows from the left edge of the drawable area, or, when a baseline
//! is set, from the baseline in either direction (boost gauges that dip below
//! atmospheric pressure, for example). Each [`LinearGauge::update`] only
//! paints the columns whose state changed since the previous call.
//!
//! # Column Mapping
//!
//! [`LinearGauge::interpolate`] maps the domain start to `min_x - 1`, one
//! column left of the drawable area, and the domain end to `max_x`. A value at
//! the domain start therefore shows an empty bar, and every drawable column
//! corresponds to a non-empty bar.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::DEFAULT_GAUGE_MARGIN;
use crate::error::{ConfigError, ConfigResult, check_domain};
use crate::style::GaugeStyle;
use crate::surface::Surface;

/// Inclusive run of bar columns.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Span {
    lo: i32,
    hi: i32,
}

impl Span {
    fn new(
        lo: i32,
        hi: i32,
    ) -> Option<Self> {
        (lo <= hi).then_some(Self { lo, hi })
    }

    /// Columns of `self` not covered by `other`.
    ///
    /// Both spans grow from the same anchor, so the result is a single run.
    fn without(
        self,
        other: Option<Self>,
    ) -> Option<Self> {
        match other {
            None => Some(self),
            Some(o) if o.hi < self.lo || o.lo > self.hi => Some(self),
            Some(o) if o.lo <= self.lo && o.hi >= self.hi => None,
            Some(o) if o.lo <= self.lo => Self::new(o.hi + 1, self.hi),
            Some(o) => Self::new(self.lo, o.lo - 1),
        }
    }
}

/// Horizontal bar gauge over the value domain `[x0, xf]`.
#[derive(Clone, Debug)]
pub struct LinearGauge {
    bounds: Rectangle,
    x0: f32,
    xf: f32,
    margin: u32,
    min: Point,
    max: Point,
    style: GaugeStyle,
    base_value: f32,
    /// Baseline column, `None` when the bar grows from the left edge.
    base_x: Option<i32>,
    max_alert: Option<(f32, i32)>,
    min_alert: Option<(f32, i32)>,
    value: f32,
    /// Last drawn column, within `[min_x - 1, max_x + 1]`.
    column: i32,
}

impl LinearGauge {
    /// Create a gauge filling `bounds` for values in `[x0, xf]`.
    ///
    /// Starts with a 1px margin, no baseline and no alerts.
    pub fn new(
        bounds: Rectangle,
        x0: f32,
        xf: f32,
    ) -> ConfigResult<Self> {
        check_domain(x0, xf)?;
        let (min, max) = drawable_corners(bounds, DEFAULT_GAUGE_MARGIN)?;
        plot_debug!("gauge at ({},{}) columns {}..={}", bounds.top_left.x, bounds.top_left.y, min.x, max.x);
        Ok(Self {
            bounds,
            x0,
            xf,
            margin: DEFAULT_GAUGE_MARGIN,
            min,
            max,
            style: GaugeStyle::new(),
            base_value: x0,
            base_x: None,
            max_alert: None,
            min_alert: None,
            value: x0,
            column: min.x - 1,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Value of the last update that changed the bar.
    #[inline]
    pub const fn value(&self) -> f32 { self.value }

    /// Last drawn bar column.
    #[inline]
    pub const fn column(&self) -> i32 { self.column }

    #[inline]
    pub const fn baseline_column(&self) -> Option<i32> { self.base_x }

    #[inline]
    pub const fn margin(&self) -> u32 { self.margin }

    /// Drawable area inside the frame and margin.
    pub fn bounds(&self) -> Rectangle { Rectangle::with_corners(self.min, self.max) }

    #[inline]
    pub const fn style(&self) -> &GaugeStyle { &self.style }

    #[inline]
    pub fn style_mut(&mut self) -> &mut GaugeStyle { &mut self.style }

    pub fn set_frame_color(
        &mut self,
        color: Rgb888,
    ) {
        self.style.frame = color;
    }

    pub fn set_background_color(
        &mut self,
        color: Rgb888,
    ) {
        self.style.background = color;
    }

    pub fn set_bar_color(
        &mut self,
        color: Rgb888,
    ) {
        self.style.bar = color;
    }

    pub fn set_alert_color(
        &mut self,
        color: Rgb888,
    ) {
        self.style.alert = color;
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Change the gap between frame and bar.
    ///
    /// Re-projects the baseline and alerts. Call [`redraw`](Self::redraw)
    /// afterwards; the bar is treated as empty again.
    pub fn set_margin(
        &mut self,
        margin: u32,
    ) -> ConfigResult<()> {
        let (min, max) = drawable_corners(self.bounds, margin).inspect_err(|_| {
            plot_warn!("gauge margin {} leaves no drawable area", margin);
        })?;
        self.margin = margin;
        self.min = min;
        self.max = max;
        self.max_alert = self.max_alert.map(|(v, _)| (v, self.interpolate(v)));
        self.min_alert = self.min_alert.map(|(v, _)| (v, self.interpolate(v)));
        self.set_base_value(self.base_value);
        Ok(())
    }

    /// Grow the bar from `value` instead of the left edge.
    ///
    /// A baseline outside the drawable columns disables split-bar mode. The bar
    /// is treated as empty afterwards and nothing is repainted here. Later
    /// [`update`](Self::update) calls never erase bar pixels painted before
    /// the change; only [`redraw`](Self::redraw) restores a consistent bar.
    pub fn set_base_value(
        &mut self,
        value: f32,
    ) {
        self.base_value = value;
        self.value = value;
        let x = self.interpolate(value);
        if (self.min.x..=self.max.x).contains(&x) {
            self.base_x = Some(x);
            self.column = x;
        } else {
            if value != self.x0 {
                plot_warn!("gauge baseline {} outside drawable range, disabled", value);
            }
            self.base_x = None;
            self.column = self.min.x - 1;
        }
    }

    /// Paint bar columns at or beyond `value` in the alert color.
    pub fn set_max_alert(
        &mut self,
        value: f32,
    ) {
        self.max_alert = Some((value, self.interpolate(value)));
    }

    /// Paint bar columns at or below `value` in the alert color.
    ///
    /// Only takes effect with a baseline, where the bar can extend to the left.
    pub fn set_min_alert(
        &mut self,
        value: f32,
    ) {
        self.min_alert = Some((value, self.interpolate(value)));
    }

    pub fn clear_alerts(&mut self) {
        self.max_alert = None;
        self.min_alert = None;
    }

    /// Column of `value`, unclamped.
    ///
    /// `x0` maps to `min_x - 1` and `xf` to `max_x`.
    pub fn interpolate(
        &self,
        value: f32,
    ) -> i32 {
        let columns = (self.max.x - self.min.x + 1) as f32;
        let offset = ((value - self.x0) / (self.xf - self.x0) * columns) as i32;
        offset.saturating_add(self.min.x - 1)
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Draw the frame, clear the interior and repaint the current bar and
    /// baseline marker.
    pub fn redraw<S: Surface>(
        &self,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        let br = self.bounds.top_left + self.bounds.size - Point::new(1, 1);
        surface.draw_rect(self.bounds.top_left, br, self.style.frame)?;
        surface.fill_rect(self.min, self.max, self.style.background)?;
        if let Some(span) = self.bar_span(self.column) {
            self.paint_bar(surface, span)?;
        }
        if let Some(x) = self.base_x {
            surface.draw_line(Point::new(x, self.min.y), Point::new(x, self.max.y), self.style.frame)?;
        }
        Ok(())
    }

    /// Show `value`, painting only the columns that changed.
    ///
    /// Values outside the domain pin the bar to the nearest edge.
    pub fn update<S: Surface>(
        &mut self,
        surface: &mut S,
        value: f32,
    ) -> Result<(), S::Error> {
        let mut column = self.interpolate(value).clamp(self.min.x - 1, self.max.x + 1);
        if column == self.column {
            return Ok(());
        }
        if self.base_x.is_some() {
            // The column left of the area only means "empty" without a baseline
            column = column.max(self.min.x);
            if column == self.column {
                return Ok(());
            }
        }

        let old = self.bar_span(self.column);
        let new = self.bar_span(column);

        if let Some(stale) = old.and_then(|o| o.without(new)) {
            self.fill_columns(surface, stale.lo, stale.hi, self.style.background)?;
        }
        if let Some(grown) = new.and_then(|n| n.without(old)) {
            self.paint_bar(surface, grown)?;
        }

        self.value = value;
        self.column = column;
        Ok(())
    }

    /// Bar columns shown for `column`, clipped to the drawable area.
    fn bar_span(
        &self,
        column: i32,
    ) -> Option<Span> {
        let span = match self.base_x {
            Some(base) if column > base => Span::new(base + 1, column),
            Some(base) if column < base => Span::new(column, base - 1),
            Some(_) => None,
            None => Span::new(self.min.x, column),
        }?;
        Span::new(span.lo.max(self.min.x), span.hi.min(self.max.x))
    }

    /// Paint bar columns, switching to the alert color past the thresholds.
    fn paint_bar<S: Surface>(
        &self,
        surface: &mut S,
        span: Span,
    ) -> Result<(), S::Error> {
        let Span { mut lo, hi } = span;

        if let (Some(_), Some((_, min_alert))) = (self.base_x, self.min_alert) {
            self.fill_columns(surface, lo, hi.min(min_alert), self.style.alert)?;
            lo = lo.max(min_alert.saturating_add(1));
        }

        match self.max_alert {
            Some((_, max_alert)) => {
                self.fill_columns(surface, lo, hi.min(max_alert.saturating_sub(1)), self.style.bar)?;
                self.fill_columns(surface, lo.max(max_alert), hi, self.style.alert)
            }
            None => self.fill_columns(surface, lo, hi, self.style.bar),
        }
    }

    /// Fill columns `[from, to]` over the bar height. Empty ranges draw nothing.
    fn fill_columns<S: Surface>(
        &self,
        surface: &mut S,
        from: i32,
        to: i32,
        color: Rgb888,
    ) -> Result<(), S::Error> {
        if from > to {
            return Ok(());
        }
        surface.fill_rect(Point::new(from, self.min.y), Point::new(to, self.max.y), color)
    }
}

/// Corners of the drawable area for `margin`, inside the 1px frame.
fn drawable_corners(
    bounds: Rectangle,
    margin: u32,
) -> ConfigResult<(Point, Point)> {
    let Size { width, height } = bounds.size;
    let inset = margin.saturating_add(1);
    // Frame plus margin on both sides must leave at least one column and row
    let needed = inset.saturating_mul(2).saturating_add(1);
    if width < needed || height < needed {
        return Err(ConfigError::AreaTooSmall { width, height });
    }

    let inset = inset as i32;
    let min = bounds.top_left + Point::new(inset, inset);
    let max = bounds.top_left + bounds.size - Point::new(inset + 1, inset + 1);
    Ok((min, max))
}

// =============================================================================
// Tests
// =============================================================================
