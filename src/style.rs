//! Mutable per-renderer styling.
//!
//! Styles are plain data: changes take effect on the next draw call and never
//! trigger a redraw on their own.

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::{ALERT_RED, BAR_GREEN, BLACK, GRID_GRAY, PLOT_BACKGROUND, RED, WHITE};
use crate::config::DEFAULT_ERASER_WIDTH;

/// How strip-chart segments are rasterized.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    /// Plain 1px Bresenham segments in the line color.
    #[default]
    Crisp,
    /// Two-pixel Wu segments blended toward the background color.
    AntiAliased,
}

/// Strip-chart style: colors, eraser width, cursor overlay and line mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChartStyle {
    /// Axis outline and cursor overlay color.
    pub axis: Rgb888,
    /// Plot interior color, also used by the eraser.
    pub background: Rgb888,
    /// Data line color.
    pub line: Rgb888,
    /// Dashed grid color.
    pub grid: Rgb888,
    /// Width in pixels of the window cleared ahead of the sweep.
    pub eraser_width: u32,
    /// Highlight the column right after the newest sample.
    pub cursor: bool,
    pub line_mode: LineMode,
}

impl ChartStyle {
    pub const fn new() -> Self {
        Self {
            axis: WHITE,
            background: PLOT_BACKGROUND,
            line: RED,
            grid: GRID_GRAY,
            eraser_width: DEFAULT_ERASER_WIDTH,
            cursor: false,
            line_mode: LineMode::Crisp,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self { Self::new() }
}

/// Linear gauge colors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GaugeStyle {
    /// Outline and baseline marker.
    pub frame: Rgb888,
    pub background: Rgb888,
    pub bar: Rgb888,
    /// Bar color beyond an alert threshold.
    pub alert: Rgb888,
}

impl GaugeStyle {
    pub const fn new() -> Self {
        Self {
            frame: WHITE,
            background: BLACK,
            bar: BAR_GREEN,
            alert: ALERT_RED,
        }
    }
}

impl Default for GaugeStyle {
    fn default() -> Self { Self::new() }
}
