//! Screen layout of the in-car telemetry display (320x240).
//!
//! Five strip charts share the right part of the upper screen (the first two
//! overlaid on one plot), two gauges sit below them, and the left column
//! holds labels and numeric readouts.

use dashboard_plot::colors::{BLUE, CYAN, GREEN, RED};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Screen
// =============================================================================

pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 240;

/// Left edge of every plot and gauge; the column left of it holds text.
pub const PLOT_X: i32 = 50;
pub const PLOT_WIDTH: u32 = SCREEN_WIDTH - PLOT_X as u32;
pub const PLOT_HEIGHT: u32 = 40;

/// Top of the status line showing the newest debug log entry.
pub const STATUS_Y: i32 = 226;

// =============================================================================
// Strip Charts
// =============================================================================

/// How a chart derives its value from the synthetic signal `y`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Feed {
    /// `gain * y`
    Scaled(f32),
    /// `y * y`
    Squared,
}

impl Feed {
    pub fn apply(
        self,
        y: f32,
    ) -> f32 {
        match self {
            Self::Scaled(gain) => gain * y,
            Self::Squared => y * y,
        }
    }
}

pub struct ChartLayout {
    pub top: i32,
    /// Sweep length in seconds.
    pub sweep_s: f32,
    /// `None` keeps the default line color.
    pub line: Option<Rgb888>,
    /// `None` keeps the default eraser width.
    pub eraser: Option<u32>,
    /// Grid intervals; zero disables.
    pub x_grid: f32,
    pub y_grid: f32,
    pub feed: Feed,
}

/// Value range shared by all charts.
pub const CHART_MIN: f32 = -1.0;
pub const CHART_MAX: f32 = 1.0;

pub const CHARTS: [ChartLayout; 5] = [
    ChartLayout {
        top: 0,
        sweep_s: 5.5,
        line: None,
        eraser: Some(40),
        x_grid: 0.5,
        y_grid: 0.5,
        feed: Feed::Scaled(1.0),
    },
    // Overlaid on the first plot
    ChartLayout {
        top: 0,
        sweep_s: 5.5,
        line: Some(GREEN),
        eraser: Some(40),
        x_grid: 0.0,
        y_grid: 0.0,
        feed: Feed::Squared,
    },
    ChartLayout {
        top: 40,
        sweep_s: 10.0,
        line: Some(BLUE),
        eraser: Some(30),
        x_grid: 0.0,
        y_grid: 0.6,
        feed: Feed::Scaled(1.0),
    },
    ChartLayout {
        top: 80,
        sweep_s: 2.5,
        line: Some(CYAN),
        eraser: None,
        x_grid: 0.0,
        y_grid: 0.0,
        feed: Feed::Scaled(0.7),
    },
    ChartLayout {
        top: 120,
        sweep_s: 25.0,
        line: None,
        eraser: Some(25),
        x_grid: 2.5,
        y_grid: 0.0,
        feed: Feed::Scaled(0.9),
    },
];

impl ChartLayout {
    pub const fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::new(PLOT_X, self.top), Size::new(PLOT_WIDTH, PLOT_HEIGHT))
    }
}

// =============================================================================
// Gauges
// =============================================================================

pub const GAUGE_HEIGHT: u32 = 16;
pub const GAUGE_MIN: f32 = 0.0;
pub const GAUGE_MAX: f32 = 100.0;

pub struct GaugeLayout {
    pub top: i32,
    pub label: &'static str,
    pub baseline: Option<f32>,
    pub max_alert: Option<f32>,
}

impl GaugeLayout {
    pub const fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::new(PLOT_X, self.top), Size::new(PLOT_WIDTH, GAUGE_HEIGHT))
    }
}

pub const BOOST_GAUGE: GaugeLayout = GaugeLayout {
    top: 165,
    label: "Ladedr",
    baseline: Some(20.0),
    max_alert: None,
};

pub const PEDAL_GAUGE: GaugeLayout = GaugeLayout {
    top: 165 + 19,
    label: "Gasped",
    baseline: None,
    max_alert: Some(90.0),
};

// =============================================================================
// Readouts
// =============================================================================

/// Numeric readout of the chart signal in the left column.
pub struct Readout {
    pub top: i32,
    pub color: Rgb888,
    /// Refreshed on the fast timer, otherwise on the slow one.
    pub fast: bool,
}

pub const READOUTS: [Readout; 4] = [
    Readout { top: 0, color: GREEN, fast: true },
    Readout { top: 40, color: BLUE, fast: true },
    Readout { top: 80, color: CYAN, fast: false },
    Readout { top: 120, color: RED, fast: false },
];

const _: () = assert!(PLOT_X > 0 && (PLOT_X as u32) < SCREEN_WIDTH);
const _: () = assert!(STATUS_Y < SCREEN_HEIGHT as i32);
const _: () = assert!(GAUGE_MIN < GAUGE_MAX);

// =============================================================================
// Tests
// =============================================================================
