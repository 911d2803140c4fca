//! Incremental strip-chart and bar-gauge rendering for small telemetry displays.
//!
//! This crate turns scalar sensor samples into the minimal set of pixel
//! updates needed to keep a plot current, so a dashboard running at sensor-poll
//! rate never has to redraw the whole screen:
//!
//! - [`strip_chart`]: rolling plot with a wrap-around time axis, dashed grid
//!   overlay and crisp or anti-aliased line segments
//! - [`gauge`]: horizontal bar with optional split baseline and alert colors
//! - [`antialias`]: fixed-point Wu line walker used by the strip chart
//! - [`surface`]: the drawing capability both renderers are generic over
//! - [`colors`], [`config`]: default styling and geometry constants
//!
//! # no_std Compatibility
//!
//! The library is `no_std` and allocation-free. Any
//! [`DrawTarget`](embedded_graphics::draw_target::DrawTarget) whose color type
//! converts from [`Rgb888`](embedded_graphics::pixelcolor::Rgb888) can be
//! drawn on directly.
//!
//! # Testing
//!
//! Tests run on the host with `std` enabled (via `cfg_attr`):
//! ```bash
//! cargo test -p dashboard-plot
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod log;

pub mod antialias;
pub mod colors;
pub mod config;
pub mod error;
pub mod gauge;
pub mod geometry;
pub mod grid;
pub mod strip_chart;
pub mod style;
pub mod surface;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use error::ConfigError;
pub use gauge::LinearGauge;
pub use geometry::{Domain, PlotArea};
pub use strip_chart::{RenderCursor, StripChart};
pub use style::{ChartStyle, GaugeStyle, LineMode};
pub use surface::Surface;
