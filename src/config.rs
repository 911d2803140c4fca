//! Geometry and behavior defaults shared by the renderers.
//!
//! All values are compile-time constants with validation assertions, the same
//! way the dashboard's sensor thresholds are configured.

// =============================================================================
// Strip Chart
// =============================================================================

/// Default eraser width in pixels.
///
/// Pixels this far ahead of the sweep are cleared before each new segment so
/// the previous pass never collides with the new one.
pub const DEFAULT_ERASER_WIDTH: u32 = 50;

/// Pixels between the plot rectangle edge and the first drawable column/row
/// (the 1px axis outline).
pub const PLOT_INSET: i32 = 1;

/// Difference between the rectangle size and the drawable pixel span
/// (`w - PLOT_SPAN_SHRINK == max_x - min_x`).
pub const PLOT_SPAN_SHRINK: u32 = 3;

/// Smallest plot rectangle edge that still leaves a drawable span.
pub const MIN_PLOT_EDGE: u32 = PLOT_SPAN_SHRINK + 1;

// =============================================================================
// Grid Dash Pattern
// =============================================================================

/// Length of one dash period in pixels (on + off).
pub const DASH_PERIOD: i32 = 4;

/// Number of lit pixels at the start of each dash period.
pub const DASH_ON: i32 = 2;

const _: () = assert!(DASH_ON > 0);
const _: () = assert!(DASH_ON < DASH_PERIOD);

// =============================================================================
// Linear Gauge
// =============================================================================

/// Default gap in pixels between the gauge frame and the bar.
pub const DEFAULT_GAUGE_MARGIN: u32 = 1;

// =============================================================================
// Millisecond Clock
// =============================================================================

/// Milliseconds per domain unit when samples are fed from a millisecond clock.
pub const MILLIS_PER_SECOND: u64 = 1000;

// =============================================================================
// Tests
// =============================================================================
