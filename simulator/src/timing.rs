//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, so they live here rather than in the
//! `no_std` library's `config` module.

use std::time::Duration;

/// Target frame time. Matches the 10 ms delay of the in-car poll loop.
pub const FRAME_TIME: Duration = Duration::from_millis(10);

/// Refresh period of the readouts next to the first two plots.
pub const FAST_READOUT_PERIOD: Duration = Duration::from_millis(200);

/// Refresh period of the readouts next to the last two plots.
pub const SLOW_READOUT_PERIOD: Duration = Duration::from_millis(555);
