//! Synthetic sensor signals driven by the millisecond clock.

use std::f32::consts::TAU;

/// Period of the signal fed to the strip charts.
pub const FAST_PERIOD_MS: f32 = 2_000.0;

/// Period of the signal fed to the gauges.
pub const SLOW_PERIOD_MS: f32 = 8_000.0;

/// Sine of `millis` with the given period, in `[-1, 1]`.
pub fn wave(
    millis: u64,
    period_ms: f32,
) -> f32 {
    // Reduce first so the phase stays precise over long runs
    let phase = (millis as f64 % f64::from(period_ms)) as f32 / period_ms;
    (phase * TAU).sin()
}

/// One frame of synthetic readings.
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    /// Strip-chart signal.
    pub fast: f32,
    /// Gauge signal.
    pub slow: f32,
}

impl Sample {
    pub fn at(millis: u64) -> Self {
        Self {
            fast: wave(millis, FAST_PERIOD_MS),
            slow: wave(millis, SLOW_PERIOD_MS),
        }
    }

    /// Pedal position in percent. Negative half-waves read below zero and pin
    /// the bar empty.
    pub fn pedal(&self) -> f32 { self.slow * 100.0 }

    /// Boost in percent of the gauge range.
    pub fn boost(&self) -> f32 { self.slow * self.slow * 100.0 }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_quarter_points() {
        assert!(wave(0, FAST_PERIOD_MS).abs() < 1e-6);
        assert!((wave(500, FAST_PERIOD_MS) - 1.0).abs() < 1e-6);
        assert!((wave(1_500, FAST_PERIOD_MS) + 1.0).abs() < 1e-6);
        assert!((wave(2_000 * 1_000_000 + 500, FAST_PERIOD_MS) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sample_ranges() {
        for ms in (0..16_000).step_by(37) {
            let s = Sample::at(ms);
            assert!((-100.0..=100.0).contains(&s.pedal()));
            assert!((0.0..=100.0).contains(&s.boost()));
        }
    }
}
