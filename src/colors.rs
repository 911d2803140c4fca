//! Color constants and blending for the plot renderers.
//!
//! # Why Rgb888
//!
//! Styles are stored as 8-bit-per-channel [`Rgb888`] so that intensity
//! blending in the anti-aliased line path works on full-resolution channels.
//! Conversion to the panel's native format (usually `Rgb565` for ST7789/ILI9341
//! class displays) happens once per primitive inside
//! [`Surface`](crate::surface::Surface).

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Default gauge background.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white (255, 255, 255). Default axis and gauge frame color.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure red (255, 0, 0). Default strip-chart line color.
pub const RED: Rgb888 = Rgb888::RED;

/// Pure green (0, 255, 0).
pub const GREEN: Rgb888 = Rgb888::GREEN;

/// Pure blue (0, 0, 255).
pub const BLUE: Rgb888 = Rgb888::BLUE;

/// Cyan (0, 255, 255).
pub const CYAN: Rgb888 = Rgb888::CYAN;

// =============================================================================
// Custom Colors (renderer defaults)
// =============================================================================

/// Near-black plot background (12, 12, 12).
/// Slightly lifted from black so the plot area reads as a panel.
pub const PLOT_BACKGROUND: Rgb888 = Rgb888::new(12, 12, 12);

/// Light gray for dashed grid lines (220, 220, 220).
pub const GRID_GRAY: Rgb888 = Rgb888::new(220, 220, 220);

/// Gauge bar green (0, 0xEF, 0). Slightly dimmer than pure green.
pub const BAR_GREEN: Rgb888 = Rgb888::new(0, 0xEF, 0);

/// Gauge alert red (0xEF, 0, 0).
pub const ALERT_RED: Rgb888 = Rgb888::new(0xEF, 0, 0);

// =============================================================================
// Blending
// =============================================================================

/// Blend `from` toward `to` by `weight / 255`.
///
/// `weight == 0` returns `from`, `weight == 255` returns `to`. Each channel is
/// interpolated with truncating integer division, so intermediate weights
/// never round up toward the target color.
pub fn blend(
    from: Rgb888,
    to: Rgb888,
    weight: u8,
) -> Rgb888 {
    Rgb888::new(
        blend_channel(from.r(), to.r(), weight),
        blend_channel(from.g(), to.g(), weight),
        blend_channel(from.b(), to.b(), weight),
    )
}

#[inline]
fn blend_channel(
    from: u8,
    to: u8,
    weight: u8,
) -> u8 {
    let from = i32::from(from);
    let delta = i32::from(to) - from;
    // Division truncates toward zero, result always lies between from and to
    (from + delta * i32::from(weight) / 255) as u8
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(RED, PLOT_BACKGROUND, 0), RED);
        assert_eq!(blend(RED, PLOT_BACKGROUND, 255), PLOT_BACKGROUND);
    }

    #[test]
    fn test_blend_truncates() {
        // 255 -> 12 at weight 128: 255 + (-243 * 128) / 255 = 255 - 121 = 134
        let c = blend(RED, PLOT_BACKGROUND, 128);
        assert_eq!(c.r(), 134);
        // 0 -> 12 at weight 128: 0 + (12 * 128) / 255 = 6
        assert_eq!(c.g(), 6);
        assert_eq!(c.b(), 6);
    }

    #[test]
    fn test_blend_stays_between_channels() {
        for w in 0..=255u8 {
            let c = blend(Rgb888::new(10, 200, 90), Rgb888::new(250, 0, 90), w);
            assert!((10..=250).contains(&c.r()));
            assert!(c.g() <= 200);
            assert_eq!(c.b(), 90);
        }
    }
}
