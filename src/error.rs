//! Construction-time configuration errors.
//!
//! Renderers validate their geometry once when built. Per-sample operations
//! never fail on numeric input; they clamp instead.

use thiserror::Error;

/// Result alias for renderer construction and reconfiguration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A renderer was configured with geometry it cannot draw.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The value domain is empty, inverted, or not finite.
    #[error("empty domain: start={start}, end={end}")]
    EmptyDomain { start: f32, end: f32 },

    /// The pixel rectangle leaves no drawable area after insets/margins.
    #[error("area too small: width={width}, height={height}")]
    AreaTooSmall { width: u32, height: u32 },
}

/// Check that `[start, end]` is a finite, non-empty range.
pub(crate) fn check_domain(
    start: f32,
    end: f32,
) -> ConfigResult<()> {
    let span = end - start;
    if span.is_finite() && span > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::EmptyDomain { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_domain() {
        assert!(check_domain(0.0, 5.5).is_ok());
        assert!(check_domain(-1.0, 1.0).is_ok());
        assert_eq!(
            check_domain(1.0, 1.0),
            Err(ConfigError::EmptyDomain { start: 1.0, end: 1.0 })
        );
        assert!(check_domain(2.0, 1.0).is_err());
        assert!(check_domain(0.0, f32::NAN).is_err());
        assert!(check_domain(0.0, f32::INFINITY).is_err());
    }
}
