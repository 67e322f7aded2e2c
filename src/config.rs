//! Capture configuration.
//!
//! All values default to `1.0`, which turns every scale factor into a no-op.
//! Under the `serialize` feature the struct can be read from any serde format,
//! missing fields keep their defaults.

use crate::error::{CaptureError, Result};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Threshold, in pixels, that one scroll step of a two finger gesture covers.
pub const TOUCHPAD_SCROLL_THRESHOLD: f32 = 1.0;

/// Converts density independent pixels to physical pixels.
#[inline]
pub fn dp_to_px(dp: f32, density: f32) -> f32 {
    dp * density
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default, deny_unknown_fields))]
pub struct CaptureConfig {
    /// Physical pixels per density independent pixel.
    pub display_density: f32,
    /// Factor applied to motion while the bridge holds the grab.
    pub sensitivity: f32,
    /// Pixels per emitted scroll step for multi-touch scrolling.
    pub scroll_threshold: f32,
    /// Whether the platform can grant pointer capture at all.
    ///
    /// Focus changes only request capture when this is set.
    pub pointer_capture_supported: bool,
}

impl Default for CaptureConfig {
    fn default() -> CaptureConfig {
        CaptureConfig {
            display_density: 1.0,
            sensitivity: 1.0,
            scroll_threshold: TOUCHPAD_SCROLL_THRESHOLD,
            pointer_capture_supported: true,
        }
    }
}

impl CaptureConfig {
    /// Builds a validated config with default scroll threshold.
    pub fn new(display_density: f32, sensitivity: f32) -> Result<CaptureConfig> {
        let config = CaptureConfig {
            display_density,
            sensitivity,
            ..CaptureConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        positive("display_density", self.display_density)?;
        positive("sensitivity", self.sensitivity)?;
        positive("scroll_threshold", self.scroll_threshold)?;
        Ok(())
    }

    /// Factor converting raw device motion into widget pixels.
    pub fn mouse_prescale(&self) -> f32 {
        dp_to_px(1.0, self.display_density)
    }
}

pub(crate) fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CaptureError::InvalidConfig { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let config = CaptureConfig::default();
        assert_eq!(config.mouse_prescale(), 1.0);
        assert_eq!(config.sensitivity, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prescale_follows_density() {
        let config = CaptureConfig::new(2.75, 1.0).unwrap();
        assert_eq!(config.mouse_prescale(), 2.75);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            CaptureConfig::new(0.0, 1.0),
            Err(CaptureError::InvalidConfig {
                field: "display_density",
                value: 0.0
            })
        );
        assert!(CaptureConfig::new(1.0, f32::NAN).is_err());

        let config = CaptureConfig {
            scroll_threshold: -1.0,
            ..CaptureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CaptureError::InvalidConfig {
                field: "scroll_threshold",
                ..
            })
        ));
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_deserialize_partial() {
        let config: CaptureConfig =
            serde_json::from_str(r#"{"display_density": 3.0, "sensitivity": 0.5}"#).unwrap();
        assert_eq!(config.display_density, 3.0);
        assert_eq!(config.sensitivity, 0.5);
        assert_eq!(config.scroll_threshold, TOUCHPAD_SCROLL_THRESHOLD);
        assert!(config.pointer_capture_supported);
    }
}
