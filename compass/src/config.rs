use serde::Deserialize;

use crate::CompassError;

/// Default tilt, in degrees, beyond which an axis counts as tilted.
pub const DEFAULT_TILT_THRESHOLD_DEG: f32 = 30.0;

/// Default weight of a new heading sample in the low-pass filter.
pub const DEFAULT_HEADING_SMOOTHING: f32 = 0.3;

/// Tuning knobs for a [`Compass`](crate::Compass).
///
/// Every field has a default so partial documents deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    /// Absolute pitch or roll (degrees) that must be strictly exceeded for the
    /// device to leave [`Position::Flat`](crate::Position::Flat).
    pub tilt_threshold_deg: f32,
    /// Weight of each new heading sample, in `(0, 1]`. `1.0` disables
    /// smoothing.
    pub heading_smoothing: f32,
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            tilt_threshold_deg: DEFAULT_TILT_THRESHOLD_DEG,
            heading_smoothing: DEFAULT_HEADING_SMOOTHING,
        }
    }
}

impl CompassConfig {
    /// Unsmoothed configuration, mostly useful in tests.
    pub fn raw() -> Self {
        Self {
            heading_smoothing: 1.0,
            ..Self::default()
        }
    }

    pub fn validated(self) -> Result<Self, CompassError> {
        if !(self.tilt_threshold_deg.is_finite()
            && self.tilt_threshold_deg > 0.0
            && self.tilt_threshold_deg < 90.0)
        {
            return Err(CompassError::InvalidConfig(format!(
                "tilt threshold must be within (0, 90) degrees, got {}",
                self.tilt_threshold_deg
            )));
        }
        if !(self.heading_smoothing > 0.0 && self.heading_smoothing <= 1.0) {
            return Err(CompassError::InvalidConfig(format!(
                "heading smoothing must be within (0, 1], got {}",
                self.heading_smoothing
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_uses_defaults() {
        let config: CompassConfig = serde_json::from_str(r#"{ "tilt_threshold_deg": 20.0 }"#)
            .expect("valid config");
        assert_eq!(config.tilt_threshold_deg, 20.0);
        assert_eq!(config.heading_smoothing, DEFAULT_HEADING_SMOOTHING);
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        let bad_threshold = CompassConfig {
            tilt_threshold_deg: 95.0,
            ..CompassConfig::default()
        };
        assert!(bad_threshold.validated().is_err());

        let bad_smoothing = CompassConfig {
            heading_smoothing: 0.0,
            ..CompassConfig::default()
        };
        assert!(bad_smoothing.validated().is_err());

        assert!(CompassConfig::default().validated().is_ok());
    }
}
