//! Sensor fusion: from raw samples to heading and tilt position.
//!
//! Vector samples follow the Android `SensorManager` convention: the rotation
//! matrix is built from the gravity and geomagnetic vectors, then azimuth,
//! pitch and roll are read back from it.

use serde::{Deserialize, Serialize};

use crate::reading::{Heading, Position};
use crate::sensor::{SensorSample, Vector3};
use crate::CompassConfig;

/// Below this magnitude the east vector is unreliable (free fall, or the
/// device points at a magnetic pole).
const MIN_EAST_NORM: f32 = 0.1;

/// Device attitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the z axis, clockwise from North.
    pub azimuth_deg: f32,
    /// Rotation about the x axis.
    pub pitch_deg: f32,
    /// Rotation about the y axis.
    pub roll_deg: f32,
}

impl EulerAngles {
    pub fn new(azimuth_deg: f32, pitch_deg: f32, roll_deg: f32) -> Self {
        Self {
            azimuth_deg,
            pitch_deg,
            roll_deg,
        }
    }

    fn is_finite(&self) -> bool {
        self.azimuth_deg.is_finite() && self.pitch_deg.is_finite() && self.roll_deg.is_finite()
    }

    /// Fuse gravity and geomagnetic vectors. `None` when the geometry is
    /// degenerate.
    pub fn from_vectors(gravity: Vector3, geomagnetic: Vector3) -> Option<Self> {
        let [ax, ay, az] = gravity;
        let [ex, ey, ez] = geomagnetic;

        // East = geomagnetic x gravity.
        let hx = ey * az - ez * ay;
        let hy = ez * ax - ex * az;
        let hz = ex * ay - ey * ax;
        let norm_h = (hx * hx + hy * hy + hz * hz).sqrt();
        if !norm_h.is_finite() || norm_h < MIN_EAST_NORM {
            return None;
        }
        let norm_a = (ax * ax + ay * ay + az * az).sqrt();
        if !norm_a.is_finite() || norm_a == 0.0 {
            return None;
        }

        let (hx, hy, hz) = (hx / norm_h, hy / norm_h, hz / norm_h);
        let (ax, ay, az) = (ax / norm_a, ay / norm_a, az / norm_a);

        // North = gravity x east.
        let my = az * hx - ax * hz;

        let azimuth = hy.atan2(my);
        let pitch = (-ay).clamp(-1.0, 1.0).asin();
        let roll = (-ax).atan2(az);

        let angles = Self::new(azimuth.to_degrees(), pitch.to_degrees(), roll.to_degrees());
        angles.is_finite().then_some(angles)
    }
}

/// Classify a tilt.
///
/// An axis is tilted only when its magnitude is strictly greater than
/// `threshold_deg`. Both axes tilted: the larger magnitude wins, and an exact
/// tie keeps `previous` when it is already tilted (`Portrait` otherwise).
pub fn classify_position(
    pitch_deg: f32,
    roll_deg: f32,
    threshold_deg: f32,
    previous: Option<Position>,
) -> Position {
    let pitch = pitch_deg.abs();
    let roll = roll_deg.abs();

    match (pitch > threshold_deg, roll > threshold_deg) {
        (false, false) => Position::Flat,
        (true, false) => Position::Portrait,
        (false, true) => Position::Landscape,
        (true, true) => {
            if pitch > roll {
                Position::Portrait
            } else if roll > pitch {
                Position::Landscape
            } else {
                match previous {
                    Some(Position::Landscape) => Position::Landscape,
                    _ => Position::Portrait,
                }
            }
        }
    }
}

/// Stateful filter fed by the compass for each accepted sample.
#[derive(Debug, Clone, Default)]
pub(crate) struct Fusion {
    heading: Option<Heading>,
    position: Option<Position>,
}

/// What a sample changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FusedReading {
    pub heading: Heading,
    pub position: Position,
}

impl Fusion {
    /// Forget the smoothing history; the next sample is taken as-is.
    pub(crate) fn reset(&mut self) {
        self.heading = None;
    }

    pub(crate) fn update(
        &mut self,
        sample: SensorSample,
        config: &CompassConfig,
    ) -> Option<FusedReading> {
        let angles = match sample {
            SensorSample::Vectors {
                gravity,
                geomagnetic,
            } => EulerAngles::from_vectors(gravity, geomagnetic)?,
            SensorSample::Angles(angles) if angles.is_finite() => angles,
            SensorSample::Angles(_) => return None,
        };

        let raw = Heading::from_degrees(angles.azimuth_deg)?;
        let heading = match self.heading {
            Some(previous) => {
                let step = previous.delta_to(raw) * config.heading_smoothing;
                Heading::from_degrees(previous.degrees() + step)?
            }
            None => raw,
        };
        let position = classify_position(
            angles.pitch_deg,
            angles.roll_deg,
            config.tilt_threshold_deg,
            self.position,
        );

        self.heading = Some(heading);
        self.position = Some(position);
        Some(FusedReading { heading, position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f32 = 9.81;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn flat_device_facing_north() {
        let angles = EulerAngles::from_vectors([0.0, 0.0, G], [0.0, 20.0, -40.0]).unwrap();
        assert_close(angles.azimuth_deg, 0.0);
        assert_close(angles.pitch_deg, 0.0);
        assert_close(angles.roll_deg, 0.0);
    }

    #[test]
    fn flat_device_facing_east() {
        // Top of the device points East, so magnetic North lies along -x.
        let angles = EulerAngles::from_vectors([0.0, 0.0, G], [-20.0, 0.0, -40.0]).unwrap();
        assert_close(angles.azimuth_deg, 90.0);
    }

    #[test]
    fn flat_device_facing_west_normalizes_to_270() {
        let angles = EulerAngles::from_vectors([0.0, 0.0, G], [20.0, 0.0, -40.0]).unwrap();
        assert_close(angles.azimuth_deg, -90.0);
        assert_close(Heading::from_degrees(angles.azimuth_deg).unwrap().degrees(), 270.0);
    }

    #[test]
    fn upright_device_reports_pitch() {
        // Held upright: gravity along +y.
        let angles = EulerAngles::from_vectors([0.0, G, 0.0], [0.0, -20.0, 40.0]).unwrap();
        assert_close(angles.pitch_deg, -90.0);
    }

    #[test]
    fn degenerate_vectors_are_rejected() {
        assert!(EulerAngles::from_vectors([0.0, 0.0, 0.0], [0.0, 20.0, -40.0]).is_none());
        // Magnetic field parallel to gravity: no east direction.
        assert!(EulerAngles::from_vectors([0.0, 0.0, G], [0.0, 0.0, 40.0]).is_none());
        assert!(EulerAngles::from_vectors([f32::NAN, 0.0, G], [0.0, 20.0, -40.0]).is_none());
    }

    #[test]
    fn classification_thresholds_are_strict() {
        assert_eq!(classify_position(30.0, 0.0, 30.0, None), Position::Flat);
        assert_eq!(classify_position(30.1, 0.0, 30.0, None), Position::Portrait);
        assert_eq!(classify_position(0.0, -45.0, 30.0, None), Position::Landscape);
        assert_eq!(classify_position(-10.0, 10.0, 30.0, None), Position::Flat);
    }

    #[test]
    fn both_axes_tilted_larger_magnitude_wins() {
        assert_eq!(classify_position(60.0, 40.0, 30.0, None), Position::Portrait);
        assert_eq!(classify_position(40.0, -60.0, 30.0, None), Position::Landscape);
    }

    #[test]
    fn exact_tie_keeps_previous_tilt() {
        let tie = |previous| classify_position(45.0, 45.0, 30.0, previous);
        assert_eq!(tie(Some(Position::Landscape)), Position::Landscape);
        assert_eq!(tie(Some(Position::Portrait)), Position::Portrait);
        assert_eq!(tie(Some(Position::Flat)), Position::Portrait);
        assert_eq!(tie(None), Position::Portrait);
    }

    #[test]
    fn smoothing_moves_along_the_shortest_arc() {
        let config = CompassConfig {
            heading_smoothing: 0.5,
            ..CompassConfig::default()
        };
        let mut fusion = Fusion::default();
        let first = fusion
            .update(SensorSample::Angles(EulerAngles::new(350.0, 0.0, 0.0)), &config)
            .unwrap();
        assert_close(first.heading.degrees(), 350.0);

        let second = fusion
            .update(SensorSample::Angles(EulerAngles::new(10.0, 0.0, 0.0)), &config)
            .unwrap();
        assert_close(second.heading.degrees(), 0.0);

        fusion.reset();
        let after_reset = fusion
            .update(SensorSample::Angles(EulerAngles::new(90.0, 0.0, 0.0)), &config)
            .unwrap();
        assert_close(after_reset.heading.degrees(), 90.0);
    }

    #[test]
    fn non_finite_angles_are_dropped() {
        let mut fusion = Fusion::default();
        let sample = SensorSample::Angles(EulerAngles::new(f32::NAN, 0.0, 0.0));
        assert!(fusion.update(sample, &CompassConfig::raw()).is_none());
    }
}
