//! Motion sensor backends.

use std::sync::Arc;

use crate::fusion::EulerAngles;
use crate::CompassError;

/// A raw 3-axis reading in device coordinates (x right, y up the screen, z out
/// of the screen).
pub type Vector3 = [f32; 3];

/// One sample delivered by a sensor backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorSample {
    /// Accelerometer (gravity) and magnetometer vectors taken at the same
    /// instant. Units do not matter, only directions.
    Vectors {
        gravity: Vector3,
        geomagnetic: Vector3,
    },
    /// Orientation already fused by the platform (rotation-vector sensors).
    Angles(EulerAngles),
}

/// Callback a backend invokes for every new sample, from any thread.
pub type SampleSink = Arc<dyn Fn(SensorSample) + Send + Sync>;

/// Hardware (or simulated) source of motion samples.
///
/// A backend only needs to honour one registration at a time: the owning
/// [`Compass`](crate::Compass) never registers twice without unregistering in
/// between.
pub trait MotionSensor: Send + Sync {
    /// Begin delivering samples to `sink`.
    fn register(&self, sink: SampleSink) -> Result<(), CompassError>;

    /// Stop delivering samples. Must be safe to call when not registered.
    fn unregister(&self);
}

/// Backend for hosts without motion sensors. Registration always fails with
/// [`CompassError::SensorUnavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSensor;

impl MotionSensor for NoSensor {
    fn register(&self, _sink: SampleSink) -> Result<(), CompassError> {
        Err(CompassError::unavailable("no motion sensor on this platform"))
    }

    fn unregister(&self) {}
}
