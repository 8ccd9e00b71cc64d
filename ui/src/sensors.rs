//! Platform sensor registration.
//!
//! Platform crates register a factory for their motion-sensor backend before
//! launching (the same pattern as any other launch-time wiring). When nothing
//! is registered every compass screen gets [`compass::NoSensor`] and renders
//! its "unavailable" state.

use compass::{MotionSensor, NoSensor};
use once_cell::sync::OnceCell;

pub type SensorFactory = fn() -> Box<dyn MotionSensor>;

static SENSOR_FACTORY: OnceCell<SensorFactory> = OnceCell::new();

/// Register the backend used by compass screens. Only the first registration
/// is kept.
pub fn register_sensor(factory: SensorFactory) {
    if SENSOR_FACTORY.set(factory).is_err() {
        tracing::debug!("sensor factory already registered; keeping the first one");
    }
}

/// A fresh backend for one compass instance.
pub fn create_sensor() -> Box<dyn MotionSensor> {
    match SENSOR_FACTORY.get() {
        Some(factory) => factory(),
        None => Box::new(NoSensor),
    }
}
