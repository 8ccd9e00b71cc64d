//! Device orientation ("compass") data source.
//!
//! A [`Compass`] turns raw motion-sensor samples into two continuously updated
//! readings:
//! - the heading, in degrees within `[0, 360)` (0 is North, 90 is East);
//! - the tilt [`Position`] of the device (flat, portrait or landscape).
//!
//! Readings are published through `tokio::sync::watch` channels so any number
//! of observers, on any executor, always see the latest value. Both readings
//! are `None` until the first sample arrives and keep their last value once the
//! compass is stopped.
//!
//! Sensors drain a lot of battery: callers must [`Compass::stop`] the compass
//! whenever its screen is not the active consumer.
//!
//! ```ignore
//! use compass::{Compass, CompassConfig, NoSensor};
//!
//! let compass = Compass::new(Box::new(NoSensor), CompassConfig::default());
//! let mut headings = compass.subscribe_orientation();
//! compass.start();
//! // ... headings.changed().await ...
//! compass.stop();
//! ```
//!
//! The crate has no UI toolkit dependency; `catalog-ui` bridges the channels
//! into Dioxus signals.

mod compass;
mod config;
mod error;
mod fusion;
mod reading;
mod sensor;

#[cfg(feature = "simulated")]
mod simulated;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use compass::{Compass, SensorHealth};
pub use config::CompassConfig;
pub use error::CompassError;
pub use fusion::{classify_position, EulerAngles};
pub use reading::{Heading, Position};
pub use sensor::{MotionSensor, NoSensor, SampleSink, SensorSample, Vector3};

/// Channel type of the published readings.
pub use tokio::sync::watch;

#[cfg(feature = "simulated")]
pub use simulated::SimulatedSensor;
