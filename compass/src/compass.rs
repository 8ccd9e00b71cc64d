use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::fusion::Fusion;
use crate::reading::{Heading, Position};
use crate::sensor::{MotionSensor, SampleSink, SensorSample};
use crate::CompassConfig;

/// Health of the underlying sensor feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorHealth {
    /// Not started, or stopped.
    #[default]
    Idle,
    /// Registered with the sensor; readings update as samples arrive.
    Running,
    /// The last `start()` could not register with the sensor.
    Unavailable,
}

/// Orientation and tilt data source with explicit lifecycle.
///
/// The compass exclusively owns its sensor backend. `start`/`stop` are
/// idempotent and may be called from any thread; readings are pushed to
/// subscribers through watch channels (last value wins).
pub struct Compass {
    sensor: Box<dyn MotionSensor>,
    shared: Arc<Shared>,
    lifecycle: Mutex<()>,
}

struct Shared {
    config: CompassConfig,
    gate: Mutex<Gate>,
    orientation: watch::Sender<Option<Heading>>,
    position: watch::Sender<Option<Position>>,
    health: watch::Sender<SensorHealth>,
}

/// Everything a sample callback needs to decide whether it may publish.
#[derive(Default)]
struct Gate {
    started: bool,
    generation: u64,
    fusion: Fusion,
}

impl Shared {
    fn gate(&self) -> MutexGuard<'_, Gate> {
        self.gate.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn accept(&self, generation: u64, sample: SensorSample) {
        let mut gate = self.gate();
        // Publishing under the gate lock is what makes `stop()` final.
        if !gate.started || gate.generation != generation {
            return;
        }
        let Some(reading) = gate.fusion.update(sample, &self.config) else {
            debug!("dropping degenerate sensor sample");
            return;
        };

        self.orientation.send_replace(Some(reading.heading));
        self.position.send_if_modified(|current| {
            if *current == Some(reading.position) {
                false
            } else {
                *current = Some(reading.position);
                true
            }
        });
    }
}

impl Compass {
    pub fn new(sensor: Box<dyn MotionSensor>, config: CompassConfig) -> Self {
        let config = config.validated().unwrap_or_else(|err| {
            warn!(%err, "falling back to default compass configuration");
            CompassConfig::default()
        });
        let (orientation, _) = watch::channel(None);
        let (position, _) = watch::channel(None);
        let (health, _) = watch::channel(SensorHealth::Idle);

        Self {
            sensor,
            shared: Arc::new(Shared {
                config,
                gate: Mutex::new(Gate::default()),
                orientation,
                position,
                health,
            }),
            lifecycle: Mutex::new(()),
        }
    }

    pub fn config(&self) -> CompassConfig {
        self.shared.config
    }

    /// Start receiving sensor samples. No-op when already started.
    ///
    /// Never fails: when the sensor cannot be registered the readings stay as
    /// they are and [`SensorHealth::Unavailable`] is published.
    pub fn start(&self) {
        let _lifecycle = self.lock_lifecycle();

        let generation = {
            let mut gate = self.shared.gate();
            if gate.started {
                return;
            }
            gate.started = true;
            gate.generation = gate.generation.wrapping_add(1);
            gate.fusion.reset();
            gate.generation
        };

        // Registered without holding the gate: backends may deliver a first
        // sample synchronously.
        let weak: Weak<Shared> = Arc::downgrade(&self.shared);
        let sink: SampleSink = Arc::new(move |sample| {
            if let Some(shared) = weak.upgrade() {
                shared.accept(generation, sample);
            }
        });

        match self.sensor.register(sink) {
            Ok(()) => {
                self.shared.health.send_replace(SensorHealth::Running);
                info!(generation, "compass started");
            }
            Err(err) => {
                self.shared.gate().started = false;
                self.shared.health.send_replace(SensorHealth::Unavailable);
                warn!(%err, "compass could not start; readings stay absent");
            }
        }
    }

    /// Stop receiving sensor samples. No-op when not started.
    ///
    /// Once this returns no further reading is published; the current
    /// readings are kept as they are.
    pub fn stop(&self) {
        let _lifecycle = self.lock_lifecycle();

        {
            let mut gate = self.shared.gate();
            if !gate.started {
                return;
            }
            gate.started = false;
        }

        self.sensor.unregister();
        self.shared.health.send_replace(SensorHealth::Idle);
        info!("compass stopped");
    }

    pub fn is_started(&self) -> bool {
        self.shared.gate().started
    }

    /// Latest heading, `None` before the first sample.
    pub fn orientation(&self) -> Option<Heading> {
        *self.shared.orientation.borrow()
    }

    /// Latest tilt position, `None` before the first sample.
    pub fn position(&self) -> Option<Position> {
        *self.shared.position.borrow()
    }

    pub fn health(&self) -> SensorHealth {
        *self.shared.health.borrow()
    }

    pub fn subscribe_orientation(&self) -> watch::Receiver<Option<Heading>> {
        self.shared.orientation.subscribe()
    }

    pub fn subscribe_position(&self) -> watch::Receiver<Option<Position>> {
        self.shared.position.subscribe()
    }

    pub fn subscribe_health(&self) -> watch::Receiver<SensorHealth> {
        self.shared.health.subscribe()
    }

    fn lock_lifecycle(&self) -> MutexGuard<'_, ()> {
        self.lifecycle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for Compass {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for Compass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compass")
            .field("started", &self.is_started())
            .field("orientation", &self.orientation())
            .field("position", &self.position())
            .field("health", &self.health())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSensor;
    use crate::EulerAngles;

    fn angles(azimuth: f32, pitch: f32, roll: f32) -> SensorSample {
        SensorSample::Angles(EulerAngles::new(azimuth, pitch, roll))
    }

    fn compass_with_fake() -> (Compass, FakeSensor) {
        let sensor = FakeSensor::new();
        let compass = Compass::new(Box::new(sensor.clone()), CompassConfig::raw());
        (compass, sensor)
    }

    #[test]
    fn readings_absent_before_first_sample() {
        let (compass, _sensor) = compass_with_fake();
        compass.start();
        assert_eq!(compass.orientation(), None);
        assert_eq!(compass.position(), None);
        assert_eq!(compass.health(), SensorHealth::Running);
    }

    #[test]
    fn samples_update_both_readings() {
        let (compass, sensor) = compass_with_fake();
        compass.start();
        sensor.emit(angles(-90.0, 5.0, 50.0));

        assert_eq!(compass.orientation().map(Heading::degrees), Some(270.0));
        assert_eq!(compass.position(), Some(Position::Landscape));
    }

    #[test]
    fn start_twice_registers_once() {
        let (compass, sensor) = compass_with_fake();
        compass.start();
        compass.start();
        assert_eq!(sensor.registration_count(), 1);
        assert!(sensor.is_registered());
    }

    #[test]
    fn stop_before_start_is_a_noop() {
        let (compass, sensor) = compass_with_fake();
        compass.stop();
        assert_eq!(sensor.unregistration_count(), 0);
        assert_eq!(compass.health(), SensorHealth::Idle);
    }

    #[test]
    fn stop_freezes_readings_and_ignores_stale_callbacks() {
        let (compass, sensor) = compass_with_fake();
        compass.start();
        sensor.emit(angles(12.0, 0.0, 0.0));
        compass.stop();
        compass.stop();

        sensor.emit_stale(angles(200.0, 80.0, 0.0));

        assert_eq!(compass.orientation().map(Heading::degrees), Some(12.0));
        assert_eq!(compass.position(), Some(Position::Flat));
        assert_eq!(sensor.unregistration_count(), 1);
        assert_eq!(compass.health(), SensorHealth::Idle);
    }

    #[test]
    fn restart_registers_again_and_ignores_old_generation() {
        let (compass, sensor) = compass_with_fake();
        compass.start();
        let first_sink = sensor.current_sink().expect("registered");
        compass.stop();
        compass.start();
        assert_eq!(sensor.registration_count(), 2);

        first_sink(angles(100.0, 0.0, 0.0));
        assert_eq!(compass.orientation(), None);

        sensor.emit(angles(100.0, 0.0, 0.0));
        assert_eq!(compass.orientation().map(Heading::degrees), Some(100.0));
    }

    #[test]
    fn unavailable_sensor_sets_health_without_failing() {
        let sensor = FakeSensor::unavailable();
        let compass = Compass::new(Box::new(sensor.clone()), CompassConfig::raw());
        compass.start();

        assert_eq!(compass.health(), SensorHealth::Unavailable);
        assert!(!compass.is_started());
        assert_eq!(compass.orientation(), None);
        assert_eq!(compass.position(), None);
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let config = CompassConfig {
            tilt_threshold_deg: -1.0,
            heading_smoothing: 1.0,
        };
        let compass = Compass::new(Box::new(FakeSensor::new()), config);
        assert_eq!(compass.config(), CompassConfig::default());
    }

    #[test]
    fn position_only_notifies_on_change() {
        let (compass, sensor) = compass_with_fake();
        let mut positions = compass.subscribe_position();
        compass.start();

        sensor.emit(angles(0.0, 0.0, 0.0));
        assert!(positions.has_changed().unwrap());
        positions.borrow_and_update();

        sensor.emit(angles(10.0, 1.0, 1.0));
        assert!(!positions.has_changed().unwrap());

        sensor.emit(angles(10.0, 70.0, 1.0));
        assert!(positions.has_changed().unwrap());
        assert_eq!(*positions.borrow_and_update(), Some(Position::Portrait));
    }

    #[test]
    fn dropping_the_compass_unregisters() {
        let (compass, sensor) = compass_with_fake();
        compass.start();
        drop(compass);
        assert!(!sensor.is_registered());
    }
}
