//! Synthetic sensor for hosts without motion hardware.

use std::sync::Mutex;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::fusion::EulerAngles;
use crate::sensor::{MotionSensor, SampleSink, SensorSample};
use crate::CompassError;

/// Emits a slowly rotating heading with a gentle pitch sway on the ambient
/// tokio runtime.
pub struct SimulatedSensor {
    period: Duration,
    degrees_per_tick: f32,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl SimulatedSensor {
    pub fn new(period: Duration, degrees_per_tick: f32) -> Self {
        Self {
            period,
            degrees_per_tick,
            task: Mutex::new(None),
        }
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new(Duration::from_millis(50), 1.5)
    }
}

impl MotionSensor for SimulatedSensor {
    fn register(&self, sink: SampleSink) -> Result<(), CompassError> {
        let handle = Handle::try_current()
            .map_err(|_| CompassError::unavailable("simulated sensor needs a tokio runtime"))?;

        let period = self.period;
        let step = self.degrees_per_tick;
        let task = handle.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            let mut tick: u32 = 0;
            loop {
                ticker.tick().await;
                let t = tick as f32;
                let sway = (t / 40.0).sin() * 45.0;
                sink(SensorSample::Angles(EulerAngles::new(t * step, sway, 0.0)));
                tick = tick.wrapping_add(1);
            }
        });

        let previous = self
            .task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
        debug!("simulated sensor registered");
        Ok(())
    }

    fn unregister(&self) {
        let task = self
            .task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(task) = task {
            task.abort();
            debug!("simulated sensor unregistered");
        }
    }
}

impl Drop for SimulatedSensor {
    fn drop(&mut self) {
        self.unregister();
    }
}
