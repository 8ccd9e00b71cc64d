//! Test doubles for code that drives a [`Compass`](crate::Compass).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::sensor::{MotionSensor, SampleSink, SensorSample};
use crate::CompassError;

/// Manually driven sensor that counts registrations.
///
/// Clones share state, so a test keeps one handle while the compass owns
/// another.
#[derive(Clone, Default)]
pub struct FakeSensor {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    unavailable: bool,
    registrations: AtomicUsize,
    unregistrations: AtomicUsize,
    active: Mutex<Option<SampleSink>>,
    last: Mutex<Option<SampleSink>>,
}

impl FakeSensor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sensor whose registration always fails.
    pub fn unavailable() -> Self {
        Self {
            inner: Arc::new(Inner {
                unavailable: true,
                ..Inner::default()
            }),
        }
    }

    pub fn registration_count(&self) -> usize {
        self.inner.registrations.load(Ordering::SeqCst)
    }

    pub fn unregistration_count(&self) -> usize {
        self.inner.unregistrations.load(Ordering::SeqCst)
    }

    pub fn is_registered(&self) -> bool {
        lock(&self.inner.active).is_some()
    }

    pub fn current_sink(&self) -> Option<SampleSink> {
        lock(&self.inner.active).clone()
    }

    /// Deliver a sample to the registered sink, if any.
    pub fn emit(&self, sample: SensorSample) {
        let sink = lock(&self.inner.active).clone();
        if let Some(sink) = sink {
            sink(sample);
        }
    }

    /// Deliver a sample to the most recent sink even after unregistration,
    /// the way a late hardware callback would.
    pub fn emit_stale(&self, sample: SensorSample) {
        let sink = lock(&self.inner.last).clone();
        if let Some(sink) = sink {
            sink(sample);
        }
    }
}

impl MotionSensor for FakeSensor {
    fn register(&self, sink: SampleSink) -> Result<(), CompassError> {
        if self.inner.unavailable {
            return Err(CompassError::unavailable("fake sensor configured as missing"));
        }
        self.inner.registrations.fetch_add(1, Ordering::SeqCst);
        *lock(&self.inner.last) = Some(sink.clone());
        *lock(&self.inner.active) = Some(sink);
        Ok(())
    }

    fn unregister(&self) {
        if lock(&self.inner.active).take().is_some() {
            self.inner.unregistrations.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
