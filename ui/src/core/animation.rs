//! Timed tween for the catalog list width fraction.
//!
//! Only the interpolation lives here; frames are driven by the shell through
//! `core::timing`.

/// Easing curves available to a [`FractionTween`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic bezier (0.4, 0.0, 0.2, 1.0), the Material standard curve.
    FastOutSlowIn,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, progress: f32) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => progress,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, progress),
        }
    }
}

/// Evaluate a CSS-style cubic bezier at `x`. Both coordinates of the curve are
/// monotonic for control points within `[0, 1]`, so bisection on x is exact
/// enough and never overshoots.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    fn component(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    let (mut low, mut high) = (0.0f32, 1.0f32);
    let mut t = x;
    for _ in 0..32 {
        let current = component(x1, x2, t);
        if (current - x).abs() < 1e-6 {
            break;
        }
        if current < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }
    component(y1, y2, t).clamp(0.0, 1.0)
}

/// Interpolates a width fraction from `from` to `to` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionTween {
    pub from: f32,
    pub to: f32,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl FractionTween {
    pub fn new(from: f32, to: f32, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::FastOutSlowIn,
        }
    }

    pub fn is_noop(&self) -> bool {
        (self.from - self.to).abs() < f32::EPSILON
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.duration_ms == 0 || elapsed_ms >= self.duration_ms as f64
    }

    /// Value after `elapsed_ms`; always between `from` and `to`.
    pub fn value_at(&self, elapsed_ms: f64) -> f32 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let progress = (elapsed_ms.max(0.0) / self.duration_ms as f64) as f32;
        let eased = self.easing.apply(progress);
        let value = self.from + (self.to - self.from) * eased;
        value.clamp(self.from.min(self.to), self.from.max(self.to))
    }
}
