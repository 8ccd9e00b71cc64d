//! Monotonic timing utilities for animation frames.

/// Delay between two animation frames (about 60 fps).
pub const FRAME_MS: u64 = 16;

/// A point on a monotonic clock, in milliseconds since an arbitrary origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct InstantStamp {
    pub ms: f64,
}

impl InstantStamp {
    pub fn elapsed_since(self, earlier: InstantStamp) -> f64 {
        (self.ms - earlier.ms).max(0.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> InstantStamp {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    InstantStamp {
        ms: ORIGIN.elapsed().as_secs_f64() * 1000.0,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> InstantStamp {
    let ms = web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_default();
    InstantStamp { ms }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }

    #[test]
    fn elapsed_never_negative() {
        let earlier = InstantStamp { ms: 10.0 };
        let later = InstantStamp { ms: 25.5 };
        assert_eq!(later.elapsed_since(earlier), 15.5);
        assert_eq!(earlier.elapsed_since(later), 0.0);
    }
}
