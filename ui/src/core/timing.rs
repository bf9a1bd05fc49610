//! Frame clock for the animation loop.

/// Target frame interval for the spring loop (~60 Hz).
pub const FRAME_MS: u64 = 16;

/// Monotonic milliseconds since an arbitrary origin.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    ORIGIN.elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Tracks the time between successive animation ticks.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_ms: f64,
}

impl FrameClock {
    pub fn start() -> Self {
        Self { last_ms: now_ms() }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f64 {
        let now = now_ms();
        self.tick_at(now)
    }

    fn tick_at(&mut self, now: f64) -> f64 {
        let dt = ((now - self.last_ms) / 1000.0).max(0.0);
        self.last_ms = now;
        dt
    }
}
