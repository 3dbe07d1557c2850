/// Millisecond clocks used to compute a node's elapsed time.
///
/// Time-driven shaders receive `(now - load_time) / 1000` seconds,
/// where `load_time` is read from the same clock when the node is created.

use std::sync::Mutex;
use std::time::Instant;

/// Monotonic millisecond time source
pub trait Clock: Send + Sync {
    /// Current time in milliseconds
    fn now_ms(&self) -> f64;
}

/// Wall clock based on `Instant`, starting at zero on creation.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually advanced clock (tests, offline rendering at a fixed frame rate).
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Mutex::new(start_ms) }
    }

    pub fn set(&self, now_ms: f64) {
        if let Ok(mut now) = self.now.lock() {
            *now = now_ms;
        }
    }

    pub fn advance(&self, delta_ms: f64) {
        if let Ok(mut now) = self.now.lock() {
            *now += delta_ms;
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.lock().map(|now| *now).unwrap_or(0.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
