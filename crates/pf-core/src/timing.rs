//! Lightweight wall-clock timing for search bodies.

use std::time::{Duration, Instant};

/// A simple timer that measures elapsed time.
#[derive(Debug)]
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Time elapsed so far without stopping.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the elapsed time.
    pub fn stop(self) -> Duration {
        let elapsed = self.start.elapsed();
        tracing::trace!(
            label = self.label,
            elapsed_ms = elapsed.as_secs_f64() * 1e3,
            "timer stopped"
        );
        elapsed
    }
}

/// Convert a duration to fractional milliseconds for reporting.
pub fn as_millis_f64(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}
