//! Timestamp source for hosts whose native events carry no capture time.

use super::types::{PointSample, PointerId};
use web_time::Instant;

/// Monotonic millisecond clock anchored at construction.
#[derive(Clone, Copy, Debug)]
pub struct PointerClock {
    origin: Instant,
}

impl Default for PointerClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was created.
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    /// Stamps a position with the current time.
    pub fn sample(&self, id: PointerId, x: f32, y: f32) -> PointSample {
        PointSample::new(id, x, y, self.now_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_monotonic() {
        let clock = PointerClock::new();
        let first = clock.sample(0, 1.0, 2.0);
        let second = clock.sample(0, 1.0, 2.0);
        assert!(first.t >= 0.0);
        assert!(second.t >= first.t);
        assert_eq!(first.position(), second.position());
    }
}
