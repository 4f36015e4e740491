//! ETA estimation for the progress polling loop.

use std::time::{Duration, Instant};

/// Estimates remaining time from sampled completion fractions.
pub struct EtaCalculator {
    start_time: Instant,
}

impl EtaCalculator {
    /// Create a new calculator anchored at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Feed the latest completion fraction and get the estimated time
    /// remaining, when one can be computed.
    ///
    /// Fractions at or below 0, at or above 1, or without measurable
    /// elapsed time yield `None`.
    pub fn update(&mut self, fraction: f64) -> Option<Duration> {
        if fraction <= 0.0 || fraction >= 1.0 {
            return None;
        }

        let elapsed = self.start_time.elapsed().as_secs_f64();
        let remaining = elapsed / fraction - elapsed;
        if remaining > 0.0 && remaining.is_finite() {
            Some(Duration::from_secs_f64(remaining))
        } else {
            None
        }
    }

    /// Elapsed time since construction.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for EtaCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_estimate_at_bounds() {
        let mut eta = EtaCalculator::new();
        assert!(eta.update(0.0).is_none());
        assert!(eta.update(-0.5).is_none());
        assert!(eta.update(1.0).is_none());
        assert!(eta.update(1.5).is_none());
    }

    #[test]
    fn midway_estimate_is_positive() {
        let mut eta = EtaCalculator::new();
        std::thread::sleep(Duration::from_millis(10));
        let remaining = eta.update(0.5).unwrap();
        assert!(remaining > Duration::ZERO);
    }

    #[test]
    fn elapsed_increases() {
        let eta = EtaCalculator::new();
        std::thread::sleep(Duration::from_millis(5));
        assert!(eta.elapsed() >= Duration::from_millis(5));
    }
}
