//! Rate control for pose-result streams.
//!
//! Pose results arrive at the detector's own cadence, independent of
//! display refresh. Consumers that only need feedback at a fixed rate use
//! [`RateController`] to drop results that arrive too soon.

/// Monotonic timestamp in nanoseconds since stream start.
pub type TimestampNs = u64;

/// Convert a nanosecond timestamp to seconds.
pub fn ns_to_secs(ns: TimestampNs) -> f64 {
    ns as f64 / 1_000_000_000.0
}

/// Frame rate controller for result sampling.
#[derive(Debug)]
pub struct RateController {
    target_interval_ns: u64,
    last_tick_ns: Option<TimestampNs>,
}

impl RateController {
    /// Create a controller targeting the given Hz rate.
    /// A rate of zero disables throttling.
    pub fn new(target_hz: u32) -> Self {
        let target_interval_ns = match target_hz {
            0 => 0,
            hz => 1_000_000_000 / hz as u64,
        };
        Self {
            target_interval_ns,
            last_tick_ns: None,
        }
    }

    /// Check if enough time has passed for the next tick.
    /// Returns true and updates internal state if ready.
    /// The first call always returns true.
    pub fn should_tick(&mut self, current_ns: TimestampNs) -> bool {
        match self.last_tick_ns {
            None => {
                self.last_tick_ns = Some(current_ns);
                true
            }
            Some(last) if current_ns >= last.saturating_add(self.target_interval_ns) => {
                self.last_tick_ns = Some(current_ns);
                true
            }
            _ => false,
        }
    }

    /// Forget the last tick, so the next result is always accepted.
    pub fn reset(&mut self) {
        self.last_tick_ns = None;
    }

    /// Target interval in nanoseconds.
    pub fn interval_ns(&self) -> u64 {
        self.target_interval_ns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ns_to_secs_conversion() {
        assert!((ns_to_secs(1_500_000_000) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_rate_controller() {
        let mut ctrl = RateController::new(30);
        assert!(ctrl.should_tick(0)); // first tick always fires
        assert!(!ctrl.should_tick(10_000_000)); // 10ms later, too soon
        assert!(ctrl.should_tick(34_000_000)); // ~34ms later (30Hz ~ 33.3ms)
    }

    #[test]
    fn test_zero_rate_never_throttles() {
        let mut ctrl = RateController::new(0);
        assert_eq!(ctrl.interval_ns(), 0);
        assert!(ctrl.should_tick(5));
        assert!(ctrl.should_tick(5));
        assert!(ctrl.should_tick(6));
    }

    #[test]
    fn test_reset_accepts_next_tick() {
        let mut ctrl = RateController::new(1);
        assert!(ctrl.should_tick(0));
        assert!(!ctrl.should_tick(1_000));
        ctrl.reset();
        assert!(ctrl.should_tick(2_000));
    }
}
