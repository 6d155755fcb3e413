//! Bubble-level reading from device orientation.
//!
//! Orientation angles follow the device-orientation convention: `beta` is
//! front-to-back tilt and `gamma` is left-to-right tilt, both in degrees.
//! A phone held upright in portrait reads `beta = 90`, `gamma = 0`.

use serde::{Deserialize, Serialize};

/// Thresholds for the level indicator.
#[derive(Debug, Clone)]
pub struct LevelConfig {
    /// Tilt (degrees) at which the bubble reaches its travel limit.
    pub max_tilt_degrees: f64,

    /// Bubble travel from center, in percent of the indicator width.
    pub bubble_travel_percent: f64,

    /// Maximum |gamma| (degrees) to count as level.
    pub roll_tolerance_degrees: f64,

    /// Maximum |beta - 90| (degrees) to count as upright.
    pub pitch_tolerance_degrees: f64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            max_tilt_degrees: 45.0,
            bubble_travel_percent: 40.0,
            roll_tolerance_degrees: 3.0,
            pitch_tolerance_degrees: 10.0,
        }
    }
}

/// What the level indicator should show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelReading {
    /// Horizontal bubble position, in percent of the indicator width.
    pub bubble_percent: f64,
    pub is_level: bool,
}

impl LevelReading {
    /// Build a reading from orientation angles. Missing angles read as 0.
    pub fn from_orientation(beta: Option<f64>, gamma: Option<f64>, config: &LevelConfig) -> Self {
        let beta = beta.filter(|v| v.is_finite()).unwrap_or(0.0);
        let gamma = gamma.filter(|v| v.is_finite()).unwrap_or(0.0);

        let limit = config.max_tilt_degrees;
        let clamped = gamma.clamp(-limit, limit);
        let bubble_percent = 50.0 + (clamped / limit) * config.bubble_travel_percent;

        let is_level = gamma.abs() < config.roll_tolerance_degrees
            && (beta - 90.0).abs() < config.pitch_tolerance_degrees;

        Self {
            bubble_percent,
            is_level,
        }
    }
}
