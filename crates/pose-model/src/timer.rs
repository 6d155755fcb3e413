//! Self-timer delay before a capture.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Self-timer setting. A capture waits this long after the shutter is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfTimer {
    /// Capture immediately.
    #[default]
    Off,
    Three,
    Five,
    Ten,
}

impl SelfTimer {
    pub const ALL: [SelfTimer; 4] = [
        SelfTimer::Off,
        SelfTimer::Three,
        SelfTimer::Five,
        SelfTimer::Ten,
    ];

    /// Delay in whole seconds.
    pub fn seconds(self) -> u32 {
        match self {
            SelfTimer::Off => 0,
            SelfTimer::Three => 3,
            SelfTimer::Five => 5,
            SelfTimer::Ten => 10,
        }
    }

    pub fn from_seconds(seconds: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.seconds() == seconds)
    }

    pub fn is_off(self) -> bool {
        self == SelfTimer::Off
    }
}

impl fmt::Display for SelfTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelfTimer::Off => f.write_str("off"),
            timer => write!(f, "{}s", timer.seconds()),
        }
    }
}

impl FromStr for SelfTimer {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized == "off" {
            return Ok(SelfTimer::Off);
        }
        normalized
            .strip_suffix('s')
            .unwrap_or(normalized.as_str())
            .parse::<u32>()
            .ok()
            .and_then(SelfTimer::from_seconds)
            .ok_or_else(|| ModelError::UnknownTimer(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timer_values() {
        assert_eq!("off".parse::<SelfTimer>().unwrap(), SelfTimer::Off);
        assert_eq!("0".parse::<SelfTimer>().unwrap(), SelfTimer::Off);
        assert_eq!("3".parse::<SelfTimer>().unwrap(), SelfTimer::Three);
        assert_eq!(" 10S ".parse::<SelfTimer>().unwrap(), SelfTimer::Ten);
        assert!(matches!(
            "7".parse::<SelfTimer>(),
            Err(ModelError::UnknownTimer(_))
        ));
        assert!("soon".parse::<SelfTimer>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for timer in SelfTimer::ALL {
            assert_eq!(timer.to_string().parse::<SelfTimer>().unwrap(), timer);
        }
        assert_eq!(SelfTimer::Five.to_string(), "5s");
    }
}
