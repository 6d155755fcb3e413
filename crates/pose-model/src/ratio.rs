//! Target aspect ratios for captured photos.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Target aspect ratio, written `W:H` (e.g. `3:4`) or `full`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AspectRatio {
    /// Keep the whole source frame; no cropping.
    Full,
    /// Crop to `width:height` units.
    Fixed { width: f64, height: f64 },
}

impl AspectRatio {
    pub const SQUARE: AspectRatio = AspectRatio::Fixed {
        width: 1.0,
        height: 1.0,
    };
    pub const PORTRAIT_3_4: AspectRatio = AspectRatio::Fixed {
        width: 3.0,
        height: 4.0,
    };
    pub const STORY_9_16: AspectRatio = AspectRatio::Fixed {
        width: 9.0,
        height: 16.0,
    };

    /// Build a fixed ratio, rejecting non-positive or non-finite units and
    /// unit pairs whose quotient overflows or underflows.
    pub fn new(width: f64, height: f64) -> Result<Self, ModelError> {
        let ratio = AspectRatio::Fixed { width, height };
        ratio.value()?;
        Ok(ratio)
    }

    /// `width / height`, or `None` for [`AspectRatio::Full`].
    ///
    /// Units are validated on every call because `Fixed` can be built
    /// directly; an invalid ratio is never replaced by a default.
    pub fn value(&self) -> Result<Option<f64>, ModelError> {
        match *self {
            AspectRatio::Full => Ok(None),
            AspectRatio::Fixed { width, height } => {
                if !(width.is_finite() && height.is_finite()) {
                    return Err(ModelError::invalid_ratio(
                        self.to_string(),
                        "units must be finite",
                    ));
                }
                if width <= 0.0 || height <= 0.0 {
                    return Err(ModelError::invalid_ratio(
                        self.to_string(),
                        "units must be positive",
                    ));
                }
                let value = width / height;
                if !value.is_finite() || value <= 0.0 {
                    return Err(ModelError::invalid_ratio(
                        self.to_string(),
                        "width / height must be finite and positive",
                    ));
                }
                Ok(Some(value))
            }
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, AspectRatio::Full)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatio::Full => f.write_str("full"),
            AspectRatio::Fixed { width, height } => write!(f, "{width}:{height}"),
        }
    }
}

impl FromStr for AspectRatio {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("full") {
            return Ok(AspectRatio::Full);
        }

        let (w, h) = trimmed
            .split_once(':')
            .ok_or_else(|| ModelError::invalid_ratio(s, "expected W:H or 'full'"))?;
        let parse_units = |units: &str| {
            units
                .trim()
                .parse::<f64>()
                .map_err(|e| ModelError::invalid_ratio(s, e.to_string()))
        };
        AspectRatio::new(parse_units(w)?, parse_units(h)?)
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(ratio: AspectRatio) -> Self {
        ratio.to_string()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_presets() {
        assert_eq!("3:4".parse::<AspectRatio>().unwrap(), AspectRatio::PORTRAIT_3_4);
        assert_eq!("9:16".parse::<AspectRatio>().unwrap(), AspectRatio::STORY_9_16);
        assert_eq!("FULL".parse::<AspectRatio>().unwrap(), AspectRatio::Full);
        assert_eq!(
            " 1.91 : 1 ".parse::<AspectRatio>().unwrap(),
            AspectRatio::Fixed {
                width: 1.91,
                height: 1.0
            }
        );
    }

    #[test]
    fn test_value() {
        assert_eq!(AspectRatio::Full.value().unwrap(), None);
        let v = AspectRatio::PORTRAIT_3_4.value().unwrap().unwrap();
        assert!((v - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_units() {
        assert!(matches!(
            AspectRatio::new(0.0, 4.0),
            Err(ModelError::InvalidRatio { .. })
        ));
        assert!(AspectRatio::new(3.0, -4.0).is_err());
        assert!(AspectRatio::new(f64::INFINITY, 1.0).is_err());
        assert!("3:0".parse::<AspectRatio>().is_err());
        assert!("3x4".parse::<AspectRatio>().is_err());
        assert!("a:4".parse::<AspectRatio>().is_err());

        let direct = AspectRatio::Fixed {
            width: 3.0,
            height: 0.0,
        };
        assert!(direct.value().is_err());
    }

    #[test]
    fn test_rejects_degenerate_quotients() {
        assert!(matches!(
            AspectRatio::new(1e300, 1e-300),
            Err(ModelError::InvalidRatio { .. })
        ));
        assert!(AspectRatio::new(1e-300, 1e300).is_err());
        assert!("1e300:1e-300".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_serde_uses_ratio_strings() {
        let json = serde_json::to_string(&AspectRatio::STORY_9_16).unwrap();
        assert_eq!(json, "\"9:16\"");
        let parsed: AspectRatio = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(parsed, AspectRatio::Full);
        assert!(serde_json::from_str::<AspectRatio>("\"-1:2\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_positive_units_are_accepted(w in 0.001f64..1000.0, h in 0.001f64..1000.0) {
            let ratio = AspectRatio::new(w, h).unwrap();
            prop_assert_eq!(ratio.value().unwrap(), Some(w / h));
        }

        #[test]
        fn prop_non_positive_units_are_rejected(w in -1000.0f64..=0.0, h in 0.001f64..1000.0) {
            prop_assert!(AspectRatio::new(w, h).is_err());
            prop_assert!(AspectRatio::new(h, w).is_err());
        }
    }
}
