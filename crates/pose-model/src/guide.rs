//! Guide modes: framing templates shown over the camera feed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The framing template selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideMode {
    /// No guide; alignment feedback is hidden.
    #[default]
    None,
    /// Single person.
    Portrait,
    /// Two people side by side.
    Couple,
    /// Several people.
    Group,
}

/// Open interval of acceptable shoulder-center heights (normalized Y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalBand {
    pub min: f64,
    pub max: f64,
}

impl VerticalBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Strict containment: the band edges themselves are outside.
    pub fn contains(&self, y: f64) -> bool {
        y > self.min && y < self.max
    }
}

/// Outline of the on-screen guide silhouette, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Silhouette {
    pub width: f64,
    pub height: f64,
    /// Radius of the two top corners.
    pub top_radius: f64,
    /// Radius of the two bottom corners.
    pub bottom_radius: f64,
}

const PORTRAIT_BAND: VerticalBand = VerticalBand::new(0.30, 0.60);
const WIDE_BAND: VerticalBand = VerticalBand::new(0.25, 0.65);

impl GuideMode {
    pub const ALL: [GuideMode; 4] = [
        GuideMode::None,
        GuideMode::Portrait,
        GuideMode::Couple,
        GuideMode::Group,
    ];

    /// Band the shoulder center must fall in for this guide.
    /// Group shares the wide band used for couples.
    pub fn vertical_band(self) -> Option<VerticalBand> {
        match self {
            GuideMode::None => None,
            GuideMode::Portrait => Some(PORTRAIT_BAND),
            GuideMode::Couple | GuideMode::Group => Some(WIDE_BAND),
        }
    }

    /// Silhouette drawn for this guide, if any.
    pub fn silhouette(self) -> Option<Silhouette> {
        let (width, height, top_radius, bottom_radius) = match self {
            GuideMode::None => return None,
            GuideMode::Portrait => (140.0, 280.0, 70.0, 50.0),
            GuideMode::Couple => (220.0, 280.0, 70.0, 50.0),
            GuideMode::Group => (300.0, 220.0, 20.0, 20.0),
        };
        Some(Silhouette {
            width,
            height,
            top_radius,
            bottom_radius,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GuideMode::None => "none",
            GuideMode::Portrait => "portrait",
            GuideMode::Couple => "couple",
            GuideMode::Group => "group",
        }
    }
}

impl fmt::Display for GuideMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuideMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        GuideMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownGuide(s.to_string()))
    }
}
