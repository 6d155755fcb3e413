//! Alignment verdicts emitted once per evaluated pose result.
//!
//! Verdicts carry only a tag and a direction. Turning them into text or
//! visual state is the job of whatever UI consumes them.

use serde::{Deserialize, Serialize};

/// Which way the subject should move horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalDirection {
    Left,
    Right,
}

/// Which way the subject should move vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalDirection {
    Up,
    Down,
}

/// Result of evaluating one landmark set against a guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum AlignmentVerdict {
    /// Subject is framed correctly.
    Aligned,
    /// Shoulders are missing or below the confidence threshold.
    NotVisible,
    /// Shoulders are not horizontal.
    NotLevel,
    /// Subject is off center left-right.
    OffCenterHorizontal { direction: HorizontalDirection },
    /// Shoulder center is outside the guide's vertical band.
    OffCenterVertical { direction: VerticalDirection },
    /// No guide selected; feedback should not be shown.
    Hidden,
}

impl AlignmentVerdict {
    pub fn is_aligned(&self) -> bool {
        matches!(self, AlignmentVerdict::Aligned)
    }

    /// Whether the feedback indicator should be visible.
    pub fn is_shown(&self) -> bool {
        !matches!(self, AlignmentVerdict::Hidden)
    }
}
