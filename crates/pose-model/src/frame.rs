//! Pose frames: timestamped landmark sets from the pose source.
//!
//! Streams are stored as JSONL, one frame per line. Blank lines and lines
//! starting with `#` are ignored.

use serde::{Deserialize, Serialize};

use crate::landmark::LandmarkSet;

pub use frameguide_common::clock::TimestampNs;

/// One pose result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Monotonic nanoseconds since stream start.
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// Detected landmarks. Empty when the detector found no person.
    #[serde(default)]
    pub landmarks: LandmarkSet,
}

impl PoseFrame {
    pub fn new(timestamp_ns: TimestampNs, landmarks: LandmarkSet) -> Self {
        Self {
            timestamp_ns,
            landmarks,
        }
    }
}

/// Parse pose frames from JSONL content (one JSON object per line).
pub fn parse_pose_frames(jsonl: &str) -> Result<Vec<PoseFrame>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize pose frames to JSONL format.
pub fn serialize_pose_frames(frames: &[PoseFrame]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
