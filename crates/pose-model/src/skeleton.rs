//! Body skeleton topology for the pose overlay.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;
use crate::landmark::{BodyLandmark, LandmarkSet};

/// Landmarks below or at this visibility are not drawn.
pub const DEFAULT_OVERLAY_VISIBILITY: f64 = 0.5;

/// Bone connections drawn between body landmarks.
pub const SKELETON_CONNECTIONS: [(BodyLandmark, BodyLandmark); 12] = [
    // Shoulders and arms
    (BodyLandmark::LeftShoulder, BodyLandmark::RightShoulder),
    (BodyLandmark::LeftShoulder, BodyLandmark::LeftElbow),
    (BodyLandmark::LeftElbow, BodyLandmark::LeftWrist),
    (BodyLandmark::RightShoulder, BodyLandmark::RightElbow),
    (BodyLandmark::RightElbow, BodyLandmark::RightWrist),
    // Torso
    (BodyLandmark::LeftShoulder, BodyLandmark::LeftHip),
    (BodyLandmark::RightShoulder, BodyLandmark::RightHip),
    (BodyLandmark::LeftHip, BodyLandmark::RightHip),
    // Legs
    (BodyLandmark::LeftHip, BodyLandmark::LeftKnee),
    (BodyLandmark::LeftKnee, BodyLandmark::LeftAnkle),
    (BodyLandmark::RightHip, BodyLandmark::RightKnee),
    (BodyLandmark::RightKnee, BodyLandmark::RightAnkle),
];

/// A drawable bone between two visible landmarks (normalized coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: BodyLandmark,
    pub to: BodyLandmark,
    pub start: Point2D,
    pub end: Point2D,
}

/// A drawable joint (normalized coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub landmark: BodyLandmark,
    pub position: Point2D,
}

impl LandmarkSet {
    /// Bones whose two endpoints are both visible above `threshold`.
    pub fn visible_segments(&self, threshold: f64) -> Vec<Segment> {
        SKELETON_CONNECTIONS
            .iter()
            .filter_map(|&(from, to)| {
                let a = self.get(from).filter(|lm| lm.visibility > threshold)?;
                let b = self.get(to).filter(|lm| lm.visibility > threshold)?;
                Some(Segment {
                    from,
                    to,
                    start: a.position(),
                    end: b.position(),
                })
            })
            .collect()
    }

    /// Body joints visible above `threshold`.
    pub fn visible_joints(&self, threshold: f64) -> Vec<Joint> {
        BodyLandmark::ALL
            .into_iter()
            .filter(|&landmark| self.is_visible(landmark, threshold))
            .filter_map(|landmark| {
                self.get(landmark).map(|lm| Joint {
                    landmark,
                    position: lm.position(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::Landmark;

    fn upper_body() -> LandmarkSet {
        LandmarkSet::from_body([
            (BodyLandmark::LeftShoulder, Landmark::new(0.4, 0.4, 0.95)),
            (BodyLandmark::RightShoulder, Landmark::new(0.6, 0.4, 0.95)),
            (BodyLandmark::LeftElbow, Landmark::new(0.35, 0.55, 0.8)),
            // Exactly at the threshold: not drawn.
            (BodyLandmark::RightElbow, Landmark::new(0.65, 0.55, 0.5)),
        ])
    }

    #[test]
    fn test_segments_need_both_endpoints() {
        let segments = upper_body().visible_segments(DEFAULT_OVERLAY_VISIBILITY);
        let pairs: Vec<_> = segments.iter().map(|s| (s.from, s.to)).collect();
        assert_eq!(
            pairs,
            vec![
                (BodyLandmark::LeftShoulder, BodyLandmark::RightShoulder),
                (BodyLandmark::LeftShoulder, BodyLandmark::LeftElbow),
            ]
        );
        assert_eq!(segments[1].end, Point2D::new(0.35, 0.55));
    }

    #[test]
    fn test_joints() {
        let joints = upper_body().visible_joints(DEFAULT_OVERLAY_VISIBILITY);
        assert_eq!(joints.len(), 3);
        assert_eq!(joints[0].landmark, BodyLandmark::LeftShoulder);
    }

    #[test]
    fn test_empty_set_draws_nothing() {
        let empty = LandmarkSet::default();
        assert!(empty.visible_segments(0.0).is_empty());
        assert!(empty.visible_joints(0.0).is_empty());
    }
}
