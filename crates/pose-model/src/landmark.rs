//! Body landmarks produced by the external pose source.
//!
//! The pose source emits a fixed-length list of landmarks per frame. Only
//! the body landmarks in the 11–28 range are consumed here, and they are
//! addressed through [`BodyLandmark`] instead of raw integers.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;

/// Number of landmarks emitted per frame by the pose source.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// A single detected anatomical point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized X coordinate [0.0, 1.0].
    pub x: f64,
    /// Normalized Y coordinate [0.0, 1.0].
    pub y: f64,
    /// Detection confidence [0.0, 1.0]. Missing values mean "not seen".
    #[serde(default)]
    pub visibility: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, visibility: f64) -> Self {
        Self { x, y, visibility }
    }

    /// A landmark the detector did not see.
    pub fn hidden() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Named body landmarks, valued by their index in the pose source's scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyLandmark {
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
}

impl BodyLandmark {
    /// Every body landmark, in index order.
    pub const ALL: [BodyLandmark; 12] = [
        BodyLandmark::LeftShoulder,
        BodyLandmark::RightShoulder,
        BodyLandmark::LeftElbow,
        BodyLandmark::RightElbow,
        BodyLandmark::LeftWrist,
        BodyLandmark::RightWrist,
        BodyLandmark::LeftHip,
        BodyLandmark::RightHip,
        BodyLandmark::LeftKnee,
        BodyLandmark::RightKnee,
        BodyLandmark::LeftAnkle,
        BodyLandmark::RightAnkle,
    ];

    /// Index of this landmark in the pose source's output.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The landmarks detected in one frame, in pose-source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Build a full-length set where only the given body landmarks were seen.
    pub fn from_body<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (BodyLandmark, Landmark)>,
    {
        let mut landmarks = vec![Landmark::hidden(); POSE_LANDMARK_COUNT];
        for (body, landmark) in points {
            landmarks[body.index()] = landmark;
        }
        Self { landmarks }
    }

    /// The landmark for a body point, or `None` if the set is too short.
    pub fn get(&self, landmark: BodyLandmark) -> Option<&Landmark> {
        self.landmarks.get(landmark.index())
    }

    /// Left and right shoulders, if both are present.
    pub fn shoulders(&self) -> Option<(&Landmark, &Landmark)> {
        Some((
            self.get(BodyLandmark::LeftShoulder)?,
            self.get(BodyLandmark::RightShoulder)?,
        ))
    }

    /// Whether a body point is present with visibility strictly above `threshold`.
    pub fn is_visible(&self, landmark: BodyLandmark, threshold: f64) -> bool {
        self.get(landmark).is_some_and(|lm| lm.visibility > threshold)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_indices_match_pose_scheme() {
        assert_eq!(BodyLandmark::LeftShoulder.index(), 11);
        assert_eq!(BodyLandmark::RightWrist.index(), 16);
        assert_eq!(BodyLandmark::LeftHip.index(), 23);
        assert_eq!(BodyLandmark::RightAnkle.index(), 28);
        assert!(BodyLandmark::ALL
            .windows(2)
            .all(|pair| pair[0].index() < pair[1].index()));
    }

    #[test]
    fn test_from_body_places_landmarks() {
        let set = LandmarkSet::from_body([(
            BodyLandmark::RightShoulder,
            Landmark::new(0.6, 0.4, 0.9),
        )]);
        assert_eq!(set.len(), POSE_LANDMARK_COUNT);
        assert_eq!(set.as_slice()[12], Landmark::new(0.6, 0.4, 0.9));
        assert_eq!(set.get(BodyLandmark::LeftShoulder), Some(&Landmark::hidden()));
    }

    #[test]
    fn test_short_set_has_no_shoulders() {
        let set = LandmarkSet::new(vec![Landmark::new(0.5, 0.5, 1.0); 12]);
        assert!(set.get(BodyLandmark::LeftShoulder).is_some());
        assert!(set.shoulders().is_none());
        assert!(!set.is_visible(BodyLandmark::RightShoulder, 0.5));
    }

    #[test]
    fn test_visibility_threshold_is_strict() {
        let set =
            LandmarkSet::from_body([(BodyLandmark::LeftKnee, Landmark::new(0.5, 0.8, 0.5))]);
        assert!(!set.is_visible(BodyLandmark::LeftKnee, 0.5));
        assert!(set.is_visible(BodyLandmark::LeftKnee, 0.49));
    }

    #[test]
    fn test_deserialize_ignores_depth_and_defaults_visibility() {
        let set: LandmarkSet =
            serde_json::from_str(r#"[{"x": 0.1, "y": 0.2, "z": -0.3}]"#).unwrap();
        assert_eq!(set.as_slice()[0], Landmark::new(0.1, 0.2, 0.0));
    }
}
