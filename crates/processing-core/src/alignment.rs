//! Pose-based alignment guidance.
//!
//! Reads the two shoulder landmarks of a pose result and decides whether
//! the subject sits inside the selected guide. Exactly one verdict is
//! produced per call, in a fixed order of precedence:
//!
//! 1. **Hidden** when no guide is selected.
//! 2. **NotVisible** when either shoulder is missing or low-confidence.
//! 3. **Aligned** when level, centered and inside the vertical band.
//! 4. **NotLevel**, then **OffCenterHorizontal**, then **OffCenterVertical**.
//!
//! Levelness outranks centering, and centering outranks the vertical band.
//! The evaluator keeps no state between calls.

use frameguide_pose_model::{
    AlignmentVerdict, GuideMode, HorizontalDirection, Landmark, LandmarkSet, Point2D,
    VerticalDirection,
};

/// Thresholds used by the alignment evaluator.
#[derive(Debug, Clone)]
pub struct AlignmentConfig {
    /// Shoulders with visibility below this are treated as not visible.
    pub visibility_threshold: f64,

    /// Maximum shoulder height difference (normalized) to count as level.
    pub level_tolerance: f64,

    /// Maximum distance of the shoulder center from the frame's vertical
    /// midline (normalized) to count as centered.
    pub center_tolerance: f64,

    /// Shoulder centers above this height are told to move down,
    /// below it up.
    pub vertical_split: f64,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.5,
            level_tolerance: 0.03,
            center_tolerance: 0.1,
            vertical_split: 0.4,
        }
    }
}

/// Measurements taken from the shoulders of one pose result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoulderMetrics {
    pub center_x: f64,
    pub center_y: f64,
    /// Absolute height difference between the shoulders.
    pub tilt: f64,
}

impl ShoulderMetrics {
    pub fn measure(left: &Landmark, right: &Landmark) -> Self {
        let center = Point2D::midpoint(&left.position(), &right.position());
        Self {
            center_x: center.x,
            center_y: center.y,
            tilt: (left.y - right.y).abs(),
        }
    }
}

/// The alignment evaluator.
pub struct AlignmentEvaluator {
    config: AlignmentConfig,
}

impl AlignmentEvaluator {
    /// Create a new evaluator with the given configuration.
    pub fn new(config: AlignmentConfig) -> Self {
        Self { config }
    }

    /// Create an evaluator with default thresholds.
    pub fn with_defaults() -> Self {
        Self::new(AlignmentConfig::default())
    }

    /// Evaluate one landmark set against a guide.
    pub fn evaluate(&self, landmarks: &LandmarkSet, guide: GuideMode) -> AlignmentVerdict {
        let Some(band) = guide.vertical_band() else {
            return AlignmentVerdict::Hidden;
        };

        let Some((left, right)) = landmarks.shoulders() else {
            tracing::trace!(len = landmarks.len(), "Landmark set has no shoulders");
            return AlignmentVerdict::NotVisible;
        };
        if left.visibility < self.config.visibility_threshold
            || right.visibility < self.config.visibility_threshold
        {
            return AlignmentVerdict::NotVisible;
        }

        let metrics = ShoulderMetrics::measure(left, right);
        let is_level = metrics.tilt < self.config.level_tolerance;
        let is_centered = (metrics.center_x - 0.5).abs() < self.config.center_tolerance;
        let is_in_band = band.contains(metrics.center_y);

        tracing::trace!(
            %guide,
            center_x = metrics.center_x,
            center_y = metrics.center_y,
            tilt = metrics.tilt,
            is_level,
            is_centered,
            is_in_band,
            "Evaluated shoulder alignment"
        );

        if is_level && is_centered && is_in_band {
            AlignmentVerdict::Aligned
        } else if !is_level {
            AlignmentVerdict::NotLevel
        } else if !is_centered {
            // The preview is shown mirrored, so a subject on the numeric left
            // is told to move right. Applied for both camera facings.
            let direction = if metrics.center_x < 0.5 {
                HorizontalDirection::Right
            } else {
                HorizontalDirection::Left
            };
            AlignmentVerdict::OffCenterHorizontal { direction }
        } else {
            let direction = if metrics.center_y < self.config.vertical_split {
                VerticalDirection::Down
            } else {
                VerticalDirection::Up
            };
            AlignmentVerdict::OffCenterVertical { direction }
        }
    }
}

#[cfg(test)]
mod tests {
    use frameguide_pose_model::BodyLandmark;
    use proptest::prelude::*;

    use super::*;

    fn shoulders(left: (f64, f64, f64), right: (f64, f64, f64)) -> LandmarkSet {
        LandmarkSet::from_body([
            (
                BodyLandmark::LeftShoulder,
                Landmark::new(left.0, left.1, left.2),
            ),
            (
                BodyLandmark::RightShoulder,
                Landmark::new(right.0, right.1, right.2),
            ),
        ])
    }

    fn eval(set: &LandmarkSet, guide: GuideMode) -> AlignmentVerdict {
        AlignmentEvaluator::with_defaults().evaluate(set, guide)
    }

    #[test]
    fn test_centered_portrait_is_aligned() {
        let set = shoulders((0.45, 0.50, 1.0), (0.55, 0.50, 1.0));
        assert_eq!(eval(&set, GuideMode::Portrait), AlignmentVerdict::Aligned);
        assert_eq!(eval(&set, GuideMode::Couple), AlignmentVerdict::Aligned);
    }

    #[test]
    fn test_no_guide_is_hidden() {
        let set = shoulders((0.45, 0.50, 1.0), (0.55, 0.50, 1.0));
        assert_eq!(eval(&set, GuideMode::None), AlignmentVerdict::Hidden);
        assert_eq!(
            eval(&LandmarkSet::default(), GuideMode::None),
            AlignmentVerdict::Hidden
        );
    }

    #[test]
    fn test_low_visibility_is_not_visible() {
        let set = shoulders((0.45, 0.50, 0.49), (0.55, 0.50, 1.0));
        for guide in [GuideMode::Portrait, GuideMode::Couple, GuideMode::Group] {
            assert_eq!(eval(&set, guide), AlignmentVerdict::NotVisible);
        }
    }

    #[test]
    fn test_visibility_at_threshold_counts_as_visible() {
        let set = shoulders((0.45, 0.50, 0.5), (0.55, 0.50, 0.5));
        assert_eq!(eval(&set, GuideMode::Portrait), AlignmentVerdict::Aligned);
    }

    #[test]
    fn test_missing_shoulders_is_not_visible() {
        assert_eq!(
            eval(&LandmarkSet::default(), GuideMode::Portrait),
            AlignmentVerdict::NotVisible
        );
        let short = LandmarkSet::new(vec![Landmark::new(0.5, 0.5, 1.0); 12]);
        assert_eq!(eval(&short, GuideMode::Couple), AlignmentVerdict::NotVisible);
    }

    #[test]
    fn test_subject_on_left_moves_right() {
        let set = shoulders((0.1, 0.5, 1.0), (0.2, 0.5, 1.0));
        assert_eq!(
            eval(&set, GuideMode::Portrait),
            AlignmentVerdict::OffCenterHorizontal {
                direction: HorizontalDirection::Right
            }
        );
    }

    #[test]
    fn test_subject_on_right_moves_left() {
        let set = shoulders((0.75, 0.5, 1.0), (0.85, 0.5, 1.0));
        assert_eq!(
            eval(&set, GuideMode::Couple),
            AlignmentVerdict::OffCenterHorizontal {
                direction: HorizontalDirection::Left
            }
        );
    }

    #[test]
    fn test_tilt_outranks_centering() {
        let set = shoulders((0.45, 0.3, 1.0), (0.55, 0.5, 1.0));
        assert_eq!(eval(&set, GuideMode::Portrait), AlignmentVerdict::NotLevel);

        // Tilted and off center: still NotLevel.
        let set = shoulders((0.05, 0.3, 1.0), (0.15, 0.5, 1.0));
        assert_eq!(eval(&set, GuideMode::Portrait), AlignmentVerdict::NotLevel);
    }

    #[test]
    fn test_centering_outranks_vertical_band() {
        let set = shoulders((0.1, 0.9, 1.0), (0.2, 0.9, 1.0));
        assert!(matches!(
            eval(&set, GuideMode::Portrait),
            AlignmentVerdict::OffCenterHorizontal { .. }
        ));
    }

    #[test]
    fn test_vertical_directions() {
        let high = shoulders((0.45, 0.2, 1.0), (0.55, 0.2, 1.0));
        assert_eq!(
            eval(&high, GuideMode::Portrait),
            AlignmentVerdict::OffCenterVertical {
                direction: VerticalDirection::Down
            }
        );

        let low = shoulders((0.45, 0.7, 1.0), (0.55, 0.7, 1.0));
        assert_eq!(
            eval(&low, GuideMode::Portrait),
            AlignmentVerdict::OffCenterVertical {
                direction: VerticalDirection::Up
            }
        );
    }

    #[test]
    fn test_couple_band_is_wider_than_portrait() {
        let set = shoulders((0.45, 0.27, 1.0), (0.55, 0.27, 1.0));
        assert!(matches!(
            eval(&set, GuideMode::Portrait),
            AlignmentVerdict::OffCenterVertical { .. }
        ));
        assert_eq!(eval(&set, GuideMode::Couple), AlignmentVerdict::Aligned);
        assert_eq!(eval(&set, GuideMode::Group), AlignmentVerdict::Aligned);
    }

    #[test]
    fn test_custom_thresholds() {
        let evaluator = AlignmentEvaluator::new(AlignmentConfig {
            level_tolerance: 0.25,
            ..AlignmentConfig::default()
        });
        let set = shoulders((0.45, 0.4, 1.0), (0.55, 0.6, 1.0));
        assert_eq!(
            evaluator.evaluate(&set, GuideMode::Portrait),
            AlignmentVerdict::Aligned
        );
    }

    proptest! {
        #[test]
        fn prop_hidden_without_guide(
            lx in 0.0f64..1.0, ly in 0.0f64..1.0, lv in 0.0f64..1.0,
            rx in 0.0f64..1.0, ry in 0.0f64..1.0, rv in 0.0f64..1.0,
        ) {
            let set = shoulders((lx, ly, lv), (rx, ry, rv));
            prop_assert_eq!(eval(&set, GuideMode::None), AlignmentVerdict::Hidden);
        }

        #[test]
        fn prop_low_visibility_never_gives_feedback(
            lx in 0.0f64..1.0, ly in 0.0f64..1.0,
            rx in 0.0f64..1.0, ry in 0.0f64..1.0,
            low in 0.0f64..0.4999, other in 0.0f64..1.0,
            left_is_low in any::<bool>(),
            guide_idx in 1usize..4,
        ) {
            let (lv, rv) = if left_is_low { (low, other) } else { (other, low) };
            let set = shoulders((lx, ly, lv), (rx, ry, rv));
            let guide = GuideMode::ALL[guide_idx];
            prop_assert_eq!(eval(&set, guide), AlignmentVerdict::NotVisible);
        }
    }
}
