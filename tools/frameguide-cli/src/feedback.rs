//! Feedback text for alignment verdicts.
//!
//! The processing core only emits verdict tags; this is the display side.

use frameguide_pose_model::{AlignmentVerdict, HorizontalDirection, VerticalDirection};

/// Message shown for a verdict, or `None` when feedback is hidden.
pub fn message(verdict: &AlignmentVerdict) -> Option<&'static str> {
    let text = match verdict {
        AlignmentVerdict::Aligned => "Perfect!",
        AlignmentVerdict::NotVisible => "Place the person inside the frame",
        AlignmentVerdict::NotLevel => "Hold the camera level",
        AlignmentVerdict::OffCenterHorizontal { direction } => match direction {
            HorizontalDirection::Left => "Move a little to the left",
            HorizontalDirection::Right => "Move a little to the right",
        },
        AlignmentVerdict::OffCenterVertical { direction } => match direction {
            VerticalDirection::Up => "Move up",
            VerticalDirection::Down => "Move down",
        },
        AlignmentVerdict::Hidden => return None,
    };
    Some(text)
}
