//! Ratio mask for the on-screen camera preview.
//!
//! The preview container shows bars outside the area that will be kept
//! after capture. The kept area comes from [`fit_ratio`] applied to the
//! container size, so the mask always agrees with the capture crop.

use frameguide_common::FrameguideResult;
use frameguide_pose_model::{AspectRatio, FrameSize};
use serde::{Deserialize, Serialize};

use crate::crop::fit_ratio;

/// Which edges of the container are masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskOrientation {
    /// Nothing is masked.
    None,
    /// Bars on the left and right.
    Pillarbox,
    /// Bars on the top and bottom.
    Letterbox,
}

/// Bar sizes for the preview container, in container units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LetterboxMask {
    pub orientation: MaskOrientation,
    /// Width of each side bar.
    pub side: f64,
    pub top: f64,
    pub bottom: f64,
}

impl LetterboxMask {
    pub const NONE: LetterboxMask = LetterboxMask {
        orientation: MaskOrientation::None,
        side: 0.0,
        top: 0.0,
        bottom: 0.0,
    };
}

/// Compute the preview mask for `ratio` inside a `container`.
pub fn letterbox_mask(
    container: FrameSize,
    ratio: AspectRatio,
) -> FrameguideResult<LetterboxMask> {
    let kept = fit_ratio(container, ratio)?;
    if ratio.is_full() {
        return Ok(LetterboxMask::NONE);
    }

    let mask = if kept.width < container.width {
        LetterboxMask {
            orientation: MaskOrientation::Pillarbox,
            side: kept.x,
            top: 0.0,
            bottom: 0.0,
        }
    } else {
        LetterboxMask {
            orientation: MaskOrientation::Letterbox,
            side: 0.0,
            top: kept.y,
            bottom: container.height - kept.bottom(),
        }
    };
    Ok(mask)
}
