//! Capture crop planning.
//!
//! A capture is cropped to the largest centered rectangle of the target
//! aspect ratio that fits in the source frame. The crop is always expressed
//! in the source's unmirrored coordinates; self-facing captures are flipped
//! only when drawn into the output buffer.
//!
//! [`fit_ratio`] is the single ratio-fitting routine. It is used here with
//! camera pixel dimensions and by [`crate::mask`] with the on-screen
//! container size.

use frameguide_common::{FrameguideError, FrameguideResult};
use frameguide_pose_model::{AspectRatio, FrameSize, PixelRect, Rect};
use serde::{Deserialize, Serialize};

/// Slack added before truncating to whole pixels, so that values like
/// `809.9999999` from float division still land on `810`.
const PIXEL_EPSILON: f64 = 1e-6;

/// How the cropped source is drawn into the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawTransform {
    Identity,
    /// Flip about the output's vertical centerline.
    HorizontalFlip,
}

impl DrawTransform {
    pub fn from_mirror(mirror: bool) -> Self {
        if mirror {
            DrawTransform::HorizontalFlip
        } else {
            DrawTransform::Identity
        }
    }

    /// Canvas-style affine matrix `[a, b, c, d, e, f]` for an output of the
    /// given width. The flip is `translate(width, 0)` then `scale(-1, 1)`.
    pub fn matrix(&self, output_width: f64) -> [f64; 6] {
        match self {
            DrawTransform::Identity => [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            DrawTransform::HorizontalFlip => [-1.0, 0.0, 0.0, 1.0, output_width, 0.0],
        }
    }

    /// Map an output-local x coordinate through the transform.
    pub fn map_x(&self, x: f64, output_width: f64) -> f64 {
        match self {
            DrawTransform::Identity => x,
            DrawTransform::HorizontalFlip => output_width - x,
        }
    }
}

/// The crop and draw transform for one capture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropPlan {
    /// Source frame width in pixels.
    pub source_width: u32,
    /// Source frame height in pixels.
    pub source_height: u32,
    /// Crop rectangle in source pixel coordinates (unmirrored).
    pub crop: Rect,
    pub transform: DrawTransform,
}

impl CropPlan {
    /// The crop in whole pixels.
    ///
    /// The size is truncated first and the margins are split from the
    /// truncated size, so the left and right (or top and bottom) margins
    /// differ by at most one pixel and the rectangle stays inside the frame.
    pub fn pixel_rect(&self) -> PixelRect {
        let truncate = |v: f64| (v + PIXEL_EPSILON).trunc().max(0.0) as u32;

        let width = truncate(self.crop.width).clamp(1, self.source_width.max(1));
        let height = truncate(self.crop.height).clamp(1, self.source_height.max(1));
        let x = self.source_width.saturating_sub(width) / 2;
        let y = self.source_height.saturating_sub(height) / 2;

        PixelRect {
            x,
            y,
            width,
            height,
        }
    }

    /// Size of the output buffer, `(width, height)` in pixels.
    pub fn output_size(&self) -> (u32, u32) {
        let rect = self.pixel_rect();
        (rect.width, rect.height)
    }

    /// Whether the output is drawn flipped.
    pub fn is_mirrored(&self) -> bool {
        self.transform == DrawTransform::HorizontalFlip
    }
}

/// Fit `ratio` into `frame`, centered.
///
/// A target narrower than the frame keeps the full height and splits the
/// horizontal margin evenly; otherwise the full width is kept and the
/// vertical margin is split. [`AspectRatio::Full`] returns the whole frame.
pub fn fit_ratio(frame: FrameSize, ratio: AspectRatio) -> FrameguideResult<Rect> {
    if !frame.is_valid() {
        return Err(FrameguideError::invalid_dimensions(frame.width, frame.height));
    }

    let target = match ratio
        .value()
        .map_err(|e| FrameguideError::invalid_ratio(e.to_string()))?
    {
        Some(target) => target,
        None => return Ok(frame.full_rect()),
    };

    if target < frame.aspect_ratio() {
        let width = frame.height * target;
        let margin = (frame.width - width) / 2.0;
        Ok(Rect::new(margin, 0.0, width, frame.height))
    } else {
        let height = frame.width / target;
        let margin = (frame.height - height) / 2.0;
        Ok(Rect::new(0.0, margin, frame.width, height))
    }
}

/// Plan the crop for a capture from a `source_width` × `source_height` frame.
///
/// Fails with [`FrameguideError::InvalidDimensions`] when either dimension
/// is zero and with [`FrameguideError::InvalidRatio`] when the ratio has
/// non-positive or non-finite units.
pub fn plan(
    source_width: u32,
    source_height: u32,
    ratio: AspectRatio,
    mirror: bool,
) -> FrameguideResult<CropPlan> {
    let crop = fit_ratio(FrameSize::pixels(source_width, source_height), ratio)?;
    let transform = DrawTransform::from_mirror(mirror);

    tracing::debug!(
        source_width,
        source_height,
        %ratio,
        mirror,
        crop_x = crop.x,
        crop_y = crop.y,
        crop_width = crop.width,
        crop_height = crop.height,
        "Planned capture crop"
    );

    Ok(CropPlan {
        source_width,
        source_height,
        crop,
        transform,
    })
}
