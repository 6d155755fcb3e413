//! Plan the crop for a capture.

use frameguide_pose_model::{AspectRatio, PixelRect};
use frameguide_processing_core::crop::{self, CropPlan};
use serde::Serialize;

#[derive(Serialize)]
struct PlanReport {
    #[serde(flatten)]
    plan: CropPlan,
    pixels: PixelRect,
    /// Affine matrix for drawing into the output buffer.
    matrix: [f64; 6],
}

pub fn run(width: u32, height: u32, ratio: AspectRatio, mirror: bool) -> anyhow::Result<()> {
    let plan = crop::plan(width, height, ratio, mirror)
        .map_err(|e| anyhow::anyhow!("Failed to plan crop: {e}"))?;

    let pixels = plan.pixel_rect();
    let report = PlanReport {
        plan,
        pixels,
        matrix: plan.transform.matrix(f64::from(pixels.width)),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
