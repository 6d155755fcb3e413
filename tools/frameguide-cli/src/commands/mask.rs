//! Compute the preview ratio mask for a container.

use frameguide_pose_model::{AspectRatio, FrameSize};
use frameguide_processing_core::mask::letterbox_mask;

pub fn run(width: f64, height: f64, ratio: AspectRatio) -> anyhow::Result<()> {
    let mask = letterbox_mask(FrameSize::new(width, height), ratio)
        .map_err(|e| anyhow::anyhow!("Failed to compute mask: {e}"))?;

    println!("{}", serde_json::to_string_pretty(&mask)?);
    Ok(())
}
