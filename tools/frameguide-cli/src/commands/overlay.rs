//! Skeleton overlay for each pose frame, in canvas pixels.

use std::path::PathBuf;

use anyhow::Context;
use frameguide_pose_model::{FrameSize, Point2D, DEFAULT_OVERLAY_VISIBILITY};
use serde::Serialize;

#[derive(Serialize)]
struct OverlayRecord {
    t: u64,
    lines: Vec<[Point2D; 2]>,
    points: Vec<Point2D>,
}

pub fn run(input: PathBuf, width: u32, height: u32) -> anyhow::Result<()> {
    let canvas = FrameSize::pixels(width, height);
    if !canvas.is_valid() {
        anyhow::bail!("Overlay canvas must be non-empty, got {width}x{height}");
    }

    let frames = super::load_pose_frames(&input)
        .with_context(|| format!("Failed to load pose frames from {}", input.display()))?;

    for frame in frames {
        let lines = frame
            .landmarks
            .visible_segments(DEFAULT_OVERLAY_VISIBILITY)
            .iter()
            .map(|s| [s.start.scaled(canvas), s.end.scaled(canvas)])
            .collect();
        let points = frame
            .landmarks
            .visible_joints(DEFAULT_OVERLAY_VISIBILITY)
            .iter()
            .map(|j| j.position.scaled(canvas))
            .collect();

        let record = OverlayRecord {
            t: frame.timestamp_ns,
            lines,
            points,
        };
        println!("{}", serde_json::to_string(&record)?);
    }

    Ok(())
}
