//! Evaluate a pose-frame stream against a guide.

use std::path::PathBuf;

use anyhow::Context;
use frameguide_common::clock::{ns_to_secs, RateController};
use frameguide_pose_model::{AlignmentVerdict, GuideMode};
use frameguide_processing_core::alignment::{AlignmentConfig, AlignmentEvaluator};
use serde::Serialize;

use crate::feedback;

#[derive(Serialize)]
struct VerdictRecord {
    t: u64,
    #[serde(flatten)]
    verdict: AlignmentVerdict,
}

pub fn run(
    input: PathBuf,
    guide: GuideMode,
    rate_hz: u32,
    alignment: AlignmentConfig,
    json: bool,
) -> anyhow::Result<()> {
    let frames = super::load_pose_frames(&input)
        .with_context(|| format!("Failed to load pose frames from {}", input.display()))?;
    let evaluator = AlignmentEvaluator::new(alignment);
    let mut rate = RateController::new(rate_hz);

    let mut last: Option<AlignmentVerdict> = None;
    let mut evaluated = 0usize;
    let mut aligned = 0usize;

    for frame in &frames {
        if !rate.should_tick(frame.timestamp_ns) {
            continue;
        }
        evaluated += 1;

        let verdict = evaluator.evaluate(&frame.landmarks, guide);
        if verdict.is_aligned() {
            aligned += 1;
        }
        if last != Some(verdict) {
            tracing::info!(t = frame.timestamp_ns, ?verdict, "Feedback changed");
            last = Some(verdict);
        }

        if json {
            let record = VerdictRecord {
                t: frame.timestamp_ns,
                verdict,
            };
            println!("{}", serde_json::to_string(&record)?);
        } else if verdict.is_shown() {
            println!(
                "{:>9.3}s  {}",
                ns_to_secs(frame.timestamp_ns),
                feedback::message(&verdict).unwrap_or_default()
            );
        }
    }

    if !json {
        println!();
        println!(
            "{} of {} frames evaluated ({} skipped by rate limit), {} aligned",
            evaluated,
            frames.len(),
            frames.len() - evaluated,
            aligned
        );
    }

    Ok(())
}
