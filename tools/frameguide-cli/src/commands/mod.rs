//! Subcommand implementations.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use frameguide_common::config::AppConfig;
use frameguide_common::{FrameguideError, FrameguideResult};
use frameguide_pose_model::{
    parse_pose_frames, AspectRatio, CameraFacing, GuideMode, PoseFrame, SelfTimer,
};
use frameguide_processing_core::alignment::AlignmentConfig;

pub mod config;
pub mod countdown;
pub mod evaluate;
pub mod guide;
pub mod level;
pub mod mask;
pub mod overlay;
pub mod plan;

/// Use the command-line value, or parse the configured default for `key`.
fn resolve<T>(arg: Option<T>, key: &str, configured: &str) -> FrameguideResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match arg {
        Some(value) => Ok(value),
        None => configured
            .parse()
            .map_err(|e| FrameguideError::config(format!("capture.{key}: {e}"))),
    }
}

pub fn resolve_guide(arg: Option<GuideMode>, config: &AppConfig) -> FrameguideResult<GuideMode> {
    resolve(arg, "guide", &config.capture.guide)
}

pub fn resolve_ratio(
    arg: Option<AspectRatio>,
    config: &AppConfig,
) -> FrameguideResult<AspectRatio> {
    resolve(arg, "ratio", &config.capture.ratio)
}

pub fn resolve_facing(
    arg: Option<CameraFacing>,
    config: &AppConfig,
) -> FrameguideResult<CameraFacing> {
    resolve(arg, "camera_facing", &config.capture.camera_facing)
}

pub fn resolve_timer(arg: Option<SelfTimer>, config: &AppConfig) -> FrameguideResult<SelfTimer> {
    resolve(arg, "timer", &config.capture.timer)
}

/// Alignment thresholds, with any value not given on the command line
/// taken from the evaluator defaults.
pub fn resolve_alignment(
    visibility_threshold: Option<f64>,
    level_tolerance: Option<f64>,
    center_tolerance: Option<f64>,
    vertical_split: Option<f64>,
) -> AlignmentConfig {
    let defaults = AlignmentConfig::default();
    AlignmentConfig {
        visibility_threshold: visibility_threshold.unwrap_or(defaults.visibility_threshold),
        level_tolerance: level_tolerance.unwrap_or(defaults.level_tolerance),
        center_tolerance: center_tolerance.unwrap_or(defaults.center_tolerance),
        vertical_split: vertical_split.unwrap_or(defaults.vertical_split),
    }
}

/// Read pose frames from a JSONL file, or from stdin when the path is `-`.
pub fn load_pose_frames(input: &Path) -> FrameguideResult<Vec<PoseFrame>> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };

    let frames = parse_pose_frames(&content).map_err(|e| {
        FrameguideError::parse(format!("pose frames in {}: {e}", input.display()))
    })?;
    tracing::debug!(count = frames.len(), "Loaded pose frames");
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_configured_ratio_is_a_config_error() {
        let mut config = AppConfig::default();
        config.capture.ratio = "3x4".to_string();
        let err = resolve_ratio(None, &config).unwrap_err();
        assert!(matches!(err, FrameguideError::Config { .. }));
        assert!(err.to_string().contains("capture.ratio"));

        // A value given on the command line wins over a broken default.
        assert_eq!(
            resolve_ratio(Some(AspectRatio::SQUARE), &config).unwrap(),
            AspectRatio::SQUARE
        );
    }

    #[test]
    fn test_configured_defaults_resolve() {
        let config = AppConfig::default();
        assert_eq!(resolve_guide(None, &config).unwrap(), GuideMode::None);
        assert_eq!(
            resolve_facing(None, &config).unwrap(),
            CameraFacing::Environment
        );
        assert_eq!(resolve_timer(None, &config).unwrap(), SelfTimer::Off);

        let mut config = AppConfig::default();
        config.capture.guide = "crowd".to_string();
        assert!(matches!(
            resolve_guide(None, &config),
            Err(FrameguideError::Config { .. })
        ));
    }

    #[test]
    fn test_alignment_overrides_fill_from_defaults() {
        let defaults = AlignmentConfig::default();
        let config = resolve_alignment(None, Some(0.2), None, Some(0.45));
        assert_eq!(config.visibility_threshold, defaults.visibility_threshold);
        assert_eq!(config.level_tolerance, 0.2);
        assert_eq!(config.center_tolerance, defaults.center_tolerance);
        assert_eq!(config.vertical_split, 0.45);
    }

    #[test]
    fn test_malformed_pose_frames_are_a_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "frameguide-cli-frames-{}.jsonl",
            std::process::id()
        ));
        std::fs::write(&path, "{\"t\": \"later\"}\n").unwrap();
        let err = load_pose_frames(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, FrameguideError::Parse { .. }));

        let missing = Path::new("/nonexistent/frameguide/frames.jsonl");
        assert!(matches!(
            load_pose_frames(missing),
            Err(FrameguideError::Io(_))
        ));
    }
}
