//! Frameguide Processing Core: alignment guidance and capture geometry
//!
//! Turns pose results and capture requests into decisions:
//! - **Alignment:** Evaluate shoulder landmarks against a guide and emit a verdict
//! - **Crop Planning:** Fit a target aspect ratio into a source frame, with mirroring
//! - **Ratio Masks:** Letterbox bars for the on-screen preview container
//! - **Level:** Bubble-level reading from device orientation
//! - **Countdown:** Self-timer schedule before a capture
//!
//! This crate is pure computation with no I/O or platform dependencies.
//! All inputs are data; all outputs are data.

pub mod alignment;
pub mod countdown;
pub mod crop;
pub mod level;
pub mod mask;

pub use alignment::{AlignmentConfig, AlignmentEvaluator};
pub use countdown::{Countdown, CountdownTick};
pub use crop::{fit_ratio, plan, CropPlan, DrawTransform};
pub use level::{LevelConfig, LevelReading};
pub use mask::{letterbox_mask, LetterboxMask, MaskOrientation};
