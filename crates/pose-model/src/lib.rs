//! Frameguide Pose Model
//!
//! Defines the core data contracts shared by the guidance engine:
//! - **Landmarks:** Per-frame body landmarks from an external pose source
//! - **Guides:** Framing templates and the alignment band each one uses
//! - **Ratios:** Target aspect ratios for capture cropping
//! - **Verdicts:** The tagged feedback produced for every evaluation
//! - **Timer:** The self-timer delay before a capture
//!
//! All landmark coordinates are normalized to `[0.0, 1.0]` relative to
//! the camera frame so they survive resolution changes.

pub mod error;
pub mod facing;
pub mod frame;
pub mod geometry;
pub mod guide;
pub mod landmark;
pub mod ratio;
pub mod skeleton;
pub mod timer;
pub mod verdict;

pub use error::*;
pub use facing::*;
pub use frame::*;
pub use geometry::*;
pub use guide::*;
pub use landmark::*;
pub use ratio::*;
pub use skeleton::*;
pub use timer::*;
pub use verdict::*;
