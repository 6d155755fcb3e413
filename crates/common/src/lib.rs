//! Frameguide Common Utilities
//!
//! Shared infrastructure for all Frameguide crates:
//! - Error types and result aliases
//! - Rate control for pose-result streams
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
