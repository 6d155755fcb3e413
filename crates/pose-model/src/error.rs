//! Errors raised while building or parsing model values.

/// Errors that can occur when working with the pose model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid aspect ratio '{input}': {reason}")]
    InvalidRatio { input: String, reason: String },

    #[error("Unknown guide mode '{0}' (expected none, portrait, couple or group)")]
    UnknownGuide(String),

    #[error("Unknown camera facing '{0}' (expected environment or user)")]
    UnknownFacing(String),

    #[error("Unknown self-timer '{0}' (expected off, 3, 5 or 10)")]
    UnknownTimer(String),
}

impl ModelError {
    pub fn invalid_ratio(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRatio {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
