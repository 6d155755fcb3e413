//! Error types shared across Frameguide crates.

/// Top-level error type for Frameguide operations.
#[derive(Debug, thiserror::Error)]
pub enum FrameguideError {
    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("Invalid aspect ratio: {message}")]
    InvalidRatio { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using FrameguideError.
pub type FrameguideResult<T> = Result<T, FrameguideError>;

impl FrameguideError {
    pub fn invalid_dimensions(width: impl Into<f64>, height: impl Into<f64>) -> Self {
        Self::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        }
    }

    pub fn invalid_ratio(msg: impl Into<String>) -> Self {
        Self::InvalidRatio {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = FrameguideError::invalid_dimensions(0u32, 1080u32);
        assert_eq!(err.to_string(), "Invalid frame dimensions: 0x1080");
    }

    #[test]
    fn test_config_and_parse_messages() {
        let err = FrameguideError::config("capture.ratio: expected W:H or 'full'");
        assert_eq!(
            err.to_string(),
            "Configuration error: capture.ratio: expected W:H or 'full'"
        );
        let err = FrameguideError::parse("pose frame on line 3: missing field `t`");
        assert!(matches!(err, FrameguideError::Parse { .. }));
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: FrameguideError = json_err.into();
        assert!(matches!(err, FrameguideError::Json(_)));
    }
}
