//! Camera facing and the mirroring it implies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Which way the active camera faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraFacing {
    /// Rear camera, pointed away from the user.
    #[default]
    Environment,
    /// Front (selfie) camera.
    User,
}

impl CameraFacing {
    /// Self-facing captures are flipped horizontally so they match the preview.
    pub fn mirrors(self) -> bool {
        matches!(self, CameraFacing::User)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CameraFacing::Environment => "environment",
            CameraFacing::User => "user",
        }
    }
}

impl fmt::Display for CameraFacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CameraFacing {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "environment" | "rear" | "back" => Ok(CameraFacing::Environment),
            "user" | "front" | "selfie" => Ok(CameraFacing::User),
            _ => Err(ModelError::UnknownFacing(s.to_string())),
        }
    }
}
