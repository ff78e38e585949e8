use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// How pointer drags are turned into rotations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Independent yaw/pitch angles, pitch clamped at the poles.
    #[default]
    Orbit,
    /// Virtual trackball: pointer positions mapped onto a unit sphere.
    Spherical,
    /// Rotation axis perpendicular to the drag in the screen plane.
    Plane,
}

/// Projection used to build the projection matrix.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Perspective projection with a vertical field of view.
    #[default]
    Perspective,
    /// Orthographic projection scaled by the dolly distance.
    Orthographic,
}

/// Discrete free-look motion along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strafe {
    /// Move toward the negative axis direction.
    Negative,
    /// No motion.
    #[default]
    Still,
    /// Move toward the positive axis direction.
    Positive,
}

impl Strafe {
    /// Signed unit factor: -1, 0 or 1.
    #[must_use]
    pub fn factor(self) -> f32 {
        match self {
            Self::Negative => -1.0,
            Self::Still => 0.0,
            Self::Positive => 1.0,
        }
    }
}

impl InteractionMode {
    /// Lowercase option name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Orbit => "orbit",
            Self::Spherical => "spherical",
            Self::Plane => "plane",
        }
    }
}

impl ProjectionMode {
    /// Lowercase option name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Perspective => "perspective",
            Self::Orthographic => "orthographic",
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InteractionMode {
    type Err = VantageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orbit" => Ok(Self::Orbit),
            "spherical" => Ok(Self::Spherical),
            "plane" => Ok(Self::Plane),
            _ => Err(VantageError::UnknownInteractionMode(s.to_owned())),
        }
    }
}

impl FromStr for ProjectionMode {
    type Err = VantageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perspective" => Ok(Self::Perspective),
            "orthographic" => Ok(Self::Orthographic),
            _ => Err(VantageError::UnknownProjectionMode(s.to_owned())),
        }
    }
}
