use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{InteractionMode, ProjectionMode};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera interaction and projection parameters.
pub struct CameraOptions {
    /// Rotation model for pointer drags.
    #[schemars(title = "Interaction Mode")]
    pub mode: InteractionMode,
    /// Perspective or orthographic projection.
    #[schemars(title = "Projection")]
    pub projection: ProjectionMode,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 150.0), extend("step" = 1.0))]
    pub field_of_view: f32,
    /// Upper bound for the field of view in degrees.
    #[schemars(skip)]
    pub max_field_of_view: f32,
    /// Re-center rotation on the picked point at the start of each drag.
    #[schemars(title = "Rotate Around Picked Point")]
    pub pivot: bool,
    /// Scene size hint; pan, zoom and free-look speeds scale with it.
    #[schemars(title = "Scene Scale", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub scene_scale: f32,
    /// Initial near clipping plane distance.
    #[schemars(skip)]
    pub near: f32,
    /// Initial far clipping plane distance.
    #[schemars(skip)]
    pub far: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Orbit,
            projection: ProjectionMode::Perspective,
            field_of_view: 70.0,
            max_field_of_view: 150.0,
            pivot: false,
            scene_scale: 100.0,
            near: 0.05,
            far: 5000.0,
        }
    }
}

impl CameraOptions {
    /// Resolve options from externally supplied names, such as URL
    /// parameters or command-line flags.
    ///
    /// Unknown names fall back to orbit and perspective with a warning.
    #[must_use]
    pub fn from_names(mode: &str, projection: &str, field_of_view: f32, pivot: bool) -> Self {
        let mode = mode.parse().unwrap_or_else(|e| {
            log::warn!("{e}, using orbit");
            InteractionMode::Orbit
        });
        let projection = projection.parse().unwrap_or_else(|e| {
            log::warn!("{e}, using perspective");
            ProjectionMode::Perspective
        });
        Self {
            mode,
            projection,
            field_of_view,
            pivot,
            ..Self::default()
        }
    }
}
