//! Interactive camera for 3D scene viewing.
//!
//! Provides orbit, spherical and plane rotation, pivot re-centering, pan,
//! zoom and free-look translation, axis-aligned presets with snapping, and
//! an animated fly-to. The controller keeps view and projection matrices in
//! sync with its state after every mutation.

/// Scene bounding box used for clipping-plane fitting.
pub mod bounds;
/// Camera controller owning state and derived matrices.
pub mod controller;
pub mod fly_to;
/// Interaction, projection and free-look enumerations.
pub mod mode;
mod pivot;
mod projection;
pub mod rotation;
pub mod snap;
/// Authoritative camera state record.
pub mod state;
/// GPU uniform layout for the camera matrices.
pub mod uniform;

pub use bounds::BoundingBox;
pub use controller::CameraController;
pub use fly_to::{AnimationToken, FLY_TO_DURATION, FLY_TO_TICK};
pub use mode::{InteractionMode, ProjectionMode, Strafe};
pub use snap::{nearest_cube_rotation, ViewPreset, CUBE_ROTATIONS};
pub use state::{CameraState, MIN_DOLLY, MIN_FIELD_OF_VIEW};
pub use uniform::CameraUniform;
