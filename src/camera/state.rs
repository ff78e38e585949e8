use glam::{Quat, Vec2, Vec3};

use super::mode::{InteractionMode, ProjectionMode, Strafe};
use crate::options::CameraOptions;

/// Smallest vertical field of view accepted, in degrees.
pub const MIN_FIELD_OF_VIEW: f32 = 1.0;

/// Lower bound of the dolly component of the translation.
pub const MIN_DOLLY: f32 = 1e-5;

/// Authoritative camera state.
///
/// Everything the view and projection matrices are derived from lives here;
/// the matrices themselves are owned by
/// [`CameraController`](super::CameraController).
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// Rotation applied to the scene relative to view space (unit length).
    pub orientation: Quat,
    /// `(pan x, pan y, dolly)`.
    pub translation: Vec3,
    /// World point rotations are centered on.
    pub pivot_center: Vec3,
    /// View-space correction keeping the view still when the pivot moves.
    pub pivot_offset: Vec3,
    /// Orbit mode pitch, radians, clamped to `[-pi/2, pi/2]`.
    pub euler_pitch: f32,
    /// Orbit mode yaw, radians.
    pub euler_yaw: f32,
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    /// Upper clamp for `field_of_view`.
    pub max_field_of_view: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
    /// Active rotation model.
    pub interaction_mode: InteractionMode,
    /// Active projection.
    pub projection_mode: ProjectionMode,
    /// Whether a gesture start re-centers rotation on the picked point.
    pub use_pivot: bool,
    /// Scene scale the pan speed is derived from.
    pub scene_scale: f32,
    /// Motion sensitivity, `scene_scale * 0.9` after a reset.
    pub pan_speed: f32,
    /// Horizontal free-look motion.
    pub strafe_x: Strafe,
    /// Depth free-look motion.
    pub strafe_z: Strafe,
    /// Last pointer position in normalized `[-1, 1]` coordinates, Y up.
    pub last_pointer: Vec2,
}

impl CameraState {
    /// Build the initial state from resolved options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let max_field_of_view = options.max_field_of_view.max(MIN_FIELD_OF_VIEW);
        let near = options.near.max(f32::EPSILON);
        Self {
            orientation: Quat::IDENTITY,
            translation: Vec3::new(0.0, 0.0, 30.0),
            pivot_center: Vec3::ZERO,
            pivot_offset: Vec3::ZERO,
            euler_pitch: 0.0,
            euler_yaw: 0.0,
            field_of_view: options
                .field_of_view
                .clamp(MIN_FIELD_OF_VIEW, max_field_of_view),
            max_field_of_view,
            near,
            far: options.far.max(near * 2.0),
            viewport_width: 0.0,
            viewport_height: 0.0,
            interaction_mode: options.mode,
            projection_mode: options.projection,
            use_pivot: options.pivot,
            scene_scale: options.scene_scale,
            pan_speed: options.scene_scale * 0.9,
            strafe_x: Strafe::Still,
            strafe_z: Strafe::Still,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Clamp a field of view into the accepted range.
    #[must_use]
    pub fn clamp_field_of_view(&self, degrees: f32) -> f32 {
        if degrees.is_nan() {
            return self.field_of_view;
        }
        degrees.clamp(MIN_FIELD_OF_VIEW, self.max_field_of_view)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}
