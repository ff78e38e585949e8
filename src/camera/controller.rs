use glam::{Mat4, Quat, Vec2, Vec3};

use super::bounds::BoundingBox;
use super::fly_to::FlyTo;
use super::mode::{InteractionMode, ProjectionMode, Strafe};
use super::rotation;
use super::snap::rotation_distance;
use super::state::{CameraState, MIN_DOLLY};
use crate::options::CameraOptions;

/// Translation the camera returns to on [`CameraController::reset_view`].
const HOME_TRANSLATION: Vec3 = Vec3::new(0.0, 0.0, 30.0);

/// Zoom applied after the home translation on reset (backs the camera off).
const HOME_ZOOM: f32 = -0.6;

/// Largest [`rotation_distance`] between an orientation and its orbit
/// rebuild for the two to count as the same view.
const ORBIT_MATCH_TOLERANCE: f32 = 1e-6;

/// Owns the camera state and keeps the view and projection matrices in sync
/// with it.
///
/// Every mutating method rebuilds the matrices it affects before returning,
/// so [`view_matrix`](Self::view_matrix) and
/// [`projection_matrix`](Self::projection_matrix) are never stale.
pub struct CameraController {
    pub(super) state: CameraState,
    pub(super) view: Mat4,
    pub(super) projection: Mat4,
    pub(super) last_bounds: Option<BoundingBox>,
    pub(super) fly_to: Option<FlyTo>,
    pub(super) next_animation: u64,
}

impl CameraController {
    /// Create a controller from resolved options and reset it to the home
    /// view.
    ///
    /// The projection stays at identity until the host reports a viewport
    /// size through [`set_viewport`](Self::set_viewport).
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let mut controller = Self {
            state: CameraState::from_options(options),
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            last_bounds: None,
            fly_to: None,
            next_animation: 0,
        };
        controller.reset_view();
        log::debug!(
            "camera created: {} mode, {} projection, fov {}",
            controller.state.interaction_mode,
            controller.state.projection_mode,
            controller.state.field_of_view
        );
        controller
    }

    /// Create a controller and size it to the viewport in one step.
    #[must_use]
    pub fn with_viewport(options: &CameraOptions, width: f32, height: f32) -> Self {
        let mut controller = Self::new(options);
        controller.set_viewport(width, height);
        controller
    }

    /// Read-only access to the authoritative state.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    // ── Configuration ───────────────────────────────────────────────────

    /// Switch projection and rebuild both matrices.
    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        log::debug!("projection mode: {mode}");
        self.state.projection_mode = mode;
        self.update_projection();
        self.update_view();
    }

    /// Current projection.
    #[must_use]
    pub fn projection_mode(&self) -> ProjectionMode {
        self.state.projection_mode
    }

    /// Whether the orthographic projection is active.
    #[must_use]
    pub fn is_orthographic(&self) -> bool {
        self.state.projection_mode == ProjectionMode::Orthographic
    }

    /// Switch the rotation model.
    ///
    /// Entering orbit mode resets to the front view so yaw and pitch start
    /// from a known pair instead of being read back from an arbitrary
    /// orientation.
    pub fn set_interaction_mode(&mut self, mode: InteractionMode) {
        log::debug!("interaction mode: {mode}");
        self.state.interaction_mode = mode;
        if mode == InteractionMode::Orbit {
            self.reset_view_front();
        }
    }

    /// Current rotation model.
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.state.interaction_mode
    }

    /// Set the vertical field of view in degrees (clamped) and re-fit the
    /// clipping planes.
    pub fn set_field_of_view(&mut self, degrees: f32) {
        self.state.field_of_view = self.state.clamp_field_of_view(degrees);
        self.update_view();
        if self.last_bounds.is_some() {
            self.optimize_near_far(None);
        } else {
            self.update_projection();
        }
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn field_of_view(&self) -> f32 {
        self.state.field_of_view
    }

    /// Enable or disable re-centering rotation on the picked point.
    pub fn set_pivot_enabled(&mut self, enabled: bool) {
        self.state.use_pivot = enabled;
    }

    /// Flip pivot mode, returning the new setting.
    pub fn toggle_pivot(&mut self) -> bool {
        self.state.use_pivot = !self.state.use_pivot;
        self.state.use_pivot
    }

    /// Whether pivot mode is enabled.
    #[must_use]
    pub fn pivot_enabled(&self) -> bool {
        self.state.use_pivot
    }

    /// Update the viewport size in pixels and rebuild the projection.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.state.viewport_width = width.max(0.0);
        self.state.viewport_height = height.max(0.0);
        self.update_projection();
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.state.viewport_width, self.state.viewport_height)
    }

    // ── Orientation ─────────────────────────────────────────────────────

    /// Current orientation (unit length).
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.state.orientation
    }

    /// Replace the orientation. Zero-length input is ignored.
    ///
    /// In orbit mode the yaw/pitch pair is read back from the new
    /// orientation so later drags continue from it. Roll cannot be held in
    /// orbit mode, so a rolled orientation is replaced by the upright view
    /// along the same direction.
    pub fn set_orientation(&mut self, orientation: Quat) {
        if !orientation.is_finite() || orientation.length_squared() <= f32::EPSILON {
            return;
        }
        self.state.orientation = orientation.normalize();
        if self.state.interaction_mode == InteractionMode::Orbit {
            let _ = self.sync_orbit_angles();
        }
        self.update_view();
    }

    /// Orbit angles as `(pitch, yaw)` in radians.
    #[must_use]
    pub fn euler_angles(&self) -> (f32, f32) {
        (self.state.euler_pitch, self.state.euler_yaw)
    }

    /// Rotate from the last pointer position to `(x, y)` pixels.
    ///
    /// With `snap` set the pointer is ignored and the orientation jumps to
    /// the nearest axis-aligned view instead.
    pub fn rotate(&mut self, x: f32, y: f32, snap: bool) {
        if snap {
            self.snap_to_nearest();
            return;
        }
        let pointer = self.normalized_pointer(x, y);
        let last = self.state.last_pointer;
        let state = &mut self.state;
        match state.interaction_mode {
            InteractionMode::Orbit => {
                let (pitch, yaw) = rotation::orbit_angles(
                    state.euler_pitch,
                    state.euler_yaw,
                    pointer - last,
                );
                state.euler_pitch = pitch;
                state.euler_yaw = yaw;
                state.orientation = rotation::orbit_orientation(pitch, yaw);
            }
            InteractionMode::Plane => {
                let step = rotation::plane_rotation(last, pointer);
                state.orientation = (step * state.orientation).normalize();
            }
            InteractionMode::Spherical => {
                let step = rotation::spherical_rotation(last, pointer);
                state.orientation = (step * state.orientation).normalize();
            }
        }
        state.last_pointer = pointer;
        log::trace!("rotate to {pointer}: {}", state.orientation);
        self.update_view();
    }

    /// Map pixel coordinates into the normalized pointer space.
    #[must_use]
    pub fn normalized_pointer(&self, x: f32, y: f32) -> Vec2 {
        rotation::normalized_pointer(
            x,
            y,
            self.state.viewport_width,
            self.state.viewport_height,
        )
    }

    // ── Translation ─────────────────────────────────────────────────────

    /// Current `(pan x, pan y, dolly)` translation.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.state.translation
    }

    /// Replace the translation and rebuild the affected matrices.
    ///
    /// The dolly is floored at [`MIN_DOLLY`] like every other translation
    /// edit.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.state.translation = translation;
        self.refresh_after_translation();
    }

    /// Pan by a screen-space delta (pixels divided by the host's pan scale).
    ///
    /// The step grows with the dolly distance so panning feels the same at
    /// any zoom level.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        let state = &mut self.state;
        let factor = state.pan_speed * state.translation.z / 50.0;
        state.translation.x -= dx * factor;
        state.translation.y += dy * factor;
        self.update_view();
    }

    /// Zoom toward the pivot offset. Positive deltas move closer.
    ///
    /// Pan components only follow when zooming in; the dolly never drops
    /// below [`MIN_DOLLY`].
    pub fn zoom(&mut self, delta: f32) {
        let state = &mut self.state;
        let factor = delta * state.pan_speed / 54.0;
        let pan_factor = factor.max(0.0);
        let offset = state.pivot_offset;
        let t = &mut state.translation;
        t.x += (offset.x - t.x) * pan_factor;
        t.y += (offset.y - t.y) * pan_factor;
        t.z = (t.z + (offset.z - t.z) * factor).max(MIN_DOLLY);
        self.refresh_after_translation();
    }

    /// Set the continuous free-look motion flags.
    pub fn set_strafe(&mut self, x: Strafe, z: Strafe) {
        self.state.strafe_x = x;
        self.state.strafe_z = z;
    }

    /// Current free-look motion flags as `(x, z)`.
    #[must_use]
    pub fn strafe(&self) -> (Strafe, Strafe) {
        (self.state.strafe_x, self.state.strafe_z)
    }

    /// Whether a free-look motion flag is set.
    #[must_use]
    pub fn is_strafing(&self) -> bool {
        self.state.strafe_x != Strafe::Still || self.state.strafe_z != Strafe::Still
    }

    /// Advance free-look motion by one frame.
    pub fn update_translation(&mut self) {
        let state = &mut self.state;
        let speed = state.pan_speed;
        let t = &mut state.translation;
        t.x += state.strafe_x.factor() * speed * t.z / 50.0 / 400.0;
        t.z = (t.z + state.strafe_z.factor() * speed / 400.0).max(MIN_DOLLY);
        self.refresh_after_translation();
    }

    /// Motion sensitivity derived from the scene scale.
    #[must_use]
    pub fn pan_speed(&self) -> f32 {
        self.state.pan_speed
    }

    /// Return to the home view: identity orientation, pivot at the origin,
    /// camera backed off from the default translation.
    ///
    /// Any running fly-to animation is cancelled.
    pub fn reset_view(&mut self) {
        if let Some(token) = self.cancel_fly_to() {
            log::debug!("reset cancelled fly-to {token:?}");
        }
        let state = &mut self.state;
        state.euler_pitch = 0.0;
        state.euler_yaw = 0.0;
        state.pan_speed = state.scene_scale * 0.9;
        state.orientation = Quat::IDENTITY;
        state.pivot_center = Vec3::ZERO;
        state.pivot_offset = Vec3::ZERO;
        state.translation = HOME_TRANSLATION;
        self.zoom(HOME_ZOOM);
        self.update_projection();
    }

    /// Read the orbit angles back from the orientation. When the
    /// orientation is not one orbit mode can reach, it is replaced by the
    /// one rebuilt from those angles so the next drag starts where the view
    /// is. Returns whether it was replaced.
    pub(super) fn sync_orbit_angles(&mut self) -> bool {
        let (pitch, yaw) = rotation::orbit_angles_from(self.state.orientation);
        self.state.euler_pitch = pitch;
        self.state.euler_yaw = yaw;
        let rebuilt = rotation::orbit_orientation(pitch, yaw);
        if rotation_distance(rebuilt, self.state.orientation) <= ORBIT_MATCH_TOLERANCE {
            return false;
        }
        log::debug!("dropped roll from {} for orbit mode", self.state.orientation);
        self.state.orientation = rebuilt.normalize();
        true
    }

    /// Floor the dolly, then rebuild what depends on the translation: the
    /// orthographic extent and the view.
    pub(super) fn refresh_after_translation(&mut self) {
        // Eye and target coincide at zero dolly
        self.state.translation.z = self.state.translation.z.max(MIN_DOLLY);
        if self.is_orthographic() {
            self.update_projection();
        }
        self.update_view();
    }
}
