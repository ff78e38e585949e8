//! View and projection synthesis, clipping-plane fitting, and screen/world
//! mapping.

use glam::{Mat3, Mat4, Vec3, Vec4};

use super::bounds::BoundingBox;
use super::controller::CameraController;
use super::mode::ProjectionMode;

/// Field of view (degrees) at which the dolly equals the eye distance.
pub(super) const REFERENCE_FIELD_OF_VIEW: f32 = 45.0;

/// Eye distance used by the orthographic projection; zoom goes through the
/// frustum extent instead.
const ORTHOGRAPHIC_EYE_DEPTH: f32 = 1000.0;

/// Half-extent of the orthographic frustum per pixel per unit of dolly.
const ORTHOGRAPHIC_SCALE: f32 = 0.00055;

/// Smallest near plane produced by [`CameraController::optimize_near_far`].
const MIN_NEAR: f32 = 0.01;

impl CameraController {
    /// Distance from the eye to the pivot plane along the view axis.
    ///
    /// Perspective rescales the dolly by the field of view so that widening
    /// the view does not shrink the scene; orthographic uses a fixed depth.
    #[must_use]
    pub fn dolly_depth(&self) -> f32 {
        match self.state.projection_mode {
            ProjectionMode::Perspective => {
                self.state.translation.z * REFERENCE_FIELD_OF_VIEW
                    / self.state.field_of_view
            }
            ProjectionMode::Orthographic => ORTHOGRAPHIC_EYE_DEPTH,
        }
    }

    /// Rebuild the view matrix: look-at, then rotate, then move the pivot to
    /// the origin.
    pub fn update_view(&mut self) {
        let state = &self.state;
        let t = state.translation;
        let offset = state.pivot_offset;
        let x = t.x - offset.x;
        let y = t.y - offset.y;
        let eye = Vec3::new(x, y, self.dolly_depth() - offset.z);
        let target = Vec3::new(x, y, -offset.z);
        self.view = Mat4::look_at_rh(eye, target, Vec3::Y)
            * Mat4::from_quat(state.orientation)
            * Mat4::from_translation(-state.pivot_center);
    }

    /// Rebuild the projection matrix.
    ///
    /// Skipped while the viewport has no area; the previous matrix stays.
    pub fn update_projection(&mut self) {
        let state = &self.state;
        let width = state.viewport_width;
        let height = state.viewport_height;
        if width <= 0.0 || height <= 0.0 {
            log::debug!("projection rebuild skipped: viewport {width}x{height}");
            return;
        }
        self.projection = match state.projection_mode {
            ProjectionMode::Perspective => {
                let mut proj = Mat4::perspective_rh_gl(
                    state.field_of_view.to_radians(),
                    width / height,
                    state.near,
                    state.far,
                );
                // GL clip space with the far plane pushed to infinity
                proj.z_axis.z = -1.0;
                proj.w_axis.z = -2.0 * state.near;
                proj
            }
            ProjectionMode::Orthographic => {
                let k = state.translation.z.abs() * ORTHOGRAPHIC_SCALE;
                Mat4::orthographic_rh_gl(
                    -width * k,
                    width * k,
                    -height * k,
                    height * k,
                    -state.near,
                    state.far,
                )
            }
        };
    }

    /// Fit the near and far planes around a scene bounding box.
    ///
    /// `None` reuses the last box seen; without any box the planes are left
    /// untouched.
    pub fn optimize_near_far(&mut self, bounds: Option<BoundingBox>) {
        let Some(bounds) = bounds.or(self.last_bounds) else {
            return;
        };
        self.last_bounds = Some(bounds);
        let t = self.state.translation;
        let eye = Vec3::new(t.x, t.y, self.dolly_depth());
        let diagonal = bounds.diagonal();
        let distance = eye.distance(bounds.center());
        let near = (distance - diagonal).max(MIN_NEAR);
        self.state.near = near;
        self.state.far = (diagonal + distance).max(near + MIN_NEAR);
        log::trace!("near/far fitted to {}..{}", self.state.near, self.state.far);
        self.update_projection();
    }

    /// Last bounding box passed to [`optimize_near_far`](Self::optimize_near_far).
    #[must_use]
    pub fn scene_bounds(&self) -> Option<BoundingBox> {
        self.last_bounds
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near(&self) -> f32 {
        self.state.near
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn far(&self) -> f32 {
        self.state.far
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// View-to-clip matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Combined `projection * view`.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Eye position in world space, read back from the view matrix.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        let rotation = Mat3::from_mat4(self.view);
        rotation.transpose() * -self.view.w_axis.truncate()
    }

    /// Project a world point to pixels.
    ///
    /// The result is `(x, y, depth)` with the pixel origin at the top-left
    /// corner and depth in `[0, 1]`.
    #[must_use]
    pub fn project(&self, world: Vec3) -> Vec3 {
        let clip = self.projection * (self.view * world.extend(1.0));
        let ndc = clip.truncate() / clip.w;
        let width = self.state.viewport_width;
        let height = self.state.viewport_height;
        Vec3::new(
            (ndc.x + 1.0) * width * 0.5,
            height - (ndc.y + 1.0) * height * 0.5,
            (ndc.z + 1.0) * 0.5,
        )
    }

    /// Inverse of [`project`](Self::project): world point under pixel
    /// `(x, y)` at `depth` in `[0, 1]`.
    #[must_use]
    pub fn unproject(&self, x: f32, y: f32, depth: f32) -> Vec3 {
        let width = self.state.viewport_width.max(1.0);
        let height = self.state.viewport_height.max(1.0);
        let ndc = Vec4::new(
            2.0 * x / width - 1.0,
            (height - 2.0 * y) / height,
            2.0 * depth - 1.0,
            1.0,
        );
        let world = self.view_projection().inverse() * ndc;
        world.truncate() / world.w
    }
}
