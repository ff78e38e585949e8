use glam::Vec3;

use super::controller::CameraController;
use super::mode::ProjectionMode;
use super::projection::REFERENCE_FIELD_OF_VIEW;
use super::state::MIN_DOLLY;
use crate::picking::Picker;

impl CameraController {
    /// Start a drag gesture at pixel `(x, y)`.
    ///
    /// Records the reference pointer for incremental rotation. With pivot
    /// mode on, whatever the picker hits becomes the new rotation center.
    pub fn begin_gesture<P: Picker + ?Sized>(&mut self, x: f32, y: f32, picker: &mut P) {
        self.state.last_pointer = self.normalized_pointer(x, y);
        if !self.state.use_pivot {
            return;
        }
        if let Some(hit) = picker.pick(x, y) {
            self.set_pivot(hit.world_point());
        }
    }

    /// Move the center of rotation without moving the rendered view.
    ///
    /// The offset is taken out of view space, shifted from the old center to
    /// the new one, and rotated back, so the view matrix is unchanged at the
    /// moment of the switch. In perspective the dolly is re-derived from the
    /// eye's distance to the new center and the offset absorbs the
    /// difference.
    pub fn set_pivot(&mut self, center: Vec3) {
        let eye = self.camera_position();
        let state = &mut self.state;
        let q = state.orientation;

        let mut offset = q.inverse() * state.pivot_offset;
        offset -= state.pivot_center;
        state.pivot_center = center;
        offset += center;
        state.pivot_offset = q * offset;

        if state.projection_mode == ProjectionMode::Perspective {
            let old_depth = self.dolly_depth();
            let fov = self.state.field_of_view;
            self.state.translation.z =
                (eye.distance(center) * fov / REFERENCE_FIELD_OF_VIEW).max(MIN_DOLLY);
            let new_depth = self.dolly_depth();
            self.state.pivot_offset.z += new_depth - old_depth;
        }
        log::debug!("pivot moved to {center}");
        self.update_view();
    }

    /// Current center of rotation.
    #[must_use]
    pub fn pivot_center(&self) -> Vec3 {
        self.state.pivot_center
    }

    /// Current pivot offset in view space.
    #[must_use]
    pub fn pivot_offset(&self) -> Vec3 {
        self.state.pivot_offset
    }
}
