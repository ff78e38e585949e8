use glam::Mat4;

use super::controller::CameraController;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform buffer layout holding the camera matrices and metadata.
///
/// Matrices are column-major so the struct can be uploaded as-is with
/// `bytemuck::bytes_of`.
pub struct CameraUniform {
    /// World-to-view matrix.
    pub view: [[f32; 4]; 4],
    /// View-to-clip matrix.
    pub projection: [[f32; 4]; 4],
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport size in pixels.
    pub viewport: [f32; 2],
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view: identity,
            projection: identity,
            view_proj: identity,
            position: [0.0; 3],
            fovy: 45.0,
            viewport: [1.0, 1.0],
            near: 0.05,
            far: 5000.0,
        }
    }

    /// Update uniform fields from the controller's current state.
    pub fn update(&mut self, camera: &CameraController) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = camera.projection_matrix().to_cols_array_2d();
        self.view_proj = camera.view_projection().to_cols_array_2d();
        self.position = camera.camera_position().to_array();
        self.fovy = camera.field_of_view();
        self.viewport = camera.viewport().to_array();
        self.near = camera.near();
        self.far = camera.far();
    }
}

impl CameraController {
    /// Snapshot the matrices for upload to a GPU uniform buffer.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(self);
        uniform
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::options::CameraOptions;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(size_of::<CameraUniform>(), 224);
        assert_eq!(bytemuck::bytes_of(&CameraUniform::default()).len(), 224);
    }

    #[test]
    fn uniform_mirrors_controller() {
        let mut camera = CameraController::with_viewport(&CameraOptions::default(), 640.0, 480.0);
        camera.set_translation(Vec3::new(1.0, 2.0, 25.0));
        let uniform = camera.uniform();
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.view_proj, camera.view_projection().to_cols_array_2d());
        assert_eq!(uniform.viewport, [640.0, 480.0]);
        assert_eq!(uniform.fovy, camera.field_of_view());
        assert_eq!(uniform.near, camera.near());
        assert_eq!(Vec3::from(uniform.position), camera.camera_position());
    }
}
