//! Scene picking seam.
//!
//! The camera does not intersect rays with geometry itself. Hosts plug in
//! whatever picking they have through [`Picker`]; the camera only consumes
//! the hit.

use glam::{Mat4, Vec3};

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Intersection point in the hit object's local space.
    pub point: Vec3,
    /// The hit object's model-to-world transform.
    pub model: Mat4,
}

impl PickHit {
    /// Hit from a point already in world space.
    #[must_use]
    pub fn world(point: Vec3) -> Self {
        Self {
            point,
            model: Mat4::IDENTITY,
        }
    }

    /// Intersection point in world space.
    #[must_use]
    pub fn world_point(&self) -> Vec3 {
        self.model.project_point3(self.point)
    }
}

/// Something that can tell what lies under a pixel.
pub trait Picker {
    /// Pick at pixel `(x, y)`; `None` when nothing is hit.
    fn pick(&mut self, x: f32, y: f32) -> Option<PickHit>;
}

/// A picker that never hits anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPicking;

impl Picker for NoPicking {
    fn pick(&mut self, _x: f32, _y: f32) -> Option<PickHit> {
        None
    }
}

impl<F> Picker for F
where
    F: FnMut(f32, f32) -> Option<PickHit>,
{
    fn pick(&mut self, x: f32, y: f32) -> Option<PickHit> {
        self(x, y)
    }
}
