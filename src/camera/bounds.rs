use glam::Vec3;

/// Axis-aligned scene bounding box, used to fit the near/far planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Build from two corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Build from six scalars in `min x, min y, min z, max x, max y, max z`
    /// order, the layout scene hosts usually hand out.
    #[must_use]
    pub fn from_scalars(
        min_x: f32,
        min_y: f32,
        min_z: f32,
        max_x: f32,
        max_y: f32,
        max_z: f32,
    ) -> Self {
        Self {
            min: Vec3::new(min_x, min_y, min_z),
            max: Vec3::new(max_x, max_y, max_z),
        }
    }

    /// Smallest box enclosing all points, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().fold(Self::new(first, first), |bb, &p| Self {
            min: bb.min.min(p),
            max: bb.max.max(p),
        }))
    }

    /// Box center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Length of the min-to-max diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f32 {
        self.min.distance(self.max)
    }
}
