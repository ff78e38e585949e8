//! Per-mode rotation math.
//!
//! Every function here is pure: it takes pointer positions in normalized
//! `[-1, 1]` coordinates (Y up) and returns angles or a rotation. The
//! controller decides how the result is composed with its orientation.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};

/// Radians of rotation per unit of normalized pointer travel.
pub const ROTATION_GAIN: f32 = 2.0;

/// Map a pixel position to normalized pointer coordinates.
///
/// `(0, 0)` is the viewport center, `(-1, 1)` the top-left corner. A
/// zero-sized viewport is treated as one pixel wide so the result stays
/// finite.
#[must_use]
pub fn normalized_pointer(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let width = width.max(1.0);
    let height = height.max(1.0);
    Vec2::new(2.0 * x / width - 1.0, 1.0 - 2.0 * y / height)
}

/// Project a normalized pointer position onto the unit sphere.
///
/// Points outside the unit disc land on the sphere's silhouette (z = 0), so
/// the mapping is continuous across the edge.
#[must_use]
pub fn pointer_on_unit_sphere(pointer: Vec2) -> Vec3 {
    let z_sq = 1.0 - pointer.length_squared();
    let z = if z_sq > 0.0 { z_sq.sqrt() } else { 0.0 };
    Vec3::new(pointer.x, pointer.y, z).normalize_or_zero()
}

/// Advance orbit angles by a pointer delta.
///
/// Returns `(pitch, yaw)`. Pitch is clamped to the poles, yaw is free.
#[must_use]
pub fn orbit_angles(pitch: f32, yaw: f32, delta: Vec2) -> (f32, f32) {
    let pitch = (pitch - delta.y * ROTATION_GAIN).clamp(-FRAC_PI_2, FRAC_PI_2);
    let yaw = yaw + delta.x * ROTATION_GAIN;
    (pitch, yaw)
}

/// Orbit orientation rebuilt from identity: pitch about X, then yaw about Y.
#[must_use]
pub fn orbit_orientation(pitch: f32, yaw: f32) -> Quat {
    Quat::from_rotation_x(pitch) * Quat::from_rotation_y(yaw)
}

/// Horizontal length of the view axis below which it counts as pointing at
/// a pole.
const POLE_TOLERANCE: f32 = 1e-3;

/// Recover `(pitch, yaw)` from a unit orientation.
///
/// Pitch comes from the world direction the camera looks back along, so it
/// always lies within the poles. Yaw comes from the same direction, or from
/// the world X axis when looking straight up or down. Orientations built by
/// [`orbit_orientation`] round-trip; an orientation with roll reads as the
/// upright view along the same direction.
#[must_use]
pub fn orbit_angles_from(q: Quat) -> (f32, f32) {
    let inverse = q.conjugate();
    let back = inverse * Vec3::Z;
    let horizontal = back.x.hypot(back.z);
    let pitch = back.y.atan2(horizontal);
    let yaw = if horizontal > POLE_TOLERANCE {
        (-back.x).atan2(back.z)
    } else {
        let side = inverse * Vec3::X;
        side.z.atan2(side.x)
    };
    (pitch, yaw)
}

/// Incremental rotation for plane mode.
///
/// The axis is the in-plane perpendicular of the drag, the angle is
/// proportional to its length. A zero drag gives the identity.
#[must_use]
pub fn plane_rotation(last: Vec2, current: Vec2) -> Quat {
    let delta = current - last;
    let axis = Vec3::new(-delta.y, delta.x, 0.0).normalize_or_zero();
    if axis == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_axis_angle(axis, delta.length() * ROTATION_GAIN)
}

/// Incremental rotation for the virtual trackball.
///
/// Both positions are lifted onto the unit sphere; the rotation follows the
/// great circle between them. Coincident points give the identity.
#[must_use]
pub fn spherical_rotation(last: Vec2, current: Vec2) -> Quat {
    let before = pointer_on_unit_sphere(last);
    let after = pointer_on_unit_sphere(current);
    let angle = before.dot(after).clamp(-1.0, 1.0).acos();
    let axis = before.cross(after).normalize_or_zero();
    if axis == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_axis_angle(axis, angle * ROTATION_GAIN)
}
