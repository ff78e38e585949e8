//! Axis-aligned view presets and snapping to the nearest cube rotation.

use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

use glam::Quat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::controller::CameraController;
use super::mode::InteractionMode;

const S: f32 = FRAC_1_SQRT_2;
const H: f32 = 0.5;

/// Squared dot product above which a toggle counts as already facing its
/// preset.
const TOGGLE_THRESHOLD: f32 = 0.99;

/// The 24 proper rotations of a cube, in lookup order.
///
/// `q` and `-q` describe the same rotation, so only one sign of each is
/// listed.
pub const CUBE_ROTATIONS: [Quat; 24] = [
    Quat::from_xyzw(1.0, 0.0, 0.0, 0.0),
    Quat::from_xyzw(0.0, 1.0, 0.0, 0.0),
    Quat::from_xyzw(0.0, 0.0, 1.0, 0.0),
    Quat::from_xyzw(0.0, 0.0, 0.0, 1.0),
    Quat::from_xyzw(S, S, 0.0, 0.0),
    Quat::from_xyzw(S, -S, 0.0, 0.0),
    Quat::from_xyzw(S, 0.0, S, 0.0),
    Quat::from_xyzw(S, 0.0, -S, 0.0),
    Quat::from_xyzw(S, 0.0, 0.0, S),
    Quat::from_xyzw(S, 0.0, 0.0, -S),
    Quat::from_xyzw(0.0, S, S, 0.0),
    Quat::from_xyzw(0.0, S, -S, 0.0),
    Quat::from_xyzw(0.0, S, 0.0, S),
    Quat::from_xyzw(0.0, S, 0.0, -S),
    Quat::from_xyzw(0.0, 0.0, S, S),
    Quat::from_xyzw(0.0, 0.0, S, -S),
    Quat::from_xyzw(H, H, H, H),
    Quat::from_xyzw(H, H, H, -H),
    Quat::from_xyzw(H, H, -H, H),
    Quat::from_xyzw(H, H, -H, -H),
    Quat::from_xyzw(H, -H, H, H),
    Quat::from_xyzw(H, -H, H, -H),
    Quat::from_xyzw(H, -H, -H, H),
    Quat::from_xyzw(-H, H, H, H),
];

/// `1 - dot²`: zero for the same rotation, growing with the angle between
/// them, and blind to the sign of either quaternion.
#[must_use]
pub fn rotation_distance(a: Quat, b: Quat) -> f32 {
    let dot = a.dot(b);
    1.0 - dot * dot
}

/// Closest entry of [`CUBE_ROTATIONS`]. Ties go to the earlier entry.
#[must_use]
pub fn nearest_cube_rotation(q: Quat) -> Quat {
    nearest_rotation(q, &CUBE_ROTATIONS)
}

/// Closest of `candidates`, scanning in order and replacing the best only
/// on a strictly smaller distance. An empty list gives the identity.
fn nearest_rotation(q: Quat, candidates: &[Quat]) -> Quat {
    let mut best = Quat::IDENTITY;
    let mut best_distance = f32::INFINITY;
    for &candidate in candidates {
        let distance = rotation_distance(q, candidate);
        if distance < best_distance {
            best_distance = distance;
            best = candidate;
        }
    }
    best
}

/// One of the six axis-aligned views.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewPreset {
    /// Looking down -Z (identity).
    Front,
    /// Turned half a revolution about Y.
    Back,
    /// Looking down from above.
    Top,
    /// Looking up from below.
    Bottom,
    /// Turned a quarter revolution clockwise about Y.
    Left,
    /// Turned a quarter revolution counter-clockwise about Y.
    Right,
}

impl ViewPreset {
    /// All presets.
    pub const ALL: [ViewPreset; 6] = [
        Self::Front,
        Self::Back,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    /// Orientation of this view.
    #[must_use]
    pub fn orientation(self) -> Quat {
        match self {
            Self::Front => Quat::IDENTITY,
            Self::Back => Quat::from_xyzw(0.0, 1.0, 0.0, 0.0),
            Self::Top => Quat::from_xyzw(S, 0.0, 0.0, S),
            Self::Bottom => Quat::from_xyzw(-S, 0.0, 0.0, S),
            Self::Left => Quat::from_xyzw(0.0, -S, 0.0, S),
            Self::Right => Quat::from_xyzw(0.0, S, 0.0, S),
        }
    }

    /// Orbit angles `(pitch, yaw)` matching [`orientation`](Self::orientation).
    #[must_use]
    pub fn orbit_angles(self) -> (f32, f32) {
        match self {
            Self::Front => (0.0, 0.0),
            Self::Back => (0.0, PI),
            Self::Top => (FRAC_PI_2, 0.0),
            Self::Bottom => (-FRAC_PI_2, 0.0),
            Self::Left => (0.0, -FRAC_PI_2),
            Self::Right => (0.0, FRAC_PI_2),
        }
    }

    /// The view facing the other way.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl CameraController {
    /// Jump to a preset view.
    pub fn reset_view_to(&mut self, preset: ViewPreset) {
        let (pitch, yaw) = preset.orbit_angles();
        self.state.euler_pitch = pitch;
        self.state.euler_yaw = yaw;
        self.state.orientation = preset.orientation();
        log::debug!("view preset {preset:?}");
        self.update_view();
    }

    /// Jump to `preset`, or to its opposite when already facing it.
    pub fn toggle_view(&mut self, preset: ViewPreset) {
        let dot = self.state.orientation.dot(preset.orientation());
        if dot * dot > TOGGLE_THRESHOLD {
            self.reset_view_to(preset.opposite());
        } else {
            self.reset_view_to(preset);
        }
    }

    /// Jump to the front view.
    pub fn reset_view_front(&mut self) {
        self.reset_view_to(ViewPreset::Front);
    }

    /// Jump to the back view.
    pub fn reset_view_back(&mut self) {
        self.reset_view_to(ViewPreset::Back);
    }

    /// Jump to the top view.
    pub fn reset_view_top(&mut self) {
        self.reset_view_to(ViewPreset::Top);
    }

    /// Jump to the bottom view.
    pub fn reset_view_bottom(&mut self) {
        self.reset_view_to(ViewPreset::Bottom);
    }

    /// Jump to the left view.
    pub fn reset_view_left(&mut self) {
        self.reset_view_to(ViewPreset::Left);
    }

    /// Jump to the right view.
    pub fn reset_view_right(&mut self) {
        self.reset_view_to(ViewPreset::Right);
    }

    /// Front, or back when already facing front.
    pub fn toggle_view_front(&mut self) {
        self.toggle_view(ViewPreset::Front);
    }

    /// Top, or bottom when already facing top.
    pub fn toggle_view_top(&mut self) {
        self.toggle_view(ViewPreset::Top);
    }

    /// Left, or right when already facing left.
    pub fn toggle_view_left(&mut self) {
        self.toggle_view(ViewPreset::Left);
    }

    /// Replace the orientation with the nearest cube rotation.
    ///
    /// In orbit mode yaw and pitch are read back from the result so the next
    /// drag continues from the snapped view. A snapped rotation with roll
    /// (upside down, or turned on its side) is replaced by the upright cube
    /// rotation looking the same way.
    pub fn snap_to_nearest(&mut self) {
        let mut snapped = nearest_cube_rotation(self.state.orientation);
        self.state.orientation = snapped;
        if self.state.interaction_mode == InteractionMode::Orbit && self.sync_orbit_angles() {
            snapped = nearest_cube_rotation(self.state.orientation);
            self.state.orientation = snapped;
        }
        log::debug!("snapped to {snapped}");
        self.update_view();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::rotation;
    use crate::options::CameraOptions;

    const EPS: f32 = 1e-5;

    fn camera(mode: InteractionMode) -> CameraController {
        let options = CameraOptions {
            mode,
            ..CameraOptions::default()
        };
        CameraController::with_viewport(&options, 640.0, 480.0)
    }

    #[test]
    fn cube_rotations_are_unit_and_distinct() {
        for (i, a) in CUBE_ROTATIONS.iter().enumerate() {
            assert!((a.length() - 1.0).abs() < EPS);
            for b in &CUBE_ROTATIONS[i + 1..] {
                assert!(rotation_distance(*a, *b) > 0.4, "{a} ~ {b}");
            }
        }
    }

    #[test]
    fn cube_rotations_map_axes_to_axes() {
        for q in CUBE_ROTATIONS {
            for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
                let v = q * axis;
                let largest = v.abs().max_element();
                assert!((largest - 1.0).abs() < EPS, "{q} sends {axis} to {v}");
            }
        }
    }

    #[test]
    fn exact_candidate_is_kept() {
        for q in CUBE_ROTATIONS {
            assert_eq!(nearest_cube_rotation(q), q);
        }
    }

    #[test]
    fn sign_flip_is_the_same_rotation() {
        let q = CUBE_ROTATIONS[17];
        assert_eq!(nearest_cube_rotation(-q), q);
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        // Exactly halfway between identity and a half turn about X
        let q = Quat::from_xyzw(S, 0.0, 0.0, S);
        let half_turn = CUBE_ROTATIONS[0];
        let identity = CUBE_ROTATIONS[3];
        assert_eq!(rotation_distance(q, half_turn), rotation_distance(q, identity));
        assert_eq!(nearest_rotation(q, &[half_turn, identity]), half_turn);
        assert_eq!(nearest_rotation(q, &[identity, half_turn]), identity);

        // Every candidate is equally far from the zero quaternion
        assert_eq!(
            nearest_cube_rotation(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)),
            CUBE_ROTATIONS[0]
        );
    }

    #[test]
    fn snapping_is_idempotent() {
        let mut camera = camera(InteractionMode::Spherical);
        camera.set_orientation(Quat::from_euler(glam::EulerRot::XYZ, 0.3, 1.2, -0.4));
        camera.snap_to_nearest();
        let once = camera.orientation();
        camera.snap_to_nearest();
        assert_eq!(camera.orientation(), once);
        assert!((once.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn snapping_an_exact_rotation_changes_nothing() {
        let mut camera = camera(InteractionMode::Plane);
        let q = CUBE_ROTATIONS[20];
        camera.set_orientation(q);
        camera.snap_to_nearest();
        assert_eq!(camera.orientation(), q);
    }

    #[test]
    fn orbit_snap_restores_angles() {
        let mut camera = camera(InteractionMode::Orbit);
        camera.set_orientation(Quat::from_rotation_x(1.4));
        camera.snap_to_nearest();
        let (pitch, yaw) = camera.euler_angles();
        assert!((pitch - FRAC_PI_2).abs() < EPS);
        assert!(yaw.abs() < EPS);
        let rebuilt = rotation::orbit_orientation(pitch, yaw);
        assert!(rebuilt.dot(camera.orientation()).abs() > 1.0 - EPS);
    }

    #[test]
    fn orbit_snap_near_half_turn_keeps_drags_smooth() {
        let mut camera = camera(InteractionMode::Orbit);
        // Upside down, as left by a host writing the state directly
        camera.state.orientation = Quat::from_rotation_x(3.0);
        camera.snap_to_nearest();
        let (pitch, yaw) = camera.euler_angles();
        assert!(pitch.abs() <= FRAC_PI_2);
        assert!((yaw.abs() - PI).abs() < EPS);
        assert_eq!(nearest_cube_rotation(camera.orientation()), camera.orientation());

        let before = camera.orientation();
        camera.begin_gesture(320.0, 240.0, &mut crate::picking::NoPicking);
        camera.rotate(321.0, 240.0, false);
        let (after_pitch, _) = camera.euler_angles();
        assert!(after_pitch.abs() <= FRAC_PI_2);
        assert!(camera.orientation().dot(before).abs() > 0.999);
    }

    #[test]
    fn snap_flag_on_rotate_snaps() {
        let mut camera = camera(InteractionMode::Spherical);
        camera.set_orientation(Quat::from_rotation_y(0.1));
        camera.rotate(0.0, 0.0, true);
        assert_eq!(camera.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn presets_match_orbit_angles() {
        for preset in ViewPreset::ALL {
            let (pitch, yaw) = preset.orbit_angles();
            let q = rotation::orbit_orientation(pitch, yaw);
            assert!(
                q.dot(preset.orientation()).abs() > 1.0 - EPS,
                "{preset:?}"
            );
            assert_eq!(preset.opposite().opposite(), preset);
        }
    }

    #[test]
    fn toggle_front_cycles_between_two_states() {
        let mut camera = camera(InteractionMode::Orbit);
        camera.set_orientation(Quat::from_rotation_y(0.7));
        camera.toggle_view_front();
        assert_eq!(camera.orientation(), ViewPreset::Front.orientation());
        camera.toggle_view_front();
        assert_eq!(camera.orientation(), ViewPreset::Back.orientation());
        camera.toggle_view_front();
        assert_eq!(camera.orientation(), ViewPreset::Front.orientation());
    }

    #[test]
    fn toggle_from_elsewhere_always_lands_on_preset() {
        for preset in ViewPreset::ALL {
            let mut camera = camera(InteractionMode::Spherical);
            camera.set_orientation(Quat::from_euler(glam::EulerRot::XYZ, 0.2, 0.9, 0.4));
            camera.toggle_view(preset);
            assert_eq!(camera.orientation(), preset.orientation());
            camera.toggle_view(preset);
            assert_eq!(camera.orientation(), preset.opposite().orientation());
        }
    }

    #[test]
    fn toggle_top_and_left() {
        let mut camera = camera(InteractionMode::Orbit);
        camera.toggle_view_top();
        assert_eq!(camera.euler_angles(), (FRAC_PI_2, 0.0));
        camera.toggle_view_top();
        assert_eq!(camera.euler_angles(), (-FRAC_PI_2, 0.0));
        camera.toggle_view_left();
        assert_eq!(camera.euler_angles(), (0.0, -FRAC_PI_2));
        camera.toggle_view_left();
        assert_eq!(camera.euler_angles(), (0.0, FRAC_PI_2));
    }
}
