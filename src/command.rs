//! The camera's interactive vocabulary.
//!
//! Every user-facing camera operation, whether triggered by a key press,
//! mouse gesture, GUI button, or programmatic call, is represented as a
//! `CameraCommand`. Consumers construct commands and pass them to
//! [`CameraController::execute`].

use glam::Vec2;

use crate::camera::{
    BoundingBox, CameraController, InteractionMode, ProjectionMode, Strafe, ViewPreset,
};
use crate::picking::Picker;

/// A discrete or parameterized operation the camera can perform.
///
/// ```ignore
/// camera.execute(CameraCommand::ToggleView { preset: ViewPreset::Top }, &mut NoPicking);
/// camera.execute(CameraCommand::Zoom { delta: 0.1 }, &mut NoPicking);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    // ── Gestures ────────────────────────────────────────────────────
    /// Start a drag at a pixel position (records the pointer, may pick a
    /// pivot).
    BeginGesture {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },

    /// Rotate toward a pixel position.
    Rotate {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
        /// Snap to the nearest axis-aligned view instead of following the
        /// pointer.
        snap: bool,
    },

    /// Pan by a scaled screen-space delta.
    Pan {
        /// Horizontal and vertical delta.
        delta: Vec2,
    },

    /// Zoom (positive = closer).
    Zoom {
        /// Zoom amount.
        delta: f32,
    },

    /// Set the free-look motion flags.
    SetStrafe {
        /// Sideways motion.
        x: Strafe,
        /// Forward/backward motion.
        z: Strafe,
    },

    // ── Views ───────────────────────────────────────────────────────
    /// Return to the home view.
    ResetView,

    /// Jump to an axis-aligned preset.
    ResetViewTo {
        /// Target preset.
        preset: ViewPreset,
    },

    /// Jump to a preset, or to its opposite when already facing it.
    ToggleView {
        /// Preset to toggle.
        preset: ViewPreset,
    },

    /// Snap to the nearest of the 24 axis-aligned orientations.
    SnapToNearest,

    // ── Configuration ───────────────────────────────────────────────
    /// Switch the rotation model.
    SetInteractionMode {
        /// New rotation model.
        mode: InteractionMode,
    },

    /// Switch the projection.
    SetProjectionMode {
        /// New projection.
        mode: ProjectionMode,
    },

    /// Flip between perspective and orthographic.
    ToggleProjection,

    /// Set the vertical field of view.
    SetFieldOfView {
        /// Field of view in degrees.
        degrees: f32,
    },

    /// Flip pivot mode.
    TogglePivot,

    /// Resize the viewport.
    SetViewport {
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
    },

    /// Fit the clipping planes to a scene box (`None` reuses the last box).
    OptimizeNearFar {
        /// Scene bounds.
        bounds: Option<BoundingBox>,
    },
}

impl CameraController {
    /// Apply a command. `picker` is consulted only by
    /// [`CameraCommand::BeginGesture`] while pivot mode is on.
    pub fn execute<P: Picker + ?Sized>(&mut self, command: CameraCommand, picker: &mut P) {
        log::trace!("execute {command:?}");
        match command {
            CameraCommand::BeginGesture { x, y } => self.begin_gesture(x, y, picker),
            CameraCommand::Rotate { x, y, snap } => self.rotate(x, y, snap),
            CameraCommand::Pan { delta } => self.translate(delta.x, delta.y),
            CameraCommand::Zoom { delta } => self.zoom(delta),
            CameraCommand::SetStrafe { x, z } => self.set_strafe(x, z),
            CameraCommand::ResetView => self.reset_view(),
            CameraCommand::ResetViewTo { preset } => self.reset_view_to(preset),
            CameraCommand::ToggleView { preset } => self.toggle_view(preset),
            CameraCommand::SnapToNearest => self.snap_to_nearest(),
            CameraCommand::SetInteractionMode { mode } => self.set_interaction_mode(mode),
            CameraCommand::SetProjectionMode { mode } => self.set_projection_mode(mode),
            CameraCommand::ToggleProjection => {
                let mode = match self.projection_mode() {
                    ProjectionMode::Perspective => ProjectionMode::Orthographic,
                    ProjectionMode::Orthographic => ProjectionMode::Perspective,
                };
                self.set_projection_mode(mode);
            }
            CameraCommand::SetFieldOfView { degrees } => self.set_field_of_view(degrees),
            CameraCommand::TogglePivot => {
                let enabled = self.toggle_pivot();
                log::debug!("pivot mode {}", if enabled { "on" } else { "off" });
            }
            CameraCommand::SetViewport { width, height } => self.set_viewport(width, height),
            CameraCommand::OptimizeNearFar { bounds } => self.optimize_near_far(bounds),
        }
    }
}
