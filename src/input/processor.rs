//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held buttons, modifier keys, held free-look keys) and the key-binding
//! map. It is the only thing that sits between raw window events and
//! [`CameraController::execute`](crate::CameraController::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::camera::Strafe;
use crate::command::CameraCommand;
use crate::options::{KeyAction, KeyBindings, StrafeKey};

/// Pixels of drag per unit of pan delta.
const PAN_PIXEL_SCALE: f32 = 1000.0;

/// Zoom amount per wheel line.
const WHEEL_ZOOM_STEP: f32 = 0.02;

/// Converts raw window events into [`CameraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     camera.execute(cmd, &mut picker);
/// }
///
/// if let Some(cmd) = input_processor.handle_key("KeyF", true) {
///     camera.execute(cmd, &mut picker);
/// }
/// ```
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    mouse_pos: Vec2,
    /// Button currently driving a drag, if any.
    drag_button: Option<MouseButton>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Free-look motion currently requested by held keys.
    strafe_x: Strafe,
    strafe_z: Strafe,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeyBindings::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            drag_button: None,
            shift_pressed: false,
            strafe_x: Strafe::Still,
            strafe_z: Strafe::Still,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Button currently held for a drag.
    #[must_use]
    pub fn drag_button(&self) -> Option<MouseButton> {
        self.drag_button
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Process a key press or release.
    ///
    /// Free-look keys yield a [`CameraCommand::SetStrafe`] on both press
    /// and release; other bound keys fire once on press.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> Option<CameraCommand> {
        if let Some(direction) = self.key_bindings.strafe_key(key) {
            let (axis, toward) = match direction {
                StrafeKey::Forward => (&mut self.strafe_z, Strafe::Negative),
                StrafeKey::Backward => (&mut self.strafe_z, Strafe::Positive),
                StrafeKey::Left => (&mut self.strafe_x, Strafe::Negative),
                StrafeKey::Right => (&mut self.strafe_x, Strafe::Positive),
            };
            if pressed {
                *axis = toward;
            } else if *axis == toward {
                // Releasing a key only stops its own direction
                *axis = Strafe::Still;
            }
            return Some(CameraCommand::SetStrafe {
                x: self.strafe_x,
                z: self.strafe_z,
            });
        }
        if !pressed {
            return None;
        }
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { lines } => Some(CameraCommand::Zoom {
                delta: lines * WHEEL_ZOOM_STEP,
            }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
            InputEvent::Resized { width, height } => {
                Some(CameraCommand::SetViewport { width, height })
            }
        }
    }

    /// Cursor moved: rotate on a left drag, pan on a right or middle drag.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<CameraCommand> {
        let pos = Vec2::new(x, y);
        let delta = pos - self.mouse_pos;
        self.mouse_pos = pos;

        match self.drag_button? {
            MouseButton::Left => Some(CameraCommand::Rotate {
                x,
                y,
                snap: self.shift_pressed,
            }),
            MouseButton::Right | MouseButton::Middle => Some(CameraCommand::Pan {
                delta: delta / PAN_PIXEL_SCALE,
            }),
        }
    }

    /// Mouse button press/release: a left press starts a rotation gesture.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<CameraCommand> {
        if !pressed {
            if self.drag_button == Some(button) {
                self.drag_button = None;
            }
            return None;
        }
        if self.drag_button.is_some() {
            return None;
        }
        self.drag_button = Some(button);
        (button == MouseButton::Left).then_some(CameraCommand::BeginGesture {
            x: self.mouse_pos.x,
            y: self.mouse_pos.y,
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::event::PIXELS_PER_LINE;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn button(button: MouseButton, pressed: bool) -> InputEvent {
        InputEvent::MouseButton { button, pressed }
    }

    #[test]
    fn left_drag_begins_then_rotates() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_event(moved(100.0, 50.0)), None);
        assert_eq!(
            input.handle_event(button(MouseButton::Left, true)),
            Some(CameraCommand::BeginGesture { x: 100.0, y: 50.0 })
        );
        assert_eq!(
            input.handle_event(moved(110.0, 60.0)),
            Some(CameraCommand::Rotate {
                x: 110.0,
                y: 60.0,
                snap: false,
            })
        );
        assert_eq!(input.handle_event(button(MouseButton::Left, false)), None);
        assert_eq!(input.handle_event(moved(120.0, 70.0)), None);
    }

    #[test]
    fn shift_drag_snaps() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(button(MouseButton::Left, true));
        let _ = input.handle_event(InputEvent::ModifiersChanged { shift: true });
        assert_eq!(
            input.handle_event(moved(5.0, 5.0)),
            Some(CameraCommand::Rotate {
                x: 5.0,
                y: 5.0,
                snap: true,
            })
        );
    }

    #[test]
    fn right_drag_pans_scaled_delta() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(100.0, 100.0));
        assert_eq!(input.handle_event(button(MouseButton::Right, true)), None);
        assert_eq!(
            input.handle_event(moved(150.0, 80.0)),
            Some(CameraCommand::Pan {
                delta: Vec2::new(0.05, -0.02),
            })
        );
    }

    #[test]
    fn second_button_does_not_steal_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(button(MouseButton::Middle, true));
        assert_eq!(input.handle_event(button(MouseButton::Left, true)), None);
        assert_eq!(input.drag_button(), Some(MouseButton::Middle));
        let _ = input.handle_event(button(MouseButton::Left, false));
        assert_eq!(input.drag_button(), Some(MouseButton::Middle));
    }

    #[test]
    fn scroll_zooms() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { lines: 2.0 }),
            Some(CameraCommand::Zoom { delta: 0.04 })
        );
        // A trackpad swipe of one line's worth of pixels zooms like one notch
        assert_eq!(
            input.handle_event(InputEvent::scroll_pixels(PIXELS_PER_LINE)),
            Some(CameraCommand::Zoom {
                delta: WHEEL_ZOOM_STEP,
            })
        );
    }

    #[test]
    fn resize_updates_viewport_without_touching_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(button(MouseButton::Right, true));
        assert_eq!(
            input.handle_event(InputEvent::Resized {
                width: 1280.0,
                height: 720.0,
            }),
            Some(CameraCommand::SetViewport {
                width: 1280.0,
                height: 720.0,
            })
        );
        assert_eq!(input.drag_button(), Some(MouseButton::Right));
    }

    #[test]
    fn bound_keys_fire_on_press_only() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_key("KeyN", true), Some(CameraCommand::SnapToNearest));
        assert_eq!(input.handle_key("KeyN", false), None);
        assert_eq!(input.handle_key("KeyZ", true), None);

        input.key_bindings_mut().bind("KeyZ", KeyAction::ResetView);
        assert_eq!(input.handle_key("KeyZ", true), Some(CameraCommand::ResetView));
    }

    #[test]
    fn strafe_keys_track_held_direction() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_key("KeyW", true),
            Some(CameraCommand::SetStrafe {
                x: Strafe::Still,
                z: Strafe::Negative,
            })
        );
        let _ = input.handle_key("KeyD", true);
        // S pressed while W held takes over; releasing W then changes nothing
        let _ = input.handle_key("KeyS", true);
        assert_eq!(
            input.handle_key("KeyW", false),
            Some(CameraCommand::SetStrafe {
                x: Strafe::Positive,
                z: Strafe::Positive,
            })
        );
        let _ = input.handle_key("KeyS", false);
        assert_eq!(
            input.handle_key("KeyD", false),
            Some(CameraCommand::SetStrafe {
                x: Strafe::Still,
                z: Strafe::Still,
            })
        );
    }
}
