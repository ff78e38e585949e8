use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::ViewPreset;
use crate::command::CameraCommand;

/// Parameterless camera actions that can be bound to a key.
///
/// Parameterized commands like `Rotate` come from the mouse gesture
/// interpreter, not key lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Return to the home view.
    ResetView,
    /// Front view, or back when already facing front.
    ToggleViewFront,
    /// Top view, or bottom when already looking down.
    ToggleViewTop,
    /// Left view, or right when already facing left.
    ToggleViewLeft,
    /// Snap to the nearest axis-aligned orientation.
    SnapToNearest,
    /// Flip pivot mode.
    TogglePivot,
    /// Flip between perspective and orthographic.
    ToggleProjection,
}

impl KeyAction {
    /// Convert to the corresponding [`CameraCommand`].
    #[must_use]
    pub fn to_command(self) -> CameraCommand {
        match self {
            Self::ResetView => CameraCommand::ResetView,
            Self::ToggleViewFront => CameraCommand::ToggleView {
                preset: ViewPreset::Front,
            },
            Self::ToggleViewTop => CameraCommand::ToggleView {
                preset: ViewPreset::Top,
            },
            Self::ToggleViewLeft => CameraCommand::ToggleView {
                preset: ViewPreset::Left,
            },
            Self::SnapToNearest => CameraCommand::SnapToNearest,
            Self::TogglePivot => CameraCommand::TogglePivot,
            Self::ToggleProjection => CameraCommand::ToggleProjection,
        }
    }
}

/// Free-look directions held down on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrafeKey {
    /// Move toward the scene.
    Forward,
    /// Move away from the scene.
    Backward,
    /// Slide left.
    Left,
    /// Slide right.
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyF"`, `"Tab"`, `"Escape"`, etc.
pub struct KeyBindings {
    /// Key string → discrete action.
    pub bindings: HashMap<String, KeyAction>,
    /// Key string → free-look direction (active while held).
    pub strafe: HashMap<String, StrafeKey>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyR".into(), KeyAction::ResetView),
            ("KeyF".into(), KeyAction::ToggleViewFront),
            ("KeyT".into(), KeyAction::ToggleViewTop),
            ("KeyL".into(), KeyAction::ToggleViewLeft),
            ("KeyN".into(), KeyAction::SnapToNearest),
            ("KeyP".into(), KeyAction::TogglePivot),
            ("KeyO".into(), KeyAction::ToggleProjection),
        ]);
        let strafe = HashMap::from([
            ("KeyW".into(), StrafeKey::Forward),
            ("KeyS".into(), StrafeKey::Backward),
            ("KeyA".into(), StrafeKey::Left),
            ("KeyD".into(), StrafeKey::Right),
        ]);
        Self { bindings, strafe }
    }
}

impl KeyBindings {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Look up the free-look direction for a key string.
    #[must_use]
    pub fn strafe_key(&self, key: &str) -> Option<StrafeKey> {
        self.strafe.get(key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: impl Into<String>, action: KeyAction) {
        let _ = self.bindings.insert(key.into(), action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lookup() {
        let keys = KeyBindings::default();
        assert_eq!(keys.lookup("KeyF"), Some(KeyAction::ToggleViewFront));
        assert_eq!(keys.lookup("KeyZ"), None);
        assert_eq!(keys.strafe_key("KeyW"), Some(StrafeKey::Forward));
        assert_eq!(keys.strafe_key("KeyF"), None);
    }

    #[test]
    fn rebinding_replaces_key() {
        let mut keys = KeyBindings::default();
        keys.bind("KeyF", KeyAction::SnapToNearest);
        assert_eq!(
            keys.lookup("KeyF").map(KeyAction::to_command),
            Some(CameraCommand::SnapToNearest)
        );
    }
}
