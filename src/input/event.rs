/// Pixels of trackpad scrolling treated as one wheel line.
pub const PIXELS_PER_LINE: f32 = 40.0;

/// Window events the camera reacts to, stripped of platform types.
///
/// Hosts translate their windowing events into these and hand them to an
/// [`InputProcessor`](super::InputProcessor), which turns them into
/// [`CameraCommand`](crate::CameraCommand)s:
///
/// ```ignore
/// let resized = InputEvent::Resized { width: 1280.0, height: 720.0 };
/// if let Some(cmd) = input_processor.handle_event(resized) {
///     camera.execute(cmd, &mut picker);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position, driving rotation and pan drags.
    CursorMoved {
        /// Pixels from the left edge of the viewport.
        x: f32,
        /// Pixels from the top edge of the viewport.
        y: f32,
    },
    /// Press or release; left starts a rotation gesture, right and middle a
    /// pan.
    MouseButton {
        /// Button that changed.
        button: MouseButton,
        /// Press when `true`.
        pressed: bool,
    },
    /// Wheel travel toward the scene (positive) or away from it.
    Scroll {
        /// Travel in wheel lines. Use [`InputEvent::scroll_pixels`] for
        /// pixel-precise devices.
        lines: f32,
    },
    /// Shift toggles snapping on rotation drags.
    ModifiersChanged {
        /// Shift held.
        shift: bool,
    },
    /// The drawable area changed size.
    Resized {
        /// Width in physical pixels.
        width: f32,
        /// Height in physical pixels.
        height: f32,
    },
}

impl InputEvent {
    /// Scroll event from a pixel delta (trackpads), converted to wheel
    /// lines at [`PIXELS_PER_LINE`].
    #[must_use]
    pub fn scroll_pixels(pixels: f32) -> Self {
        Self::Scroll {
            lines: pixels / PIXELS_PER_LINE,
        }
    }
}

/// Pointer button driving a camera gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Rotates.
    Left,
    /// Pans.
    Right,
    /// Pans.
    Middle,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseScrollDelta> for InputEvent {
    fn from(delta: winit::event::MouseScrollDelta) -> Self {
        match delta {
            winit::event::MouseScrollDelta::LineDelta(_, lines) => Self::Scroll { lines },
            winit::event::MouseScrollDelta::PixelDelta(position) => {
                Self::scroll_pixels(position.y as f32)
            }
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::dpi::PhysicalSize<u32>> for InputEvent {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::Resized {
            width: size.width as f32,
            height: size.height as f32,
        }
    }
}
