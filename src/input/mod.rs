//! Input handling: event types and the input processor that converts raw
//! window events into camera commands.

/// Platform-agnostic window events.
pub mod event;
pub mod processor;

pub use event::{InputEvent, MouseButton, PIXELS_PER_LINE};
pub use processor::InputProcessor;
