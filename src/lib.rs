// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive camera controller for real-time 3D viewers.
//!
//! Vantage turns pointer drags, wheel steps and key presses into a camera
//! orientation and translation, and keeps the view and projection matrices
//! in sync with them. Three rotation models are available (orbit, virtual
//! trackball, screen-plane), rotation can be re-centered on a picked point
//! without a visual jump, and the view can jump or snap to axis-aligned
//! orientations.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - owns the camera state and matrices
//! - [`command::CameraCommand`] - the camera's interactive vocabulary
//! - [`input::InputProcessor`] - maps window events to commands
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`picking::Picker`] - seam for scene picking supplied by the host
//!
//! # Frame loop
//!
//! The camera never renders or schedules anything itself. Hosts feed it
//! input, call [`CameraController::update_translation`] and
//! [`CameraController::tick_animation`] once per frame, and upload
//! [`CameraController::uniform`] to the GPU.

pub mod camera;
pub mod command;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod util;

pub use camera::{CameraController, InteractionMode, ProjectionMode, ViewPreset};
pub use command::CameraCommand;
pub use error::VantageError;
pub use options::{CameraOptions, Options};
