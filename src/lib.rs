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
// Complexity limits (thresholds in clippy.toml)
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

//! Damped orbit camera controls and focus choreography for
//! solar-system style scenes.
//!
//! Orrery owns a camera, the orbit controls that steer it, a registry of
//! orbiting bodies, and a focus sequencer that flies the camera to a single
//! isolated body and back to the overview. It does not render: hosts read
//! the camera matrices and body positions each frame and draw them however
//! they like.
//!
//! # Key entry points
//!
//! - [`Orrery`] - the engine: input routing, the frame pump, focus commands
//! - [`camera::OrbitControls`] - damped orbit/pan/dolly controls usable on
//!   their own with any [`camera::Camera`]
//! - [`focus::FocusSequencer`] - the focus / unfocus state machine
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Frame loop
//!
//! ```
//! use orrery::{options::Options, Orrery, OrreryCommand};
//!
//! let mut orrery = Orrery::solar(Options::default(), 16.0 / 9.0)?;
//! orrery.execute(OrreryCommand::FocusNamed { name: "Earth".into() })?;
//! for _ in 0..180 {
//!     let _ = orrery.frame(1.0 / 60.0);
//! }
//! let view = orrery.camera().view_matrix();
//! # let _ = view;
//! # Ok::<(), orrery::OrreryError>(())
//! ```
//!
//! Platform glue lives behind features: `viewer` adds a winit window and
//! event adapter, `web` adds DOM listener bindings.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod focus;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{command::OrreryCommand, Orrery};
pub use error::OrreryError;
pub use options::Options;
