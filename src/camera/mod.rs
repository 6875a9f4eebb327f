//! Camera system for orbit viewing.
//!
//! Provides a projection-aware camera, the spherical coordinate helper,
//! and damped orbit controls with pointer, touch, wheel and keyboard input.

/// Damped orbit controls: pending motion, clamping and per-frame update.
pub mod controller;
/// Core camera struct and projection types.
pub mod core;
/// Event handling and gesture selection for the orbit controls.
pub mod input;
/// Spherical coordinates relative to an orbit target.
pub mod spherical;

pub use controller::{OrbitControls, SphericalDelta};
pub use self::core::{Camera, Projection};
pub use input::Viewport;
pub use spherical::Spherical;
