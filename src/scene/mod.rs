//! Scene bodies: a registry of orbitable bodies and the descriptions they
//! are built from.
//!
//! Bodies live in a flat arena ([`BodyRegistry`]) and are referred to by
//! [`BodyHandle`]. Motion is the simplified circular kind: each body circles
//! the origin or a parent body and spins about its own axis.

mod body;
mod registry;
pub mod system;

pub use body::{Body, BodyHandle, CircularOrbit};
pub use registry::{BodyRegistry, Motion};
pub use system::{BodyDescription, SystemDescription};
