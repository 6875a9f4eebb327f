//! Shared utilities for hosts driving the orrery.

pub mod frame_timing;
