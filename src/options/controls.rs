use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::gesture::{MouseBindings, TouchBindings};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Orbit control behaviour: speeds, damping, auto-rotation and bindings.
pub struct ControlOptions {
    /// Let motion coast to a stop instead of halting immediately.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Fraction of the pending motion applied per update when damping.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Pixels panned per arrow-key press.
    #[schemars(skip)]
    pub key_pan_speed: f32,
    /// Rotation per arrow-key press, in "pixels" of drag.
    #[schemars(skip)]
    pub key_rotate_speed: f32,
    /// Pan in screen space rather than in the plane orthogonal to `up`.
    #[schemars(skip)]
    pub screen_space_panning: bool,
    /// Slowly orbit while the user is idle.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Auto-rotation speed; 2.0 is one orbit per 30 seconds at 60 fps.
    #[schemars(title = "Auto Rotate Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
    /// Dolly toward the point under the cursor instead of the view center.
    #[schemars(title = "Zoom To Cursor")]
    pub zoom_to_cursor: bool,
    /// Allow orbiting.
    #[schemars(skip)]
    pub enable_rotate: bool,
    /// Allow dolly / zoom.
    #[schemars(skip)]
    pub enable_zoom: bool,
    /// Allow panning.
    #[schemars(skip)]
    pub enable_pan: bool,
    /// React to arrow keys.
    #[schemars(skip)]
    pub listen_to_keys: bool,
    /// Mouse button bindings.
    #[schemars(skip)]
    pub mouse_buttons: MouseBindings,
    /// Touch bindings.
    #[schemars(skip)]
    pub touches: TouchBindings,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            pan_speed: 1.0,
            zoom_speed: 1.0,
            key_pan_speed: 7.0,
            key_rotate_speed: 1.0,
            screen_space_panning: true,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            zoom_to_cursor: false,
            enable_rotate: true,
            enable_zoom: true,
            enable_pan: true,
            listen_to_keys: true,
            mouse_buttons: MouseBindings::default(),
            touches: TouchBindings::default(),
        }
    }
}
