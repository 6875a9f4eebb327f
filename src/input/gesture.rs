//! Gesture classification for the orbit controls.
//!
//! A gesture is chosen when a pointer goes down (by mouse button and
//! modifiers, or by the number of touching fingers) and held until every
//! participating pointer is released.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The camera motion an ongoing gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Orbit around the target.
    Rotate,
    /// Translate camera and target together.
    Pan,
    /// Move toward / away from the target.
    Dolly,
    /// Two-finger pinch (dolly) combined with two-finger drag (pan).
    DollyPan,
    /// Two-finger pinch (dolly) combined with two-finger drag (rotate).
    DollyRotate,
}

/// Which device drives the active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSource {
    /// Mouse buttons.
    Mouse,
    /// One or more touch points.
    Touch,
}

/// A gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveGesture {
    /// Camera motion being produced.
    pub kind: GestureKind,
    /// Device driving it.
    pub source: GestureSource,
}

/// Action bound to a mouse button.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseAction {
    /// Orbit (modifiers swap to pan).
    Rotate,
    /// Dolly by vertical drag.
    Dolly,
    /// Pan (modifiers swap to rotate).
    Pan,
}

/// Mouse button → action mapping. `None` leaves a button unbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MouseBindings {
    /// Left button action.
    pub left: Option<MouseAction>,
    /// Middle button action.
    pub middle: Option<MouseAction>,
    /// Right button action.
    pub right: Option<MouseAction>,
}

impl Default for MouseBindings {
    fn default() -> Self {
        Self {
            left: Some(MouseAction::Rotate),
            middle: Some(MouseAction::Dolly),
            right: Some(MouseAction::Pan),
        }
    }
}

/// Action for a single touching finger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OneFingerAction {
    /// Orbit.
    Rotate,
    /// Pan.
    Pan,
}

/// Action for two touching fingers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TwoFingerAction {
    /// Pinch to dolly, drag to pan.
    DollyPan,
    /// Pinch to dolly, drag to rotate.
    DollyRotate,
}

/// Finger-count → action mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TouchBindings {
    /// One-finger action.
    pub one: OneFingerAction,
    /// Two-finger action.
    pub two: TwoFingerAction,
}

impl Default for TouchBindings {
    fn default() -> Self {
        Self {
            one: OneFingerAction::Rotate,
            two: TwoFingerAction::DollyPan,
        }
    }
}

impl From<OneFingerAction> for GestureKind {
    fn from(action: OneFingerAction) -> Self {
        match action {
            OneFingerAction::Rotate => Self::Rotate,
            OneFingerAction::Pan => Self::Pan,
        }
    }
}

impl From<TwoFingerAction> for GestureKind {
    fn from(action: TwoFingerAction) -> Self {
        match action {
            TwoFingerAction::DollyPan => Self::DollyPan,
            TwoFingerAction::DollyRotate => Self::DollyRotate,
        }
    }
}
