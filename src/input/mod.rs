//! Input handling: event types, pointer tracking, gesture classification,
//! and the input processor that converts key presses into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Gesture kinds and button/finger bindings.
pub mod gesture;
/// Bindable key actions.
pub mod keyboard;
/// Active pointer tracking.
pub mod pointer;
/// Converts key presses into engine commands.
pub mod processor;
/// Translation of `winit` window events.
#[cfg(feature = "viewer")]
pub mod winit_adapter;

pub use event::{
    DeltaMode, EventResponse, InputEvent, Modifiers, MouseButton,
    PointerCapture, PointerInput, PointerKind, WheelInput,
};
pub use gesture::{GestureKind, MouseBindings, TouchBindings};
pub use keyboard::KeyAction;
pub use pointer::PointerSession;
pub use processor::InputProcessor;
#[cfg(feature = "viewer")]
pub use winit_adapter::WinitAdapter;
