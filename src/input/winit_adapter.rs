use glam::Vec2;
use winit::event::{
    ElementState, MouseScrollDelta, Touch, TouchPhase, WindowEvent,
};
use winit::keyboard::PhysicalKey;

use super::event::{
    DeltaMode, InputEvent, Modifiers, MouseButton, PointerInput, WheelInput,
};

/// Turns `winit` window events into [`InputEvent`]s.
///
/// winit reports cursor position and modifier state in separate events, so
/// the adapter remembers both and stamps them onto button, wheel and touch
/// events.
#[derive(Debug, Clone, Default)]
pub struct WinitAdapter {
    cursor: Vec2,
    modifiers: Modifiers,
}

impl WinitAdapter {
    /// Create an adapter with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Translate one window event. Events the orrery does not use, and
    /// pure state updates (modifier changes), yield `None`.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                self.modifiers = Modifiers {
                    shift: state.shift_key(),
                    ctrl: state.control_key(),
                    alt: state.alt_key(),
                    meta: state.super_key(),
                };
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMove(self.mouse(MouseButton::Left)))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pointer = self.mouse(MouseButton::from(*button));
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerDown(pointer),
                    ElementState::Released => InputEvent::PointerUp(pointer),
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // winit scrolls positive away from the user; wheel input
                // follows the DOM, positive toward the user
                let (delta_y, mode) = match delta {
                    MouseScrollDelta::LineDelta(_, y) => (-*y, DeltaMode::Line),
                    MouseScrollDelta::PixelDelta(pos) => {
                        (-(pos.y as f32), DeltaMode::Pixel)
                    }
                };
                Some(InputEvent::Wheel(WheelInput {
                    delta_y,
                    mode,
                    x: self.cursor.x,
                    y: self.cursor.y,
                    ctrl: self.modifiers.ctrl,
                }))
            }
            WindowEvent::Touch(touch) => Some(self.touch(touch)),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let code = format!("{code:?}");
                Some(match event.state {
                    ElementState::Pressed => InputEvent::KeyDown {
                        code,
                        modifiers: self.modifiers,
                    },
                    ElementState::Released => InputEvent::KeyUp { code },
                })
            }
            _ => None,
        }
    }

    fn mouse(&self, button: MouseButton) -> PointerInput {
        PointerInput::mouse(button, self.cursor.x, self.cursor.y)
            .with_modifiers(self.modifiers)
    }

    fn touch(&self, touch: &Touch) -> InputEvent {
        let pointer = PointerInput::touch(
            touch.id as i32,
            touch.location.x as f32,
            touch.location.y as f32,
        )
        .with_modifiers(self.modifiers);
        match touch.phase {
            TouchPhase::Started => InputEvent::PointerDown(pointer),
            TouchPhase::Moved => InputEvent::PointerMove(pointer),
            TouchPhase::Ended => InputEvent::PointerUp(pointer),
            TouchPhase::Cancelled => InputEvent::PointerCancel(pointer),
        }
    }
}
