//! Input routing for [`Orrery`].

use super::Orrery;
use crate::focus::CameraDriver;
use crate::input::{EventResponse, InputEvent};

impl Orrery {
    /// Process a platform-agnostic input event.
    ///
    /// Bound keys become commands; everything else goes to the orbit
    /// controls. While a focus flight owns the camera the controls still
    /// track pointers (so gestures end cleanly) but their motion is
    /// dropped.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let response = orrery.handle_input(&InputEvent::ContextMenu);
    /// if response.prevent_default {
    ///     event.prevent_default();
    /// }
    /// ```
    pub fn handle_input(&mut self, event: &InputEvent) -> EventResponse {
        if let Some(command) = self.input.handle_event(event) {
            if let Err(e) = self.execute(command) {
                log::warn!("command failed: {e}");
            }
            return EventResponse::CONSUMED.preventing_default();
        }

        let response = self.controls.handle_event(event, &self.camera);
        if self.sequencer.driver() == CameraDriver::Tween {
            self.controls.discard_pending();
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Viewport;
    use crate::focus::FocusState;
    use crate::input::{Modifiers, PointerInput, WheelInput};
    use crate::options::Options;

    fn key(code: &str) -> InputEvent {
        InputEvent::KeyDown {
            code: code.into(),
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn bound_keys_drive_focus() {
        let mut orrery = Orrery::solar(Options::default(), 1.0).unwrap();
        orrery.connect(Some(Viewport::sized(800.0, 600.0)));

        let r = orrery.handle_input(&key("Tab"));
        assert!(r.prevent_default);
        assert!(matches!(orrery.focus_state(), FocusState::Focusing(_)));

        let _ = orrery.handle_input(&key("Escape"));
        assert!(matches!(orrery.focus_state(), FocusState::Unfocusing(_)));
    }

    #[test]
    fn gestures_during_flight_do_not_move_camera() {
        let mut orrery = Orrery::solar(Options::default(), 1.0).unwrap();
        orrery.connect(Some(Viewport::sized(800.0, 600.0)));
        orrery.focus_named("Earth").unwrap();

        let r = orrery.handle_input(&InputEvent::Wheel(WheelInput::pixels(
            -500.0, 400.0, 300.0,
        )));
        assert!(r.consumed);
        assert_eq!(orrery.controls().pending().scale, 1.0);

        let _ = orrery.handle_input(&InputEvent::PointerDown(
            PointerInput::touch(1, 10.0, 10.0),
        ));
        let _ = orrery.handle_input(&InputEvent::PointerMove(
            PointerInput::touch(1, 90.0, 10.0),
        ));
        assert_eq!(orrery.controls().pending().theta, 0.0);
        assert!(orrery.controls().is_interacting());
    }

    #[test]
    fn unbound_keys_reach_the_controls() {
        let mut orrery = Orrery::solar(Options::default(), 1.0).unwrap();
        orrery.connect(Some(Viewport::sized(800.0, 600.0)));
        let r = orrery.handle_input(&key("ArrowUp"));
        assert!(r.consumed);
        assert!(orrery.controls().pending_pan().length() > 0.0);
    }
}
