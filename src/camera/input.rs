//! Event handling for [`OrbitControls`].
//!
//! Handlers only classify gestures and queue motion on the controls; the
//! camera itself moves in [`OrbitControls::update`].

use std::f32::consts::TAU;

use glam::Vec2;

use super::controller::OrbitControls;
use super::core::Camera;
use crate::input::event::{
    DeltaMode, EventResponse, InputEvent, Modifiers, MouseButton,
    PointerCapture, PointerInput, PointerKind, WheelInput,
};
use crate::input::gesture::{
    ActiveGesture, GestureKind, GestureSource, MouseAction,
};
use crate::input::pointer::PointerSession;

/// Screen rectangle of the element the controls listen on, in the same
/// client-pixel space as pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// A viewport with an explicit origin.
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A viewport anchored at the client origin.
    #[must_use]
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Map a client position to normalized device coordinates.
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new(
            (x - self.left) / w * 2.0 - 1.0,
            -((y - self.top) / h) * 2.0 + 1.0,
        )
    }
}

impl OrbitControls {
    /// Start listening on an element covering `viewport`.
    ///
    /// Passing `None` (no element) logs a warning and leaves the controls
    /// detached; every event is then ignored.
    pub fn connect(&mut self, viewport: Option<Viewport>) {
        let Some(viewport) = viewport else {
            log::warn!(
                "OrbitControls: connect() called without an element, input stays detached"
            );
            return;
        };
        if self.viewport.is_some() {
            self.disconnect();
        }
        self.viewport = Some(viewport);
        log::debug!(
            "OrbitControls connected ({}x{})",
            viewport.width,
            viewport.height
        );
    }

    /// Stop listening. Any gesture in progress is dropped.
    pub fn disconnect(&mut self) {
        if self.viewport.take().is_some() {
            log::debug!("OrbitControls disconnected");
        }
        self.session = None;
        self.gesture = None;
        self.control_active = false;
    }

    /// Whether the controls are attached to an element.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.viewport.is_some()
    }

    /// Update the element rectangle after a resize or layout change.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport.is_some() {
            self.viewport = Some(viewport);
        }
    }

    /// Enable or disable arrow-key navigation.
    pub fn listen_to_key_events(&mut self, listen: bool) {
        self.listen_to_keys = listen;
    }

    /// Gesture currently in progress, if any.
    #[must_use]
    pub fn gesture(&self) -> Option<GestureKind> {
        self.gesture.map(|g| g.kind)
    }

    /// Whether any pointer is pressed on the element.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// Number of pointers currently pressed.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.session.as_ref().map_or(0, PointerSession::len)
    }

    /// Feed one input event. `camera` is read for pan scaling, projection
    /// checks and cursor rays; it is not modified.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        camera: &Camera,
    ) -> EventResponse {
        if self.viewport.is_none() {
            return EventResponse::IGNORED;
        }
        // ctrl tracking stays live even when the controls are disabled
        match event {
            InputEvent::KeyDown { code, .. } if is_control(code) => {
                self.control_active = true;
            }
            InputEvent::KeyUp { code } if is_control(code) => {
                self.control_active = false;
            }
            _ => {}
        }
        // releases always reach the session so it never holds lifted pointers
        if let InputEvent::PointerUp(p) | InputEvent::PointerCancel(p) = event
        {
            return self.on_pointer_up(p);
        }
        if !self.enabled {
            return EventResponse::IGNORED;
        }

        match event {
            InputEvent::PointerDown(p) => self.on_pointer_down(p, camera),
            InputEvent::PointerMove(p) => self.on_pointer_move(p, camera),
            InputEvent::PointerUp(p) | InputEvent::PointerCancel(p) => {
                self.on_pointer_up(p)
            }
            InputEvent::Wheel(w) => self.on_wheel(w, camera),
            InputEvent::KeyDown { code, modifiers } => {
                self.on_key_down(code, *modifiers, camera)
            }
            InputEvent::KeyUp { .. } => EventResponse::IGNORED,
            InputEvent::ContextMenu => {
                EventResponse::CONSUMED.preventing_default()
            }
        }
    }

    // ── Pointer routing ─────────────────────────────────────────────────

    fn on_pointer_down(
        &mut self,
        p: &PointerInput,
        camera: &Camera,
    ) -> EventResponse {
        let session = self.session.get_or_insert_with(PointerSession::new);
        if session.is_tracked(p.pointer_id) {
            return EventResponse::IGNORED;
        }
        let first = session.is_empty();
        session.add(p.pointer_id);

        if p.kind == PointerKind::Touch {
            self.on_touch_start(p);
        } else {
            self.on_mouse_down(p, camera);
        }
        if let Some(gesture) = self.gesture {
            log::trace!("gesture start: {:?}", gesture.kind);
        }

        EventResponse {
            consumed: true,
            prevent_default: false,
            capture: first.then_some(PointerCapture::Capture(p.pointer_id)),
        }
    }

    fn on_pointer_move(
        &mut self,
        p: &PointerInput,
        camera: &Camera,
    ) -> EventResponse {
        let tracked = self
            .session
            .as_ref()
            .is_some_and(|s| s.is_tracked(p.pointer_id));
        if !tracked {
            return EventResponse::IGNORED;
        }
        if p.kind == PointerKind::Touch {
            self.on_touch_move(p, camera);
        } else {
            self.on_mouse_move(p, camera);
        }
        EventResponse::CONSUMED
    }

    fn on_pointer_up(&mut self, p: &PointerInput) -> EventResponse {
        let Some(session) = self.session.as_mut() else {
            return EventResponse::IGNORED;
        };
        if !session.is_tracked(p.pointer_id) {
            return EventResponse::IGNORED;
        }
        session.remove(p.pointer_id);
        let remaining = session.len();
        let first = session
            .ids()
            .first()
            .map(|&id| (id, session.position(id).unwrap_or_default()));

        match (remaining, first) {
            (0, _) => {
                self.session = None;
                if let Some(gesture) = self.gesture.take() {
                    log::trace!("gesture end: {:?}", gesture.kind);
                }
                EventResponse {
                    consumed: true,
                    prevent_default: false,
                    capture: Some(PointerCapture::Release(p.pointer_id)),
                }
            }
            (1, Some((id, position))) => {
                let restart = PointerInput::touch(id, position.x, position.y);
                self.on_touch_start(&restart);
                EventResponse::CONSUMED
            }
            _ => EventResponse::CONSUMED,
        }
    }

    // ── Mouse ───────────────────────────────────────────────────────────

    fn on_mouse_down(&mut self, p: &PointerInput, camera: &Camera) {
        let action = match p.button {
            MouseButton::Left => self.mouse_buttons.left,
            MouseButton::Middle => self.mouse_buttons.middle,
            MouseButton::Right => self.mouse_buttons.right,
            MouseButton::Other(_) => None,
        };
        let swap = p.modifiers.swaps_gesture();
        let kind = match action {
            Some(MouseAction::Rotate) if swap => GestureKind::Pan,
            Some(MouseAction::Pan) if swap => GestureKind::Rotate,
            Some(MouseAction::Rotate) => GestureKind::Rotate,
            Some(MouseAction::Pan) => GestureKind::Pan,
            Some(MouseAction::Dolly) => GestureKind::Dolly,
            None => {
                self.gesture = None;
                return;
            }
        };

        let position = p.position();
        match kind {
            GestureKind::Rotate if self.enable_rotate => {
                self.rotate_start = position;
            }
            GestureKind::Pan if self.enable_pan => self.pan_start = position,
            GestureKind::Dolly if self.enable_zoom => {
                self.update_zoom_parameters(p.x, p.y, camera);
                self.dolly_start = position;
            }
            _ => {
                self.gesture = None;
                return;
            }
        }
        self.gesture = Some(ActiveGesture {
            kind,
            source: GestureSource::Mouse,
        });
    }

    fn on_mouse_move(&mut self, p: &PointerInput, camera: &Camera) {
        let Some(gesture) = self.gesture else {
            return;
        };
        let position = p.position();
        match gesture.kind {
            GestureKind::Rotate if self.enable_rotate => {
                let delta = (position - self.rotate_start) * self.rotate_speed;
                self.rotate_by_pixels(delta);
                self.rotate_start = position;
            }
            GestureKind::Dolly if self.enable_zoom => {
                let dy = position.y - self.dolly_start.y;
                if dy > 0.0 {
                    let _ = self.dolly_out(camera, self.zoom_scale(dy));
                } else if dy < 0.0 {
                    let _ = self.dolly_in(camera, self.zoom_scale(dy));
                }
                self.dolly_start = position;
            }
            GestureKind::Pan if self.enable_pan => {
                let delta = (position - self.pan_start) * self.pan_speed;
                let _ = self.pan(camera, delta);
                self.pan_start = position;
            }
            _ => {}
        }
    }

    // ── Wheel ───────────────────────────────────────────────────────────

    fn on_wheel(&mut self, w: &WheelInput, camera: &Camera) -> EventResponse {
        if !self.enable_zoom || self.gesture.is_some() {
            return EventResponse::IGNORED;
        }
        let delta = self.normalize_wheel(w);
        self.update_zoom_parameters(w.x, w.y, camera);
        if delta < 0.0 {
            let _ = self.dolly_in(camera, self.zoom_scale(delta));
        } else if delta > 0.0 {
            let _ = self.dolly_out(camera, self.zoom_scale(delta));
        }
        EventResponse::CONSUMED.preventing_default()
    }

    /// Convert a wheel delta to pixels. Browsers flag trackpad pinches as
    /// ctrl-wheel events, which get a boost.
    fn normalize_wheel(&self, w: &WheelInput) -> f32 {
        let mut delta = match w.mode {
            DeltaMode::Pixel => w.delta_y,
            DeltaMode::Line => w.delta_y * 16.0,
            DeltaMode::Page => w.delta_y * 100.0,
        };
        if w.ctrl && !self.control_active {
            delta *= 10.0;
        }
        delta
    }

    // ── Touch ───────────────────────────────────────────────────────────

    fn on_touch_start(&mut self, p: &PointerInput) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.track(p.pointer_id, p.position());
        let count = session.len();
        let midpoint = self.touch_midpoint();

        let kind = match count {
            1 => {
                let kind = GestureKind::from(self.touches.one);
                let allowed = match kind {
                    GestureKind::Pan => self.enable_pan,
                    _ => self.enable_rotate,
                };
                if !allowed {
                    self.gesture = None;
                    return;
                }
                match kind {
                    GestureKind::Pan => self.pan_start = midpoint,
                    _ => self.rotate_start = midpoint,
                }
                kind
            }
            2 => {
                let kind = GestureKind::from(self.touches.two);
                let second = match kind {
                    GestureKind::DollyRotate => self.enable_rotate,
                    _ => self.enable_pan,
                };
                if !self.enable_zoom && !second {
                    self.gesture = None;
                    return;
                }
                if self.enable_zoom {
                    self.dolly_start = Vec2::new(0.0, self.touch_spread());
                }
                if second {
                    match kind {
                        GestureKind::DollyRotate => {
                            self.rotate_start = midpoint;
                        }
                        _ => self.pan_start = midpoint,
                    }
                }
                kind
            }
            _ => {
                self.gesture = None;
                return;
            }
        };
        self.gesture = Some(ActiveGesture {
            kind,
            source: GestureSource::Touch,
        });
    }

    fn on_touch_move(&mut self, p: &PointerInput, camera: &Camera) {
        if let Some(session) = self.session.as_mut() {
            session.track(p.pointer_id, p.position());
        }
        let Some(gesture) = self.gesture else {
            return;
        };
        match gesture.kind {
            GestureKind::Rotate if self.enable_rotate => {
                self.touch_rotate();
            }
            GestureKind::Pan if self.enable_pan => self.touch_pan(camera),
            GestureKind::DollyPan => {
                if self.enable_zoom {
                    self.touch_dolly(p, camera);
                }
                if self.enable_pan {
                    self.touch_pan(camera);
                }
            }
            GestureKind::DollyRotate => {
                if self.enable_zoom {
                    self.touch_dolly(p, camera);
                }
                if self.enable_rotate {
                    self.touch_rotate();
                }
            }
            _ => {}
        }
    }

    fn touch_rotate(&mut self) {
        let end = self.touch_midpoint();
        let delta = (end - self.rotate_start) * self.rotate_speed;
        self.rotate_by_pixels(delta);
        self.rotate_start = end;
    }

    fn touch_pan(&mut self, camera: &Camera) {
        let end = self.touch_midpoint();
        let delta = (end - self.pan_start) * self.pan_speed;
        let _ = self.pan(camera, delta);
        self.pan_start = end;
    }

    fn touch_dolly(&mut self, p: &PointerInput, camera: &Camera) {
        let Some(other) = self
            .session
            .as_ref()
            .and_then(|s| s.other_position(p.pointer_id))
        else {
            return;
        };
        let here = p.position();
        let end = Vec2::new(0.0, here.distance(other));
        if self.dolly_start.y > 0.0 {
            let scale = (end.y / self.dolly_start.y).powf(self.zoom_speed);
            let _ = self.dolly_out(camera, scale);
        }
        self.dolly_start = end;

        let center = (here + other) * 0.5;
        self.update_zoom_parameters(center.x, center.y, camera);
    }

    /// Position of a single touch, or the midpoint of the first two.
    fn touch_midpoint(&self) -> Vec2 {
        let Some(session) = self.session.as_ref() else {
            return Vec2::ZERO;
        };
        let pos = |id: i32| session.position(id).unwrap_or_default();
        match session.ids() {
            [only] => pos(*only),
            [a, b, ..] => (pos(*a) + pos(*b)) * 0.5,
            [] => Vec2::ZERO,
        }
    }

    fn touch_spread(&self) -> f32 {
        let Some(session) = self.session.as_ref() else {
            return 0.0;
        };
        match session.ids() {
            [a, b, ..] => {
                let a = session.position(*a).unwrap_or_default();
                let b = session.position(*b).unwrap_or_default();
                a.distance(b)
            }
            _ => 0.0,
        }
    }

    // ── Keyboard ────────────────────────────────────────────────────────

    fn on_key_down(
        &mut self,
        code: &str,
        modifiers: Modifiers,
        camera: &Camera,
    ) -> EventResponse {
        if !self.listen_to_keys {
            return EventResponse::IGNORED;
        }
        let height = self.viewport.map_or(1.0, |v| v.height.max(1.0));
        let rotate_step = TAU * self.key_rotate_speed / height;
        let rotate = modifiers.swaps_gesture();

        let (rotation, pan) = match code {
            "ArrowUp" => {
                ((0.0, rotate_step), Vec2::new(0.0, self.key_pan_speed))
            }
            "ArrowDown" => {
                ((0.0, -rotate_step), Vec2::new(0.0, -self.key_pan_speed))
            }
            "ArrowLeft" => {
                ((rotate_step, 0.0), Vec2::new(self.key_pan_speed, 0.0))
            }
            "ArrowRight" => {
                ((-rotate_step, 0.0), Vec2::new(-self.key_pan_speed, 0.0))
            }
            _ => return EventResponse::IGNORED,
        };

        if rotate && self.enable_rotate {
            self.rotate_left(rotation.0);
            self.rotate_up(rotation.1);
        } else if !rotate && self.enable_pan {
            if !self.pan(camera, pan) {
                return EventResponse::IGNORED;
            }
        } else {
            return EventResponse::IGNORED;
        }
        EventResponse::CONSUMED.preventing_default()
    }

    // ── Shared helpers ──────────────────────────────────────────────────

    /// Queue rotation for a pixel drag. A drag the full element height
    /// turns the camera by a full circle.
    fn rotate_by_pixels(&mut self, delta: Vec2) {
        let height = self.viewport.map_or(1.0, |v| v.height.max(1.0));
        self.rotate_left(TAU * delta.x / height);
        self.rotate_up(TAU * delta.y / height);
    }

    /// Record the cursor for zoom-to-cursor and aim the dolly ray at it.
    fn update_zoom_parameters(&mut self, x: f32, y: f32, camera: &Camera) {
        if !self.zoom_to_cursor {
            return;
        }
        let Some(viewport) = self.viewport else {
            return;
        };
        self.perform_cursor_zoom = true;
        self.cursor_ndc = viewport.to_ndc(x, y);
        let far = camera.unproject(self.cursor_ndc.extend(1.0));
        self.dolly_direction = (far - camera.position).normalize_or_zero();
    }
}

fn is_control(code: &str) -> bool {
    matches!(code, "ControlLeft" | "ControlRight" | "Control")
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::input::gesture::TwoFingerAction;
    use crate::options::{ControlOptions, OrbitLimits};

    fn connected() -> (Camera, OrbitControls) {
        let mut camera = Camera::perspective(
            Vec3::new(0.0, 30.0, 50.0),
            75.0,
            1.0,
            0.1,
            1000.0,
        );
        let options = ControlOptions {
            enable_damping: false,
            ..ControlOptions::default()
        };
        let mut controls =
            OrbitControls::new(&mut camera, &options, OrbitLimits::default());
        controls.connect(Some(Viewport::sized(600.0, 600.0)));
        (camera, controls)
    }

    fn down(p: PointerInput) -> InputEvent {
        InputEvent::PointerDown(p)
    }

    fn moved(p: PointerInput) -> InputEvent {
        InputEvent::PointerMove(p)
    }

    fn up(p: PointerInput) -> InputEvent {
        InputEvent::PointerUp(p)
    }

    #[test]
    fn one_finger_drag_rotates_by_height_fraction() {
        let (mut camera, mut controls) = connected();
        let _ = controls.update(&mut camera, None);
        let theta = controls.azimuthal_angle();
        let phi = controls.polar_angle();
        let distance = controls.distance(&camera);

        let _ = controls.handle_event(
            &down(PointerInput::touch(1, 200.0, 300.0)),
            &camera,
        );
        assert_eq!(controls.gesture(), Some(GestureKind::Rotate));
        let _ = controls.handle_event(
            &moved(PointerInput::touch(1, 300.0, 300.0)),
            &camera,
        );
        let _ = controls.update(&mut camera, None);

        let turned = theta - controls.azimuthal_angle();
        assert!((turned - TAU / 6.0).abs() < 1e-3);
        assert!((controls.polar_angle() - phi).abs() < 1e-4);
        assert!((controls.distance(&camera) - distance).abs() < 1e-3);
    }

    #[test]
    fn two_fingers_select_configured_mode() {
        let (camera, mut controls) = connected();
        let r = controls.handle_event(
            &down(PointerInput::touch(1, 100.0, 100.0)),
            &camera,
        );
        assert_eq!(r.capture, Some(PointerCapture::Capture(1)));
        assert_eq!(controls.gesture(), Some(GestureKind::Rotate));

        let r = controls.handle_event(
            &down(PointerInput::touch(2, 200.0, 100.0)),
            &camera,
        );
        assert_eq!(r.capture, None);
        assert_eq!(controls.gesture(), Some(GestureKind::DollyPan));
        assert_eq!(controls.pointer_count(), 2);

        controls.disconnect();
        controls.touches.two = TwoFingerAction::DollyRotate;
        controls.connect(Some(Viewport::sized(600.0, 600.0)));
        let _ = controls.handle_event(
            &down(PointerInput::touch(1, 100.0, 100.0)),
            &camera,
        );
        let _ = controls.handle_event(
            &down(PointerInput::touch(2, 200.0, 100.0)),
            &camera,
        );
        assert_eq!(controls.gesture(), Some(GestureKind::DollyRotate));
    }

    #[test]
    fn lifting_one_of_two_fingers_resumes_rotation() {
        let (mut camera, mut controls) = connected();
        let _ = controls.handle_event(
            &down(PointerInput::touch(1, 100.0, 100.0)),
            &camera,
        );
        let _ = controls.handle_event(
            &down(PointerInput::touch(2, 200.0, 100.0)),
            &camera,
        );
        let _ = controls.handle_event(
            &up(PointerInput::touch(1, 100.0, 100.0)),
            &camera,
        );
        assert_eq!(controls.gesture(), Some(GestureKind::Rotate));
        assert_eq!(controls.pointer_count(), 1);

        // continuing from the remaining finger does not jump
        let _ = controls.handle_event(
            &moved(PointerInput::touch(2, 200.0, 100.0)),
            &camera,
        );
        assert_eq!(controls.pending().theta, 0.0);
        let _ = controls.handle_event(
            &moved(PointerInput::touch(2, 260.0, 100.0)),
            &camera,
        );
        assert!(controls.pending().theta < 0.0);
        let _ = controls.update(&mut camera, None);
    }

    #[test]
    fn pinch_apart_dollies_in() {
        let (mut camera, mut controls) = connected();
        let before = controls.distance(&camera);
        let _ = controls.handle_event(
            &down(PointerInput::touch(1, 250.0, 300.0)),
            &camera,
        );
        let _ = controls.handle_event(
            &down(PointerInput::touch(2, 350.0, 300.0)),
            &camera,
        );
        let _ = controls.handle_event(
            &moved(PointerInput::touch(2, 450.0, 300.0)),
            &camera,
        );
        let _ = controls.update(&mut camera, None);
        assert!(controls.distance(&camera) < before);
    }

    #[test]
    fn cancel_ends_gesture_like_release() {
        let (camera, mut controls) = connected();
        let _ = controls.handle_event(
            &down(PointerInput::touch(4, 10.0, 10.0)),
            &camera,
        );
        let r = controls.handle_event(
            &InputEvent::PointerCancel(PointerInput::touch(4, 10.0, 10.0)),
            &camera,
        );
        assert_eq!(r.capture, Some(PointerCapture::Release(4)));
        assert_eq!(controls.gesture(), None);
        assert!(!controls.is_interacting());
    }

    #[test]
    fn release_while_disabled_is_still_tracked() {
        let (camera, mut controls) = connected();
        let _ = controls.handle_event(
            &down(PointerInput::touch(1, 100.0, 100.0)),
            &camera,
        );
        controls.enabled = false;
        let r = controls.handle_event(
            &up(PointerInput::touch(1, 100.0, 100.0)),
            &camera,
        );
        assert_eq!(r.capture, Some(PointerCapture::Release(1)));
        assert_eq!(controls.pointer_count(), 0);

        controls.enabled = true;
        let _ = controls.handle_event(
            &down(PointerInput::touch(2, 150.0, 100.0)),
            &camera,
        );
        assert_eq!(controls.pointer_count(), 1);
        assert_eq!(controls.gesture(), Some(GestureKind::Rotate));
    }

    #[test]
    fn modifiers_swap_rotate_and_pan() {
        let (camera, mut controls) = connected();
        let shifted = Modifiers {
            shift: true,
            ..Modifiers::default()
        };
        let _ = controls.handle_event(
            &down(
                PointerInput::mouse(MouseButton::Left, 0.0, 0.0)
                    .with_modifiers(shifted),
            ),
            &camera,
        );
        assert_eq!(controls.gesture(), Some(GestureKind::Pan));
        let _ = controls.handle_event(
            &up(PointerInput::mouse(MouseButton::Left, 0.0, 0.0)),
            &camera,
        );

        let _ = controls.handle_event(
            &down(
                PointerInput::mouse(MouseButton::Right, 0.0, 0.0)
                    .with_modifiers(shifted),
            ),
            &camera,
        );
        assert_eq!(controls.gesture(), Some(GestureKind::Rotate));
    }

    #[test]
    fn wheel_zooms_and_is_ignored_mid_gesture() {
        let (mut camera, mut controls) = connected();
        let before = controls.distance(&camera);
        let r = controls.handle_event(
            &InputEvent::Wheel(WheelInput::pixels(-100.0, 300.0, 300.0)),
            &camera,
        );
        assert!(r.consumed && r.prevent_default);
        let _ = controls.update(&mut camera, None);
        assert!((controls.distance(&camera) - before * 0.95).abs() < 1e-3);

        let _ = controls.handle_event(
            &down(PointerInput::mouse(MouseButton::Left, 0.0, 0.0)),
            &camera,
        );
        let r = controls.handle_event(
            &InputEvent::Wheel(WheelInput::pixels(-100.0, 300.0, 300.0)),
            &camera,
        );
        assert_eq!(r, EventResponse::IGNORED);
    }

    #[test]
    fn wheel_delta_modes_are_normalized() {
        let (_, mut controls) = connected();
        let line = WheelInput {
            mode: DeltaMode::Line,
            ..WheelInput::pixels(3.0, 0.0, 0.0)
        };
        assert_eq!(controls.normalize_wheel(&line), 48.0);
        let pinch = WheelInput {
            ctrl: true,
            ..WheelInput::pixels(2.0, 0.0, 0.0)
        };
        assert_eq!(controls.normalize_wheel(&pinch), 20.0);
        controls.control_active = true;
        assert_eq!(controls.normalize_wheel(&pinch), 2.0);
    }

    #[test]
    fn arrow_keys_pan_or_rotate() {
        let (camera, mut controls) = connected();
        let key = |code: &str, modifiers| InputEvent::KeyDown {
            code: code.into(),
            modifiers,
        };
        let r = controls.handle_event(
            &key("ArrowLeft", Modifiers::default()),
            &camera,
        );
        assert!(r.prevent_default);
        assert!(controls.pending_pan().length() > 0.0);

        controls.discard_pending();
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        let _ = controls.handle_event(&key("ArrowLeft", ctrl), &camera);
        assert!(controls.pending().theta < 0.0);

        controls.listen_to_key_events(false);
        let r = controls.handle_event(
            &key("ArrowUp", Modifiers::default()),
            &camera,
        );
        assert_eq!(r, EventResponse::IGNORED);
    }

    #[test]
    fn detached_or_disabled_controls_ignore_events() {
        let (camera, mut controls) = connected();
        controls.disconnect();
        controls.disconnect();
        let r = controls.handle_event(
            &down(PointerInput::touch(1, 0.0, 0.0)),
            &camera,
        );
        assert_eq!(r, EventResponse::IGNORED);

        controls.connect(None);
        assert!(!controls.is_connected());

        controls.connect(Some(Viewport::sized(10.0, 10.0)));
        controls.enabled = false;
        let r = controls.handle_event(&InputEvent::ContextMenu, &camera);
        assert_eq!(r, EventResponse::IGNORED);
        controls.enabled = true;
        let r = controls.handle_event(&InputEvent::ContextMenu, &camera);
        assert!(r.prevent_default);
    }
}
