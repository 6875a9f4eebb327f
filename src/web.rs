//! Browser bindings: DOM listeners feeding an [`Orrery`].
//!
//! [`DomBinding`] registers pointer, wheel, context-menu and (optionally)
//! keyboard listeners, converts each DOM event into an
//! [`InputEvent`], and applies the returned
//! [`EventResponse`](crate::input::EventResponse): `preventDefault()` and
//! pointer capture. Listeners are removed on [`DomBinding::detach`] or when
//! the binding is dropped.
//!
//! The host owns the animation loop and calls
//! `orrery.borrow_mut().frame(dt)` from `requestAnimationFrame`.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, HtmlElement, KeyboardEvent,
    PointerEvent, WheelEvent,
};

use crate::{
    camera::Viewport,
    error::OrreryError,
    input::{
        DeltaMode, InputEvent, Modifiers, MouseButton, PointerCapture,
        PointerInput, PointerKind, WheelInput,
    },
    Orrery,
};

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

fn dom_error(value: &JsValue) -> OrreryError {
    OrreryError::Dom(
        value.as_string().unwrap_or_else(|| format!("{value:?}")),
    )
}

// ── Event conversion ─────────────────────────────────────────────────────

type Convert = fn(&Event) -> Option<InputEvent>;

fn modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers {
        shift,
        ctrl,
        alt,
        meta,
    }
}

fn pointer(event: &Event) -> Option<PointerInput> {
    let event = event.dyn_ref::<PointerEvent>()?;
    let kind = match event.pointer_type().as_str() {
        "touch" => PointerKind::Touch,
        "pen" => PointerKind::Pen,
        _ => PointerKind::Mouse,
    };
    Some(PointerInput {
        pointer_id: event.pointer_id(),
        kind,
        button: MouseButton::from_dom_index(event.button()),
        x: event.client_x() as f32,
        y: event.client_y() as f32,
        modifiers: modifiers(
            event.shift_key(),
            event.ctrl_key(),
            event.alt_key(),
            event.meta_key(),
        ),
    })
}

fn pointer_down(event: &Event) -> Option<InputEvent> {
    pointer(event).map(InputEvent::PointerDown)
}

fn pointer_move(event: &Event) -> Option<InputEvent> {
    pointer(event).map(InputEvent::PointerMove)
}

fn pointer_up(event: &Event) -> Option<InputEvent> {
    pointer(event).map(InputEvent::PointerUp)
}

fn pointer_cancel(event: &Event) -> Option<InputEvent> {
    pointer(event).map(InputEvent::PointerCancel)
}

fn wheel(event: &Event) -> Option<InputEvent> {
    let event = event.dyn_ref::<WheelEvent>()?;
    let mode = match event.delta_mode() {
        WheelEvent::DOM_DELTA_LINE => DeltaMode::Line,
        WheelEvent::DOM_DELTA_PAGE => DeltaMode::Page,
        _ => DeltaMode::Pixel,
    };
    Some(InputEvent::Wheel(WheelInput {
        delta_y: event.delta_y() as f32,
        mode,
        x: event.client_x() as f32,
        y: event.client_y() as f32,
        ctrl: event.ctrl_key(),
    }))
}

fn context_menu(_event: &Event) -> Option<InputEvent> {
    Some(InputEvent::ContextMenu)
}

fn key_down(event: &Event) -> Option<InputEvent> {
    let event = event.dyn_ref::<KeyboardEvent>()?;
    Some(InputEvent::KeyDown {
        code: event.code(),
        modifiers: modifiers(
            event.shift_key(),
            event.ctrl_key(),
            event.alt_key(),
            event.meta_key(),
        ),
    })
}

fn key_up(event: &Event) -> Option<InputEvent> {
    let event = event.dyn_ref::<KeyboardEvent>()?;
    Some(InputEvent::KeyUp { code: event.code() })
}

/// Client rectangle of `element`.
#[must_use]
pub fn viewport_of(element: &HtmlElement) -> Viewport {
    let rect = element.get_bounding_client_rect();
    Viewport::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

// ── Binding ──────────────────────────────────────────────────────────────

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// DOM listeners connecting an element to a shared [`Orrery`].
pub struct DomBinding {
    orrery: Rc<RefCell<Orrery>>,
    element: HtmlElement,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for DomBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomBinding")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl DomBinding {
    /// Connect `orrery` to `element` and register the pointer, wheel and
    /// context-menu listeners. Keys need a separate
    /// [`listen_to_keys`](Self::listen_to_keys).
    ///
    /// # Errors
    ///
    /// [`OrreryError::Dom`] when the browser rejects a listener; listeners
    /// registered so far are removed again.
    pub fn attach(
        orrery: Rc<RefCell<Orrery>>,
        element: HtmlElement,
    ) -> Result<Self, OrreryError> {
        orrery
            .try_borrow_mut()
            .map_err(|e| OrreryError::Dom(e.to_string()))?
            .connect(Some(viewport_of(&element)));

        let mut binding = Self {
            orrery,
            element,
            listeners: Vec::new(),
        };
        let target: EventTarget = binding.element.clone().into();
        let handlers: [(&'static str, Convert); 6] = [
            ("pointerdown", pointer_down),
            ("pointermove", pointer_move),
            ("pointerup", pointer_up),
            ("pointercancel", pointer_cancel),
            ("wheel", wheel),
            ("contextmenu", context_menu),
        ];
        for (kind, convert) in handlers {
            if let Err(e) = binding.listen(&target, kind, convert) {
                binding.detach();
                return Err(e);
            }
        }
        log::info!("orbit controls attached to element");
        Ok(binding)
    }

    /// Also route key presses from `target` (usually the window).
    ///
    /// # Errors
    ///
    /// [`OrreryError::Dom`] when the browser rejects a listener.
    pub fn listen_to_keys(
        &mut self,
        target: &EventTarget,
    ) -> Result<(), OrreryError> {
        self.listen(target, "keydown", key_down)?;
        self.listen(target, "keyup", key_up)?;
        if let Ok(mut orrery) = self.orrery.try_borrow_mut() {
            orrery.controls_mut().listen_to_key_events(true);
        }
        Ok(())
    }

    /// Re-read the element rectangle and resize the camera to it.
    pub fn refresh_viewport(&self) {
        if let Ok(mut orrery) = self.orrery.try_borrow_mut() {
            orrery.resize(viewport_of(&self.element));
        }
    }

    /// Remove every listener and disconnect the controls. Idempotent.
    pub fn detach(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        for listener in self.listeners.drain(..) {
            if let Err(e) = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.callback.as_ref().unchecked_ref::<js_sys::Function>(),
            ) {
                log::warn!(
                    "failed to remove {} listener: {}",
                    listener.kind,
                    dom_error(&e)
                );
            }
        }
        if let Ok(mut orrery) = self.orrery.try_borrow_mut() {
            orrery.controls_mut().listen_to_key_events(false);
            orrery.disconnect();
        }
        log::info!("orbit controls detached");
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        convert: Convert,
    ) -> Result<(), OrreryError> {
        let orrery = Rc::clone(&self.orrery);
        let element = self.element.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(input) = convert(&event) {
                dispatch(&orrery, &element, &event, &input);
            }
        });

        // wheel must be non-passive for preventDefault to stop scrolling
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref::<js_sys::Function>(),
                &options,
            )
            .map_err(|e| dom_error(&e))?;

        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }
}

impl Drop for DomBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

fn dispatch(
    orrery: &Rc<RefCell<Orrery>>,
    element: &HtmlElement,
    event: &Event,
    input: &InputEvent,
) {
    let Ok(mut orrery) = orrery.try_borrow_mut() else {
        log::debug!("orrery busy, dropping {}", event.type_());
        return;
    };
    if matches!(input, InputEvent::PointerDown(_)) {
        orrery.controls_mut().set_viewport(viewport_of(element));
    }
    let response = orrery.handle_input(input);
    drop(orrery);

    if response.prevent_default {
        event.prevent_default();
    }
    let result = match response.capture {
        Some(PointerCapture::Capture(id)) => element.set_pointer_capture(id),
        Some(PointerCapture::Release(id)) => {
            element.release_pointer_capture(id)
        }
        None => Ok(()),
    };
    if let Err(e) = result {
        log::debug!("pointer capture failed: {}", dom_error(&e));
    }
}
