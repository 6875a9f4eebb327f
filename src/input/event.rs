/// Platform-agnostic input events.
///
/// These are fed into [`OrbitControls::handle_event`] (camera gestures) and
/// the [`InputProcessor`](super::InputProcessor) (key bindings). Positions
/// are in the same client-pixel space as the connected
/// [`Viewport`](crate::camera::Viewport).
///
/// [`OrbitControls::handle_event`]: crate::camera::OrbitControls::handle_event
///
/// # Example
///
/// ```ignore
/// let response = controls.handle_event(
///     &InputEvent::PointerDown(PointerInput::touch(7, 120.0, 300.0)),
///     &camera,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A pointer (mouse button, finger, pen) went down.
    PointerDown(PointerInput),
    /// A pointer moved.
    PointerMove(PointerInput),
    /// A pointer was released.
    PointerUp(PointerInput),
    /// The platform cancelled a pointer (e.g. a touch turned into a scroll).
    PointerCancel(PointerInput),
    /// Scroll wheel or trackpad scroll.
    Wheel(WheelInput),
    /// A key was pressed.
    KeyDown {
        /// Physical key code string (`"ArrowUp"`, `"KeyQ"`, `"ControlLeft"`).
        code: String,
        /// Modifier state at the time of the press.
        modifiers: Modifiers,
    },
    /// A key was released.
    KeyUp {
        /// Physical key code string.
        code: String,
    },
    /// The platform is about to show a context menu.
    ContextMenu,
}

/// What kind of device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or trackpad cursor.
    Mouse,
    /// Finger on a touch surface.
    Touch,
    /// Stylus.
    Pen,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button, by platform index.
    Other(u16),
}

impl MouseButton {
    /// Map a DOM `button` index (0 = left, 1 = middle, 2 = right).
    #[must_use]
    pub fn from_dom_index(index: i16) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            other => Self::Other(other.unsigned_abs()),
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(n) => Self::Other(n),
        }
    }
}

/// Modifier key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Shift is held.
    pub shift: bool,
    /// Control is held.
    pub ctrl: bool,
    /// Alt / Option is held.
    pub alt: bool,
    /// Meta / Command / Windows is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether any modifier that swaps rotate and pan is held.
    #[must_use]
    pub fn swaps_gesture(&self) -> bool {
        self.shift || self.ctrl || self.meta
    }
}

/// Payload shared by all pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Platform pointer identifier, stable for the lifetime of the press.
    pub pointer_id: i32,
    /// Device kind.
    pub kind: PointerKind,
    /// Button that changed (meaningful for mouse down/up).
    pub button: MouseButton,
    /// Horizontal position in client pixels.
    pub x: f32,
    /// Vertical position in client pixels.
    pub y: f32,
    /// Modifier state.
    pub modifiers: Modifiers,
}

impl PointerInput {
    /// Pointer id the DOM assigns to the mouse.
    pub const MOUSE_ID: i32 = 1;

    /// A mouse pointer event.
    #[must_use]
    pub fn mouse(button: MouseButton, x: f32, y: f32) -> Self {
        Self {
            pointer_id: Self::MOUSE_ID,
            kind: PointerKind::Mouse,
            button,
            x,
            y,
            modifiers: Modifiers::default(),
        }
    }

    /// A touch pointer event.
    #[must_use]
    pub fn touch(pointer_id: i32, x: f32, y: f32) -> Self {
        Self {
            pointer_id,
            kind: PointerKind::Touch,
            button: MouseButton::Left,
            x,
            y,
            modifiers: Modifiers::default(),
        }
    }

    /// Same event with the given modifier state.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Position as a vector.
    #[must_use]
    pub fn position(&self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }
}

/// Unit of a wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    /// Delta is in pixels.
    #[default]
    Pixel,
    /// Delta is in lines.
    Line,
    /// Delta is in pages.
    Page,
}

/// Wheel / trackpad scroll payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// Vertical scroll amount (positive = scroll down = zoom out).
    pub delta_y: f32,
    /// Unit of `delta_y`.
    pub mode: DeltaMode,
    /// Cursor x in client pixels.
    pub x: f32,
    /// Cursor y in client pixels.
    pub y: f32,
    /// Whether the event carried the ctrl flag (trackpad pinch sets it).
    pub ctrl: bool,
}

impl WheelInput {
    /// A pixel-mode wheel event at the given cursor position.
    #[must_use]
    pub fn pixels(delta_y: f32, x: f32, y: f32) -> Self {
        Self {
            delta_y,
            mode: DeltaMode::Pixel,
            x,
            y,
            ctrl: false,
        }
    }
}

/// Pointer capture request a platform binding should honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerCapture {
    /// Start capturing this pointer on the element.
    Capture(i32),
    /// Release capture of this pointer.
    Release(i32),
}

/// What a handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The event changed controller state.
    pub consumed: bool,
    /// The platform default action (scrolling, context menu) should be
    /// suppressed.
    pub prevent_default: bool,
    /// Pointer capture change, if any.
    pub capture: Option<PointerCapture>,
}

impl EventResponse {
    /// The event was not used.
    pub const IGNORED: Self = Self {
        consumed: false,
        prevent_default: false,
        capture: None,
    };

    /// The event was used.
    pub const CONSUMED: Self = Self {
        consumed: true,
        prevent_default: false,
        capture: None,
    };

    /// Mark the platform default as suppressed.
    #[must_use]
    pub fn preventing_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }
}
