//! Converts raw key presses into engine commands.
//!
//! Camera gestures go straight to the orbit controls; the `InputProcessor`
//! only owns the key-binding map and turns bound key presses into
//! [`OrreryCommand`] values for [`Orrery::execute`](crate::Orrery::execute).

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::engine::command::OrreryCommand;
use crate::options::KeybindingOptions;

impl KeyAction {
    /// Convert to the corresponding parameterless [`OrreryCommand`].
    #[must_use]
    pub fn to_command(self) -> OrreryCommand {
        match self {
            Self::ShowAll => OrreryCommand::ShowAll,
            Self::CycleFocus => OrreryCommand::CycleFocus,
            Self::ToggleAutoRotate => OrreryCommand::ToggleAutoRotate,
            Self::ResetView => OrreryCommand::ResetView,
        }
    }
}

/// Converts bound key presses into [`OrreryCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(&event) {
///     orrery.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self { key_bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<OrreryCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Return the command bound to a key-down event, if any.
    #[must_use]
    pub fn handle_event(&self, event: &InputEvent) -> Option<OrreryCommand> {
        match event {
            InputEvent::KeyDown { code, .. } => self.handle_key_press(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;

    #[test]
    fn bound_keys_produce_commands() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.handle_key_press("Escape"),
            Some(OrreryCommand::ShowAll)
        );
        assert_eq!(
            processor.handle_event(&InputEvent::KeyDown {
                code: "Tab".into(),
                modifiers: Modifiers::default(),
            }),
            Some(OrreryCommand::CycleFocus)
        );
    }

    #[test]
    fn unbound_and_non_key_events_produce_nothing() {
        let processor = InputProcessor::new();
        assert_eq!(processor.handle_key_press("ArrowUp"), None);
        assert_eq!(processor.handle_event(&InputEvent::ContextMenu), None);
        assert_eq!(
            processor.handle_event(&InputEvent::KeyUp {
                code: "Escape".into()
            }),
            None
        );
    }
}
