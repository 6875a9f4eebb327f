use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawKeybindings")]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `CycleFocus` → `"Tab"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawKeybindings {
    bindings: HashMap<KeyAction, String>,
}

impl Default for RawKeybindings {
    fn default() -> Self {
        Self {
            bindings: KeybindingOptions::default().bindings,
        }
    }
}

impl From<RawKeybindings> for KeybindingOptions {
    fn from(raw: RawKeybindings) -> Self {
        let mut opts = Self {
            bindings: raw.bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ShowAll, "Escape".into()),
            (KeyAction::CycleFocus, "Tab".into()),
            (KeyAction::ToggleAutoRotate, "KeyR".into()),
            (KeyAction::ResetView, "KeyQ".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind `action` to `key`, replacing any previous key for that action.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_bindings_are_immediately_searchable() {
        let opts: KeybindingOptions =
            toml::from_str("[bindings]\nshow_all = \"Backspace\"\n").unwrap();
        assert_eq!(opts.lookup("Backspace"), Some(KeyAction::ShowAll));
        assert_eq!(opts.lookup("Escape"), None);
    }

    #[test]
    fn rebinding_replaces_old_key() {
        let mut opts = KeybindingOptions::default();
        opts.bind(KeyAction::CycleFocus, "KeyN");
        assert_eq!(opts.lookup("KeyN"), Some(KeyAction::CycleFocus));
        assert_eq!(opts.lookup("Tab"), None);
    }
}
