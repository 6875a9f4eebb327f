use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// cycle_focus = "Tab"
/// show_all = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Leave focus and fly back to the overview.
    ShowAll,
    /// Focus the next visible body.
    CycleFocus,
    /// Toggle idle auto-rotation.
    ToggleAutoRotate,
    /// Restore the saved camera pose.
    ResetView,
}
