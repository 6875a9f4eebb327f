//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a UI
//! button or a programmatic call, is an [`OrreryCommand`]. Consumers
//! construct commands and pass them to
//! [`Orrery::execute`](super::Orrery::execute).

use crate::scene::BodyHandle;

/// A discrete operation the engine can perform.
///
/// The engine never cares *how* a command was triggered:
///
/// ```ignore
/// orrery.execute(OrreryCommand::FocusNamed { name: "Mars".into() })?;
/// orrery.execute(OrreryCommand::ShowAll)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrreryCommand {
    // ── Focus ───────────────────────────────────────────────────────
    /// Isolate a body and fly to it.
    Focus {
        /// Body to focus.
        body: BodyHandle,
    },

    /// Isolate a body by name and fly to it.
    FocusNamed {
        /// Registered body name.
        name: String,
    },

    /// Return to the overview with every body restored.
    ShowAll,

    /// Cycle focus: Overview → Body₁ → … → BodyN → Overview.
    CycleFocus,

    // ── Camera ──────────────────────────────────────────────────────
    /// Toggle idle auto-rotation.
    ToggleAutoRotate,

    /// Snap the camera back to the saved orbit pose.
    ResetView,
}
