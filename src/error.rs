//! Crate-level error types.

use std::fmt;

use crate::scene::BodyHandle;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// A body handle that does not belong to the registry.
    UnknownBody(BodyHandle),
    /// A body name that no registered body carries.
    UnknownBodyName(String),
    /// Two bodies registered under the same name.
    DuplicateBodyName(String),
    /// A focus request for a body that is hidden in the overview.
    BodyHidden(String),
    /// A frame delta that is negative, NaN or infinite.
    InvalidFrameDelta(f32),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options or system description parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
    /// A browser DOM call was rejected.
    Dom(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBody(handle) => {
                write!(f, "no body registered for handle {}", handle.index())
            }
            Self::UnknownBodyName(name) => {
                write!(f, "no body named {name:?}")
            }
            Self::DuplicateBodyName(name) => {
                write!(f, "a body named {name:?} is already registered")
            }
            Self::BodyHidden(name) => {
                write!(f, "body {name:?} is hidden and cannot be focused")
            }
            Self::InvalidFrameDelta(dt) => {
                write!(f, "invalid frame delta: {dt}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
