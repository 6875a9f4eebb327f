//! Focus choreography: isolating one body, flying the camera to it, and
//! restoring the overview afterwards.

mod sequencer;
mod snapshot;

pub use sequencer::{
    CameraDriver, CameraProperty, FocusEvent, FocusSequencer, FocusState,
    Stage,
};
pub use snapshot::{BodyRecord, FocusSnapshot};
