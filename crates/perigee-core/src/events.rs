//! Events emitted by the stage for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::CollisionKind;

/// Events accumulated during a frame and drained into the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A round started.
    Started,
    /// The rocket hit something; the round is over.
    Crashed { cause: CollisionKind },
    /// The stage returned to the idle vignette.
    Reset,
}
