//! Player commands sent from the embedding UI to the stage.
//!
//! Commands are queued and drained at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameCommand {
    /// Leave the idle vignette and start a round.
    StartGame,
    /// Thrust engaged (pointer/key down).
    ThrustPressed,
    /// Thrust released (pointer/key up).
    ThrustReleased,
    /// Re-arm after game over, returning to the idle vignette.
    Reset,
}
