//! State shared between the frame loop thread and its host.

use std::sync::{Arc, Mutex};

use perigee_core::commands::GameCommand;
use perigee_core::state::StageSnapshot;

/// Commands sent from the host to the frame loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A game command to forward to the engine.
    Game(GameCommand),
    /// Shut down the frame loop thread gracefully.
    Shutdown,
}

/// Latest-snapshot slot, written by the frame loop after every frame and
/// polled by the host.
pub type SharedSnapshot = Arc<Mutex<Option<StageSnapshot>>>;
