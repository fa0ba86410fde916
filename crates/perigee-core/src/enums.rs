//! Enumeration types used throughout the stage.

use serde::{Deserialize, Serialize};

use crate::constants::FLY_VELOCITY;

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Attract mode: rocket resting, planet turning, no asteroids.
    #[default]
    Idle,
    /// Round in progress: player steers the rocket, asteroids spawn.
    Playing,
    /// Round over after a collision, awaiting reset.
    GameOver,
}

/// Vertical flight phase of the rocket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// No thrust input; velocity bleeds off toward zero.
    #[default]
    Resting,
    /// Thrust held; accelerating toward the upward cruise velocity.
    Ascending,
    /// Thrust released mid-flight; accelerating toward the dive velocity.
    Descending,
}

/// What the rocket hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Planet,
    Asteroid,
}

impl FlightPhase {
    /// Velocity this phase accelerates toward (world units per frame).
    pub fn target_velocity(&self) -> f64 {
        match self {
            FlightPhase::Resting => 0.0,
            FlightPhase::Ascending => FLY_VELOCITY,
            FlightPhase::Descending => -2.0 * FLY_VELOCITY,
        }
    }
}
