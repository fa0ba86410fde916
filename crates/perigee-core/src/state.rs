//! Stage snapshot: the complete visible state handed to the renderer each frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{FlightPhase, GamePhase};
use crate::events::GameEvent;
use crate::types::StageTime;

/// Complete stage state returned from each frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub time: StageTime,
    pub phase: GamePhase,
    pub camera: CameraView,
    pub rocket: RocketView,
    pub planet: PlanetView,
    pub asteroids: Vec<AsteroidView>,
    /// Events raised this frame, drained on snapshot build.
    pub events: Vec<GameEvent>,
}

/// Camera rig pose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub position: DVec3,
}

/// The player body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RocketView {
    pub position: DVec3,
    /// Container tilt (y rotation, radians).
    pub tilt: f64,
    /// Cosmetic hull spin angle (radians), applied to the model's x rotation.
    pub spin: f64,
    /// Vertical velocity (units/frame).
    pub velocity: f64,
    pub flight: FlightPhase,
    /// Whether the engine glow is visible (thrust held).
    pub exhaust: bool,
}

/// The world body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetView {
    pub position: DVec3,
    /// Container yaw (y rotation, radians).
    pub yaw: f64,
    /// Continuous orbit angle (z rotation, radians).
    pub orbit_angle: f64,
}

/// A transient obstacle, positioned in the planet's local space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    /// Stable entity id, usable as a renderer node key.
    pub id: u64,
    /// Planet-local position.
    pub position: DVec3,
    /// Cosmetic tumble angle (radians), applied to z and y rotation.
    pub spin: f64,
}
