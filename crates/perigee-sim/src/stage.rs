//! The stage: everything the per-frame callbacks mutate.

use glam::DVec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use perigee_anim::TweenEngine;
use perigee_core::constants::{CAMERA_IDLE_Y, CAMERA_IDLE_Z};
use perigee_core::enums::CollisionKind;
use perigee_core::events::GameEvent;

use crate::planet::Planet;
use crate::rocket::Rocket;

/// Camera rig pose, tweened between the idle and playing framings.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: DVec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, CAMERA_IDLE_Y, CAMERA_IDLE_Z),
        }
    }
}

/// Mutable stage state, handed to scheduler callbacks as their context.
pub struct Stage {
    pub camera: CameraRig,
    pub rocket: Rocket,
    pub planet: Planet,
    /// Transient asteroids, positioned in the planet's local space.
    pub asteroids: World,
    pub rng: ChaCha8Rng,
    /// Events raised this frame, drained into the snapshot.
    pub events: Vec<GameEvent>,
    /// Collision detected mid-tick; the engine applies the phase transition
    /// at the tick boundary.
    pub pending_crash: Option<CollisionKind>,
    /// Spawn window that already produced its asteroid.
    pub last_spawn_window: Option<u64>,
    /// Reusable buffer for the cull pass.
    pub despawn_buffer: Vec<Entity>,
}

impl Stage {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            camera: CameraRig::default(),
            rocket: Rocket::new(),
            planet: Planet::new(),
            asteroids: World::new(),
            rng,
            events: Vec::new(),
            pending_crash: None,
            last_spawn_window: None,
            despawn_buffer: Vec::new(),
        }
    }
}

/// Scheduler context. The tween set sits beside the stage (not inside it)
/// so the tween-advance callback can split-borrow the two.
pub struct GameWorld {
    pub tweens: TweenEngine<Stage>,
    pub stage: Stage,
}
