//! Snapshot system: reads the stage and builds a complete StageSnapshot.
//!
//! This system is read-only; it never modifies the stage.

use perigee_core::components::Asteroid;
use perigee_core::enums::GamePhase;
use perigee_core::events::GameEvent;
use perigee_core::state::{AsteroidView, CameraView, PlanetView, RocketView, StageSnapshot};
use perigee_core::types::{StageTime, Transform};

use crate::stage::Stage;

/// Build a complete StageSnapshot from the current stage.
pub fn build_snapshot(
    stage: &Stage,
    time: StageTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> StageSnapshot {
    StageSnapshot {
        time,
        phase,
        camera: CameraView {
            position: stage.camera.position,
        },
        rocket: build_rocket(stage),
        planet: build_planet(stage),
        asteroids: build_asteroids(stage),
        events,
    }
}

fn build_rocket(stage: &Stage) -> RocketView {
    RocketView {
        position: stage.rocket.position(),
        tilt: stage.rocket.tilt(),
        spin: stage.rocket.spin(),
        velocity: stage.rocket.velocity(),
        flight: stage.rocket.flight(),
        exhaust: stage.rocket.exhaust(),
    }
}

fn build_planet(stage: &Stage) -> PlanetView {
    PlanetView {
        position: stage.planet.center(),
        yaw: stage.planet.yaw(),
        orbit_angle: stage.planet.orbit_angle(),
    }
}

/// Build AsteroidView list, sorted by entity id for stable output.
fn build_asteroids(stage: &Stage) -> Vec<AsteroidView> {
    let mut views: Vec<AsteroidView> = stage
        .asteroids
        .query::<(&Transform, &Asteroid)>()
        .iter()
        .map(|(entity, (transform, _asteroid))| AsteroidView {
            id: entity.to_bits().get(),
            position: transform.position,
            spin: transform.rotation.z,
        })
        .collect();

    views.sort_by_key(|view| view.id);
    views
}
