//! Asteroid spawn, cull, and tumble systems.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use perigee_core::components::Asteroid;
use perigee_core::constants::*;
use perigee_core::types::Transform;

use crate::planet::Planet;

/// The gated spawn/cull pass.
///
/// The gate is keyed to absolute time: it is open while
/// `time mod SPAWN_WINDOW_MS > SPAWN_GATE_MS`. At most one asteroid spawns
/// per window (the window latch); a frame delta that skips the whole gate
/// spawns nothing. Culling runs on every gated frame, spawn spent or not.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    planet: &Planet,
    rocket_z: f64,
    last_spawn_window: &mut Option<u64>,
    despawn_buffer: &mut Vec<Entity>,
    time: f64,
) {
    if time.rem_euclid(SPAWN_WINDOW_MS) > SPAWN_GATE_MS {
        let window = (time / SPAWN_WINDOW_MS) as u64;
        if *last_spawn_window != Some(window) {
            *last_spawn_window = Some(window);
            spawn_asteroid(world, rng, planet.orbit_angle(), rocket_z);
        }
        cull(world, planet, despawn_buffer);
    }
}

/// Spawn one asteroid on the orbit ring, in the planet's local space.
///
/// The radius is `(random + 0.5) * 5` with `random ∈ [0, 1)`; the position
/// sits at the current orbit angle so the planet's spin carries it across
/// the play field.
pub fn spawn_asteroid(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    orbit_angle: f64,
    rocket_z: f64,
) -> Entity {
    let radius = (rng.gen::<f64>() + SPAWN_RADIUS_OFFSET) * SPAWN_RADIUS_SCALE;
    let local = DVec3::new(
        radius * orbit_angle.cos(),
        -radius * orbit_angle.sin(),
        rocket_z,
    );
    world.spawn((Asteroid, Transform::new(local)))
}

/// Remove every asteroid whose world position has left the play field
/// (past the planet on the left and below its center).
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn cull(world: &mut World, planet: &Planet, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (transform, _asteroid)) in world.query_mut::<(&Transform, &Asteroid)>() {
        let world_pos = planet.world_point(transform.position);
        if world_pos.x < CULL_MAX_X && world_pos.y < CULL_MAX_Y {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Cosmetic tumble: each asteroid's z and y rotation track
/// `(time / divisor) * local_x`, a direct function of absolute time.
pub fn spin(world: &mut World, time: f64) {
    for (_entity, (transform, _asteroid)) in world.query_mut::<(&mut Transform, &Asteroid)>() {
        let angle = (time / ASTEROID_SPIN_DIVISOR) * transform.position.x;
        transform.rotation.z = angle;
        transform.rotation.y = angle;
    }
}
