//! Collision detection between the rocket nose and the world.

use hecs::World;

use perigee_core::components::Asteroid;
use perigee_core::constants::{ASTEROID_COLLISION_RADIUS, PLANET_COLLISION_RADIUS};
use perigee_core::enums::CollisionKind;
use perigee_core::types::Transform;

use crate::planet::Planet;
use crate::rocket::Rocket;

/// Check the rocket's nose against the planet surface and every live
/// asteroid. The planet is checked first. Returns the first hit, if any.
pub fn check(world: &World, planet: &Planet, rocket: &Rocket) -> Option<CollisionKind> {
    let nose = rocket.nose_world();

    if nose.distance(planet.center()) < PLANET_COLLISION_RADIUS {
        return Some(CollisionKind::Planet);
    }

    for (_entity, (transform, _asteroid)) in world.query::<(&Transform, &Asteroid)>().iter() {
        let world_pos = planet.world_point(transform.position);
        if nose.distance(world_pos) < ASTEROID_COLLISION_RADIUS {
            return Some(CollisionKind::Asteroid);
        }
    }

    None
}
