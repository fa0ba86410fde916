//! The world body: planet container pose and the continuous orbit angle.

use std::f64::consts::TAU;

use glam::DVec3;

use perigee_core::constants::*;
use perigee_core::types::Transform;

/// The planet the rocket skims.
///
/// The container carries two independent rotations: the yaw (y), tweened
/// between the idle and playing framings, and the orbit angle (z), advanced
/// continuously from absolute time in every game phase. Asteroids live in
/// this container's local space, so their world positions resolve through
/// [`world_point`](Planet::world_point).
#[derive(Debug, Clone)]
pub struct Planet {
    transform: Transform,
}

impl Default for Planet {
    fn default() -> Self {
        Self::new()
    }
}

impl Planet {
    /// A planet in the idle vignette pose.
    pub fn new() -> Self {
        let mut transform = Transform::new(DVec3::new(0.0, PLANET_CENTER_Y, 0.0));
        transform.rotation.y = PLANET_IDLE_YAW;
        Self { transform }
    }

    /// Advance the orbit angle: a direct function of absolute time, wrapped
    /// to `[0, 2π)`.
    pub fn advance_orbit(&mut self, time: f64) {
        self.transform.rotation.z = (time / ORBIT_TIME_DIVISOR).rem_euclid(TAU);
    }

    /// World position of the planet's center.
    pub fn center(&self) -> DVec3 {
        self.transform.position
    }

    /// Map a planet-local point (an asteroid position) into world space.
    pub fn world_point(&self, local: DVec3) -> DVec3 {
        self.transform.world_point(local)
    }

    pub fn orbit_angle(&self) -> f64 {
        self.transform.rotation.z
    }

    /// Container yaw (y rotation).
    pub fn yaw(&self) -> f64 {
        self.transform.rotation.y
    }

    pub fn set_yaw(&mut self, yaw: f64) {
        self.transform.rotation.y = yaw;
    }

    /// Snap back to the idle vignette yaw.
    pub fn rest(&mut self) {
        self.transform.rotation.y = PLANET_IDLE_YAW;
    }
}
