//! The player body: container transform, cosmetic spin, and the flight
//! state machine.

use glam::DVec3;

use perigee_core::constants::*;
use perigee_core::enums::FlightPhase;
use perigee_core::types::Transform;

/// The player-controlled rocket.
///
/// Vertical motion follows the three-state flight machine: thrust held
/// accelerates toward the cruise velocity, thrust released accelerates toward
/// the dive terminal, and at rest any residual velocity bleeds off. All
/// mutation goes through the narrow methods here; systems never reach into
/// the transform directly.
#[derive(Debug, Clone)]
pub struct Rocket {
    transform: Transform,
    /// Cosmetic hull spin angle, assigned from absolute time.
    spin: f64,
    flight: FlightPhase,
    /// Vertical velocity (units/frame).
    velocity: f64,
}

impl Default for Rocket {
    fn default() -> Self {
        Self::new()
    }
}

impl Rocket {
    /// A rocket in the resting pose of the idle vignette.
    pub fn new() -> Self {
        let mut transform = Transform::new(DVec3::new(ROCKET_BASE_X, 0.0, 0.0));
        transform.rotation.y = ROCKET_IDLE_TILT;
        Self {
            transform,
            spin: 0.0,
            flight: FlightPhase::default(),
            velocity: 0.0,
        }
    }

    /// Engage thrust: enter Ascending if not already there.
    pub fn fly_up(&mut self) {
        if self.flight != FlightPhase::Ascending {
            self.flight = FlightPhase::Ascending;
        }
    }

    /// Release thrust: enter Descending if not already there.
    pub fn fly_down(&mut self) {
        if self.flight != FlightPhase::Descending {
            self.flight = FlightPhase::Descending;
        }
    }

    /// One frame of vertical physics.
    ///
    /// Velocity steps toward the phase's target without overshoot, the
    /// position integrates the velocity every frame regardless of phase, and
    /// the altitude ceiling zeroes the velocity on contact.
    pub fn integrate(&mut self) {
        let target = self.flight.target_velocity();
        match self.flight {
            FlightPhase::Ascending => {
                if self.velocity < target {
                    self.velocity = (self.velocity + ACCEL_STEP).min(target);
                }
            }
            FlightPhase::Descending => {
                if self.velocity > target {
                    self.velocity = (self.velocity - DECEL_STEP).max(target);
                }
            }
            FlightPhase::Resting => {
                if self.velocity > 0.0 {
                    self.velocity = (self.velocity - DECEL_STEP).max(0.0);
                } else if self.velocity < 0.0 {
                    self.velocity = (self.velocity + DECEL_STEP).min(0.0);
                }
            }
        }

        self.transform.position.y += self.velocity;
        if self.transform.position.y > ALTITUDE_CEILING {
            self.transform.position.y = ALTITUDE_CEILING;
            self.velocity = 0.0;
        }
    }

    /// Advance the cosmetic hull spin: a direct function of absolute time,
    /// not an integration of deltas.
    pub fn update_spin(&mut self, time: f64) {
        self.spin = time / ROCKET_SPIN_DIVISOR;
    }

    /// World position of the nose, the collision reference point.
    pub fn nose_world(&self) -> DVec3 {
        self.transform
            .world_point(DVec3::new(ROCKET_NOSE_OFFSET, 0.0, 0.0))
    }

    /// Whether the engine glow is visible.
    pub fn exhaust(&self) -> bool {
        self.flight == FlightPhase::Ascending
    }

    // --- Accessors ---

    pub fn position(&self) -> DVec3 {
        self.transform.position
    }

    pub fn altitude(&self) -> f64 {
        self.transform.position.y
    }

    /// Set the altitude directly (used by the return-to-idle tween).
    pub fn set_altitude(&mut self, altitude: f64) {
        self.transform.position.y = altitude;
    }

    /// Container tilt (y rotation).
    pub fn tilt(&self) -> f64 {
        self.transform.rotation.y
    }

    pub fn set_tilt(&mut self, tilt: f64) {
        self.transform.rotation.y = tilt;
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn flight(&self) -> FlightPhase {
        self.flight
    }

    /// Force a velocity (for tests exercising the decay branches).
    #[cfg(test)]
    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    /// Snap back to the resting pose: base position, idle tilt, no motion.
    pub fn rest(&mut self) {
        self.transform.position = DVec3::new(ROCKET_BASE_X, 0.0, 0.0);
        self.transform.rotation.y = ROCKET_IDLE_TILT;
        self.velocity = 0.0;
        self.flight = FlightPhase::Resting;
    }
}
