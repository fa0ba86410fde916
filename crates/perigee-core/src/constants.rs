//! Stage constants and tuning parameters.
//!
//! Distances are in world units, angles in radians, times in milliseconds.
//! Per-frame rates assume the nominal 60 Hz frame loop.

// --- Flight ---

/// Velocity gained per frame while thrust is held.
pub const ACCEL_STEP: f64 = 0.00015;

/// Velocity lost per frame while falling (and while bleeding off to rest).
pub const DECEL_STEP: f64 = 0.0002;

/// Upward cruise velocity the rocket accelerates toward (units/frame).
pub const FLY_VELOCITY: f64 = 0.015;

/// Maximum rocket altitude; hitting it zeroes the velocity.
pub const ALTITUDE_CEILING: f64 = 2.3;

// --- Rocket pose ---

/// Resting x position of the rocket container.
pub const ROCKET_BASE_X: f64 = -0.3;

/// Rocket tilt (y rotation) in the idle vignette.
pub const ROCKET_IDLE_TILT: f64 = std::f64::consts::PI / 12.0;

/// Rocket tilt while a round is in progress.
pub const ROCKET_PLAY_TILT: f64 = 0.0;

/// Nose offset along the container's forward axis, used for collision.
pub const ROCKET_NOSE_OFFSET: f64 = 0.4;

/// Divisor mapping absolute time to the cosmetic hull spin angle.
pub const ROCKET_SPIN_DIVISOR: f64 = 2000.0;

// --- Planet ---

/// Y position of the planet container (planet center sits below the stage).
pub const PLANET_CENTER_Y: f64 = -4.5;

/// Planet yaw in the idle vignette.
pub const PLANET_IDLE_YAW: f64 = std::f64::consts::FRAC_PI_6;

/// Planet yaw while a round is in progress.
pub const PLANET_PLAY_YAW: f64 = 0.0;

/// Divisor mapping absolute time to the continuous orbit angle.
pub const ORBIT_TIME_DIVISOR: f64 = 10_000.0;

/// Collision radius of the planet surface.
pub const PLANET_COLLISION_RADIUS: f64 = 4.0;

// --- Camera ---

/// Camera rig position in the idle vignette.
pub const CAMERA_IDLE_Y: f64 = 0.0;
pub const CAMERA_IDLE_Z: f64 = 1.0;

/// Camera rig position while a round is in progress.
pub const CAMERA_PLAY_Y: f64 = 1.0;
pub const CAMERA_PLAY_Z: f64 = 3.0;

/// Duration of the idle/playing framing tweens (ms).
pub const TRANSITION_MS: f64 = 1000.0;

// --- Asteroids ---

/// Length of one spawn window (ms). At most one asteroid spawns per window.
pub const SPAWN_WINDOW_MS: f64 = 1000.0;

/// Offset into the window past which the spawn gate opens (ms).
pub const SPAWN_GATE_MS: f64 = 950.0;

/// Spawn radius is `(random + SPAWN_RADIUS_OFFSET) * SPAWN_RADIUS_SCALE`.
pub const SPAWN_RADIUS_OFFSET: f64 = 0.5;
pub const SPAWN_RADIUS_SCALE: f64 = 5.0;

/// Collision radius of an asteroid.
pub const ASTEROID_COLLISION_RADIUS: f64 = 0.2;

/// Divisor mapping absolute time to the asteroid tumble angle.
pub const ASTEROID_SPIN_DIVISOR: f64 = 10_000.0;

/// Asteroids past this world x AND below this world y have left the play
/// field and are culled.
pub const CULL_MAX_X: f64 = 0.0;
pub const CULL_MAX_Y: f64 = PLANET_CENTER_Y;
