//! Game simulation for PERIGEE.
//!
//! Owns the stage (rocket, planet, camera, asteroid world), runs the
//! per-frame systems through the animation scheduler, and produces
//! `StageSnapshot`s for the renderer. Completely headless, enabling
//! deterministic testing.

pub mod engine;
pub mod planet;
pub mod rocket;
pub mod stage;
pub mod systems;

pub use engine::{GameConfig, GameEngine};
pub use perigee_core as core;
