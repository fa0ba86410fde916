//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Marks an entity as a transient asteroid in the planet's local space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Asteroid;

// Transform (types.rs) doubles as the spatial component: its position is the
// asteroid's planet-local position, its rotation the cosmetic tumble.
