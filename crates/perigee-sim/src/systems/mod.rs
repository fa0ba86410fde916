//! Systems that operate on the stage each frame.
//!
//! Systems are free functions over the entities' narrow mutation surfaces.
//! They do not own state; it all lives in the stage.

pub mod asteroids;
pub mod collision;
pub mod snapshot;
