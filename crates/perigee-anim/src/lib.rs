//! Frame animation layer for PERIGEE.
//!
//! Implements the per-frame callback scheduler and the keyframe ("tween")
//! interpolation engine. Both are generic over the context type their
//! callbacks mutate; no game dependency, no global state.

pub mod scheduler;
pub mod tween;

pub use scheduler::{CallbackId, Frame, Scheduler};
pub use tween::{Tween, TweenEngine, TweenId, TweenStep};

#[cfg(test)]
mod tests;
