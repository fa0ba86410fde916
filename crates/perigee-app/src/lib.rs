//! PERIGEE headless runner.
//!
//! Wires the game engine to a fixed-rate frame loop thread and a command
//! channel, the same seams a rendering shell would attach to.

pub mod runner;
pub mod state;

pub use perigee_core as core;
