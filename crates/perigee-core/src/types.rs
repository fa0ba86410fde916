//! Fundamental geometric and timing types.

use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Position plus orientation of a stage object.
///
/// Rotation is stored as intrinsic XYZ Euler angles in radians, applied
/// x then y then z, matching the convention of the rendering layer this
/// state is mirrored into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    /// Euler angles (radians): x = pitch, y = yaw, z = roll.
    pub rotation: DVec3,
}

/// Frame time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTime {
    /// Frame counter (increments by 1 each frame).
    pub frame: u64,
    /// Timestamp of the most recent frame in milliseconds.
    pub time_ms: f64,
}

impl Transform {
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            rotation: DVec3::ZERO,
        }
    }

    /// Orientation as a quaternion (intrinsic XYZ order).
    pub fn orientation(&self) -> DQuat {
        DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Rotate a direction vector by this transform's orientation.
    pub fn rotate(&self, v: DVec3) -> DVec3 {
        self.orientation() * v
    }

    /// Map a point from this transform's local space into world space.
    pub fn world_point(&self, local: DVec3) -> DVec3 {
        self.position + self.rotate(local)
    }
}

impl StageTime {
    /// Record the timestamp of a completed frame.
    pub fn record(&mut self, time_ms: f64) {
        self.frame += 1;
        self.time_ms = time_ms;
    }
}
