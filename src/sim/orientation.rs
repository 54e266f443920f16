//! Device orientation readings and how they map onto arena axes

use serde::{Deserialize, Serialize};

/// Latest device tilt reading, in degrees
///
/// Defaults to a level device until the first sensor event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrientationSample {
    /// Rotation around the z axis (compass heading), [0, 360)
    pub alpha: f32,
    /// Front/back tilt, [-180, 180)
    pub beta: f32,
    /// Left/right tilt, [-90, 90)
    pub gamma: f32,
}

impl OrientationSample {
    pub fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self { alpha, beta, gamma }
    }
}

/// Which tilt angles drive which arena axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TiltAxes {
    /// 1D track: only gamma contributes, along x
    Horizontal,
    /// gamma drives x, beta drives y (screen y grows downward)
    #[default]
    Planar,
    /// gamma drives x, beta drives -y
    PlanarInverted,
}

impl TiltAxes {
    /// Whether the y axis takes part in the motion at all
    pub fn is_planar(&self) -> bool {
        !matches!(self, TiltAxes::Horizontal)
    }
}
