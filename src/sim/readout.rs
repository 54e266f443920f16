//! Rounded snapshot for the debug overlay

use serde::{Deserialize, Serialize};

use super::arena::Arena;

/// Values shown by the overlay, rounded the way they are displayed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub ax: f32,
    pub ay: f32,
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

/// Round to two decimal places
#[inline]
fn hundredths(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

impl From<&Arena> for Readout {
    fn from(arena: &Arena) -> Self {
        let point = arena.point();
        let orientation = arena.orientation();
        Self {
            x: point.position.x.round(),
            y: point.position.y.round(),
            vx: hundredths(point.velocity.x),
            vy: hundredths(point.velocity.y),
            ax: hundredths(point.acceleration.x),
            ay: hundredths(point.acceleration.y),
            alpha: orientation.alpha.round(),
            beta: orientation.beta.round(),
            gamma: orientation.gamma.round(),
        }
    }
}
