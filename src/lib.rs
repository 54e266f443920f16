//! Tilt Toybox - a point mass rolling around a tilted arena
//!
//! Core modules:
//! - `sim`: Integrator, arena collisions, orientation, debug readout
//! - `platform`: Frame clock, input queue, frame driver, browser binding
//! - `settings`: Persisted configuration and variant presets
//! - `error`: Construction/config errors

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::{Settings, Variant};

use glam::Vec2;

use sim::{OrientationSample, TiltAxes};

/// Simulation constants
pub mod consts {
    /// Standard gravity (m/s²)
    pub const GRAVITY: f32 = 9.81;
    /// Fraction of speed kept after a wall bounce
    pub const DAMPING_FACTOR: f32 = 0.5;
    /// Drawn radius of the point (pixels)
    pub const POINT_RADIUS: f32 = 10.0;

    /// Handheld toy: light mass, force scaled up to compensate for 1 px = 1 m
    pub const HANDHELD_MASS: f32 = 0.01;
    pub const HANDHELD_FORCE_SCALE: f32 = 120.0;
    pub const HANDHELD_WALL_WIDTH: f32 = 10.0;

    /// Quadratic drag used by the planar and linear toys
    pub const DRAG_COEFFICIENT: f32 = 0.1;

    /// Default arena extents before the first resize
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
}

/// Gravity projection factor for a tilt angle in degrees
#[inline]
pub fn tilt_component(degrees: f32) -> f32 {
    degrees.to_radians().sin()
}

/// Force exerted on a mass by gravity on a device tilted by `sample`
///
/// gamma (left/right tilt) drives x, beta (front/back tilt) drives y.
#[inline]
pub fn tilt_force(sample: OrientationSample, mass: f32, gravity: f32, axes: TiltAxes) -> Vec2 {
    let weight = mass * gravity;
    let x = weight * tilt_component(sample.gamma);
    let y = match axes {
        TiltAxes::Horizontal => 0.0,
        TiltAxes::Planar => weight * tilt_component(sample.beta),
        TiltAxes::PlanarInverted => -weight * tilt_component(sample.beta),
    };
    Vec2::new(x, y)
}
