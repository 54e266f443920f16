//! The arena: tilt force, integration and wall containment per frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{BoundaryShape, Contacts, WallResponse, resolve_circle, resolve_rect};
use super::orientation::{OrientationSample, TiltAxes};
use super::point::PointState;
use super::policy::IntegrationPolicy;
use crate::consts::*;
use crate::error::SimError;
use crate::tilt_force;

/// Keyboard nudge directions (screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Left,
    Right,
    Up,
    Down,
}

impl Nudge {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Nudge::Left),
            "ArrowRight" => Some(Nudge::Right),
            "ArrowUp" => Some(Nudge::Up),
            "ArrowDown" => Some(Nudge::Down),
            _ => None,
        }
    }

    fn is_vertical(&self) -> bool {
        matches!(self, Nudge::Up | Nudge::Down)
    }

    fn unit(&self) -> Vec2 {
        match self {
            Nudge::Left => Vec2::NEG_X,
            Nudge::Right => Vec2::X,
            Nudge::Up => Vec2::NEG_Y,
            Nudge::Down => Vec2::Y,
        }
    }
}

/// Everything needed to build an [`Arena`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub point_radius: f32,
    /// Extra inset on every side, added to the point radius
    pub wall_width: f32,
    pub boundary: BoundaryShape,
    pub damping_factor: f32,
    pub gravity: f32,
    pub mass: f32,
    pub policy: IntegrationPolicy,
    pub tilt_axes: TiltAxes,
    pub coupled_wall_friction: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            point_radius: POINT_RADIUS,
            wall_width: 0.0,
            boundary: BoundaryShape::Rect,
            damping_factor: DAMPING_FACTOR,
            gravity: GRAVITY,
            mass: 1.0,
            policy: IntegrationPolicy::default(),
            tilt_axes: TiltAxes::Planar,
            coupled_wall_friction: false,
        }
    }
}

impl ArenaConfig {
    #[inline]
    pub fn margin(&self) -> f32 {
        self.point_radius + self.wall_width
    }
}

/// A point mass rolling inside a bounded, tiltable arena
#[derive(Debug, Clone)]
pub struct Arena {
    point: PointState,
    orientation: OrientationSample,
    extent: Vec2,
    margin: f32,
    point_radius: f32,
    boundary: BoundaryShape,
    response: WallResponse,
    gravity: f32,
    tilt_axes: TiltAxes,
}

impl Arena {
    /// Build an arena with the point at rest in the centre
    pub fn new(config: ArenaConfig) -> Result<Self, SimError> {
        if !(config.damping_factor > 0.0 && config.damping_factor <= 1.0) {
            return Err(SimError::DampingOutOfRange(config.damping_factor));
        }

        let margin = config.margin();
        let extent = Vec2::new(config.width, config.height);
        check_fits(extent, margin, config.boundary)?;

        let point = PointState::new(extent / 2.0, config.mass, config.policy)?;

        log::info!(
            "Arena {}x{} margin={} boundary={:?} policy={:?}",
            config.width,
            config.height,
            margin,
            config.boundary,
            config.policy
        );

        Ok(Self {
            point,
            orientation: OrientationSample::default(),
            extent,
            margin,
            point_radius: config.point_radius,
            boundary: config.boundary,
            response: WallResponse {
                damping: config.damping_factor,
                coupled_friction: config.coupled_wall_friction,
            },
            gravity: config.gravity,
            tilt_axes: config.tilt_axes,
        })
    }

    pub fn point(&self) -> &PointState {
        &self.point
    }

    pub fn point_mut(&mut self) -> &mut PointState {
        &mut self.point
    }

    pub fn orientation(&self) -> OrientationSample {
        self.orientation
    }

    /// Replace the orientation reading (last write wins)
    pub fn set_orientation(&mut self, sample: OrientationSample) {
        self.orientation = sample;
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn center(&self) -> Vec2 {
        self.extent / 2.0
    }

    pub fn damping_factor(&self) -> f32 {
        self.response.damping
    }

    /// Tilt force the next `update` will apply
    pub fn force(&self) -> Vec2 {
        tilt_force(self.orientation, self.point.mass(), self.gravity, self.tilt_axes)
    }

    /// Advance one frame and push the point back inside the walls
    ///
    /// A huge `dt` can tunnel through a wall (see the collision module); the
    /// point still ends up contained.
    pub fn update(&mut self, dt: f32) -> Contacts {
        let force = self.force();
        self.point.integrate(force, dt);

        let contacts = self.contain();
        if contacts.any() {
            log::trace!(
                "wall contact {:?} at {:?}, v={:?}",
                contacts,
                self.point.position,
                self.point.velocity
            );
        }
        contacts
    }

    fn contain(&mut self) -> Contacts {
        let center = self.center();
        match self.boundary {
            BoundaryShape::Rect => {
                resolve_rect(&mut self.point, self.extent, self.margin, self.response)
            }
            BoundaryShape::Circle { radius } => {
                resolve_circle(&mut self.point, center, radius - self.margin, self.response)
            }
        }
    }

    /// Adopt new arena extents and re-centre the point
    ///
    /// Velocity and acceleration are kept. Extents that cannot hold the point
    /// are rejected and the previous bounds stay in force.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), SimError> {
        let extent = Vec2::new(width, height);
        check_fits(extent, self.margin, self.boundary)?;

        self.extent = extent;
        self.point.set_position(self.center());
        log::debug!("Arena resized to {}x{}", width, height);
        Ok(())
    }

    /// Hop the point by one diameter if it lands inside the walls
    ///
    /// Returns whether the point moved. On a 1D track only left/right apply.
    pub fn nudge(&mut self, direction: Nudge) -> bool {
        if direction.is_vertical() && !self.tilt_axes.is_planar() {
            return false;
        }
        let target = self.point.position + direction.unit() * (2.0 * self.point_radius);
        if !self.allows(target) {
            return false;
        }
        self.point.set_position(target);
        true
    }

    /// Whether `p` satisfies the containment invariant
    pub fn allows(&self, p: Vec2) -> bool {
        match self.boundary {
            BoundaryShape::Rect => self.allows_rect(p),
            BoundaryShape::Circle { radius } => p.distance(self.center()) <= radius - self.margin,
        }
    }

    /// Whether `p` lies within `[margin, extent - margin]` on both axes
    pub fn allows_rect(&self, p: Vec2) -> bool {
        let min = Vec2::splat(self.margin);
        let max = self.extent - min;
        p.cmpge(min).all() && p.cmple(max).all()
    }
}

fn check_fits(extent: Vec2, margin: f32, boundary: BoundaryShape) -> Result<(), SimError> {
    let too_small = SimError::ArenaTooSmall {
        width: extent.x,
        height: extent.y,
        margin,
    };
    if !(extent.x >= 2.0 * margin && extent.y >= 2.0 * margin) {
        return Err(too_small);
    }
    // The disc must lie within the rectangle so the rect invariant still holds
    if let BoundaryShape::Circle { radius } = boundary {
        if !(radius >= margin && radius <= extent.min_element() / 2.0) {
            return Err(too_small);
        }
    }
    Ok(())
}
