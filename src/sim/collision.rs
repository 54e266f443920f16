//! Boundary collision detection and response
//!
//! Resolution is a post-hoc clamp: the point is integrated first, then pulled
//! back inside and its velocity reflected. Nothing is swept, so a large
//! enough `dt` can carry the point straight through a wall within one step.
//! The clamp still guarantees containment afterwards, but the bounce happens
//! at the wrong wall or the wrong time. Frame drivers should keep `dt` sane.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::point::PointState;

/// Shape of the allowed play area
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum BoundaryShape {
    /// Axis-aligned rectangle spanning the whole arena
    #[default]
    Rect,
    /// Disc of the given radius centred in the arena
    Circle { radius: f32 },
}

/// How the walls treat an impact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallResponse {
    /// Fraction of the normal speed kept, in (0, 1]
    pub damping: f32,
    /// Also scale the tangential component by `damping` (wall friction)
    pub coupled_friction: bool,
}

/// Walls touched during one resolution pass
///
/// Uses screen coordinates: `top` is the y = 0 side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
    /// Circular rim (only for `BoundaryShape::Circle`)
    pub rim: bool,
}

impl Contacts {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom || self.rim
    }
}

/// Keep the point inside `[margin, extent - margin]` on both axes
pub fn resolve_rect(
    point: &mut PointState,
    extent: Vec2,
    margin: f32,
    response: WallResponse,
) -> Contacts {
    let mut contacts = Contacts::default();
    let Vec2 { mut x, mut y } = point.position;
    let min = Vec2::splat(margin);
    let max = extent - min;

    if x < min.x {
        x = min.x;
        hit_vertical_wall(point, response);
        contacts.left = true;
    }
    if x > max.x {
        x = max.x;
        hit_vertical_wall(point, response);
        contacts.right = true;
    }
    if y < min.y {
        y = min.y;
        hit_horizontal_wall(point, response);
        contacts.top = true;
    }
    if y > max.y {
        y = max.y;
        hit_horizontal_wall(point, response);
        contacts.bottom = true;
    }

    point.set_position(Vec2::new(x, y));
    contacts
}

#[inline]
fn hit_vertical_wall(point: &mut PointState, response: WallResponse) {
    point.velocity.x *= -response.damping;
    if response.coupled_friction {
        point.velocity.y *= response.damping;
    }
}

#[inline]
fn hit_horizontal_wall(point: &mut PointState, response: WallResponse) {
    point.velocity.y *= -response.damping;
    if response.coupled_friction {
        point.velocity.x *= response.damping;
    }
}

/// Keep the point within `limit` of `center`
pub fn resolve_circle(
    point: &mut PointState,
    center: Vec2,
    limit: f32,
    response: WallResponse,
) -> Contacts {
    let offset = point.position - center;
    let distance = offset.length();
    if distance <= limit {
        return Contacts::default();
    }

    // Outward normal; distance > limit >= 0 so this is never zero-length
    let normal = offset / distance;
    point.set_position(center + normal * limit);
    point.velocity = damped_reflection(point.velocity, normal, response);

    Contacts {
        rim: true,
        ..Contacts::default()
    }
}

/// Reverse and damp the normal component of `velocity`
///
/// v' = -d·(v·n)n + t·v_t, where t = d with coupled friction, else 1.
#[inline]
pub fn damped_reflection(velocity: Vec2, normal: Vec2, response: WallResponse) -> Vec2 {
    let normal_speed = velocity.dot(normal);
    let tangential = velocity - normal_speed * normal;
    let tangential = if response.coupled_friction {
        tangential * response.damping
    } else {
        tangential
    };
    tangential - response.damping * normal_speed * normal
}
