//! Integration policy: one kernel, configured per toy variant
//!
//! The toys disagree on scaling constants, drag and whether velocity carries
//! over between frames. Instead of forking the integrator, each difference
//! is a field here, chosen once at construction.

use serde::{Deserialize, Serialize};

/// Time-stepping scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scheme {
    /// Position from old acceleration, velocity from averaged acceleration
    #[default]
    VelocityVerlet,
    /// Velocity first, then position from the new velocity
    SemiImplicitEuler,
}

/// How the new velocity is formed from the acceleration increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VelocityUpdate {
    /// `v' = v + Δv`
    #[default]
    Accumulate,
    /// `v' = Δv`, discarding the previous velocity every frame.
    ///
    /// Suspect: this looks like a latent defect in the toys that used it
    /// rather than intended damping. Kept so those toys can be reproduced.
    Reset,
}

/// Sign handling of the quadratic drag term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragLaw {
    /// `sign(v)·½·c·v²`, always opposing motion
    #[default]
    Opposing,
    /// `½·c·v²` regardless of direction
    Unsigned,
}

/// Integration parameters selected at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationPolicy {
    pub scheme: Scheme,
    /// Quadratic drag coefficient (0 disables drag)
    pub drag_coefficient: f32,
    pub drag_law: DragLaw,
    /// Multiplier applied to `F / m` (pixel-to-metre compensation)
    pub force_scale: f32,
    pub velocity_update: VelocityUpdate,
}

impl Default for IntegrationPolicy {
    fn default() -> Self {
        Self {
            scheme: Scheme::VelocityVerlet,
            drag_coefficient: 0.0,
            drag_law: DragLaw::Opposing,
            force_scale: 1.0,
            velocity_update: VelocityUpdate::Accumulate,
        }
    }
}

impl IntegrationPolicy {
    /// Drag-free Verlet with a force scale
    pub fn scaled(force_scale: f32) -> Self {
        Self {
            force_scale,
            ..Self::default()
        }
    }

    /// Verlet with quadratic drag
    pub fn with_drag(drag_coefficient: f32, drag_law: DragLaw) -> Self {
        Self {
            drag_coefficient,
            drag_law,
            ..Self::default()
        }
    }

    pub fn velocity_update(mut self, mode: VelocityUpdate) -> Self {
        self.velocity_update = mode;
        self
    }

    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    #[inline]
    pub fn has_drag(&self) -> bool {
        self.drag_coefficient > 0.0
    }

    /// Drag force for one velocity component
    #[inline]
    pub fn drag_force(&self, v: f32) -> f32 {
        let magnitude = 0.5 * self.drag_coefficient * v * v;
        match self.drag_law {
            DragLaw::Opposing => magnitude.copysign(v),
            DragLaw::Unsigned => magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain_verlet() {
        let policy = IntegrationPolicy::default();
        assert_eq!(policy.scheme, Scheme::VelocityVerlet);
        assert_eq!(policy.velocity_update, VelocityUpdate::Accumulate);
        assert!(!policy.has_drag());
        assert_eq!(policy.force_scale, 1.0);
    }

    #[test]
    fn test_drag_force_sign() {
        let opposing = IntegrationPolicy::with_drag(0.1, DragLaw::Opposing);
        assert!((opposing.drag_force(10.0) - 5.0).abs() < 1e-6);
        assert!((opposing.drag_force(-10.0) + 5.0).abs() < 1e-6);

        let unsigned = IntegrationPolicy::with_drag(0.1, DragLaw::Unsigned);
        assert!((unsigned.drag_force(-10.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_builders() {
        let policy = IntegrationPolicy::scaled(120.0)
            .velocity_update(VelocityUpdate::Reset)
            .scheme(Scheme::SemiImplicitEuler);
        assert_eq!(policy.force_scale, 120.0);
        assert_eq!(policy.velocity_update, VelocityUpdate::Reset);
        assert_eq!(policy.scheme, Scheme::SemiImplicitEuler);
    }
}
