//! Kinematic state of the simulated mass and its integrator

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::policy::{IntegrationPolicy, Scheme, VelocityUpdate};
use crate::error::SimError;

/// Position, velocity and acceleration of a single point mass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Fixed at construction, always > 0
    mass: f32,
    policy: IntegrationPolicy,
}

impl PointState {
    /// Create a point at rest
    pub fn new(position: Vec2, mass: f32, policy: IntegrationPolicy) -> Result<Self, SimError> {
        if !(mass > 0.0) {
            return Err(SimError::NonPositiveMass(mass));
        }
        if policy.drag_coefficient < 0.0 {
            return Err(SimError::NegativeDrag(policy.drag_coefficient));
        }
        if policy.velocity_update == VelocityUpdate::Reset {
            log::warn!("velocity reset mode discards velocity history every frame");
        }

        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            mass,
            policy,
        })
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Move the point without touching velocity or acceleration
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Advance the state by `dt` seconds under force `force`
    ///
    /// A non-positive `dt` leaves the state unchanged.
    pub fn integrate(&mut self, force: Vec2, dt: f32) {
        if !(dt > 0.0) {
            return;
        }

        let acceleration = self.acceleration_under(force);

        let (position, velocity) = match self.policy.scheme {
            Scheme::VelocityVerlet => {
                let position =
                    self.position + self.velocity * dt + 0.5 * self.acceleration * dt * dt;
                let delta_v = (self.acceleration + acceleration) * (0.5 * dt);
                (position, self.carry_velocity(delta_v))
            }
            Scheme::SemiImplicitEuler => {
                let velocity = self.carry_velocity(acceleration * dt);
                (self.position + velocity * dt, velocity)
            }
        };

        self.position = position;
        self.velocity = velocity;
        self.acceleration = acceleration;
    }

    /// Acceleration from the applied force minus drag at the current velocity
    fn acceleration_under(&self, force: Vec2) -> Vec2 {
        let applied = self.policy.force_scale * force / self.mass;
        if !self.policy.has_drag() {
            return applied;
        }
        let drag = Vec2::new(
            self.policy.drag_force(self.velocity.x),
            self.policy.drag_force(self.velocity.y),
        );
        applied - drag / self.mass
    }

    #[inline]
    fn carry_velocity(&self, delta_v: Vec2) -> Vec2 {
        match self.policy.velocity_update {
            VelocityUpdate::Accumulate => self.velocity + delta_v,
            VelocityUpdate::Reset => delta_v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::policy::DragLaw;
    use proptest::prelude::*;

    fn point_at(position: Vec2, policy: IntegrationPolicy) -> PointState {
        PointState::new(position, 1.0, policy).unwrap()
    }

    #[test]
    fn test_rejects_bad_mass() {
        let policy = IntegrationPolicy::default();
        assert!(matches!(
            PointState::new(Vec2::ZERO, 0.0, policy),
            Err(SimError::NonPositiveMass(_))
        ));
        assert!(PointState::new(Vec2::ZERO, -1.0, policy).is_err());
        assert!(PointState::new(Vec2::ZERO, f32::NAN, policy).is_err());
    }

    #[test]
    fn test_rejects_negative_drag() {
        let policy = IntegrationPolicy::with_drag(-0.1, DragLaw::Opposing);
        assert!(matches!(
            PointState::new(Vec2::ZERO, 1.0, policy),
            Err(SimError::NegativeDrag(_))
        ));
    }

    #[test]
    fn test_non_positive_dt_is_noop() {
        let mut point = point_at(Vec2::new(5.0, 5.0), IntegrationPolicy::default());
        point.velocity = Vec2::new(3.0, -2.0);
        let before = point.clone();

        point.integrate(Vec2::new(100.0, 100.0), 0.0);
        assert_eq!(point, before);
        point.integrate(Vec2::new(100.0, 100.0), -0.5);
        assert_eq!(point, before);
    }

    #[test]
    fn test_verlet_constant_force() {
        let mut point = point_at(Vec2::ZERO, IntegrationPolicy::default());
        let force = Vec2::new(1.0, 0.0);

        // First step starts from zero acceleration
        point.integrate(force, 1.0);
        assert_eq!(point.position, Vec2::ZERO);
        assert_eq!(point.acceleration, Vec2::new(1.0, 0.0));
        assert_eq!(point.velocity, Vec2::new(0.5, 0.0));

        point.integrate(force, 1.0);
        assert_eq!(point.position, Vec2::new(1.0, 0.0));
        assert_eq!(point.velocity, Vec2::new(1.5, 0.0));
    }

    #[test]
    fn test_force_scale() {
        let mut point =
            PointState::new(Vec2::ZERO, 0.01, IntegrationPolicy::scaled(120.0)).unwrap();
        point.integrate(Vec2::new(0.01, 0.0), 0.1);
        assert!((point.acceleration.x - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_reset_discards_velocity() {
        let policy = IntegrationPolicy::default().velocity_update(VelocityUpdate::Reset);
        let mut point = point_at(Vec2::ZERO, policy);
        point.velocity = Vec2::new(10.0, -4.0);

        point.integrate(Vec2::ZERO, 0.1);
        // Position still uses the old velocity, but the velocity is gone
        assert!((point.position.x - 1.0).abs() < 1e-6);
        assert_eq!(point.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_semi_implicit_euler() {
        let policy = IntegrationPolicy::default().scheme(Scheme::SemiImplicitEuler);
        let mut point = point_at(Vec2::ZERO, policy);

        point.integrate(Vec2::new(2.0, 0.0), 0.5);
        assert_eq!(point.acceleration, Vec2::new(2.0, 0.0));
        assert_eq!(point.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(point.position, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_opposing_drag_slows_both_directions() {
        let policy = IntegrationPolicy::with_drag(0.1, DragLaw::Opposing);
        let mut point = point_at(Vec2::ZERO, policy);
        point.velocity = Vec2::new(10.0, -10.0);

        point.integrate(Vec2::ZERO, 0.016);
        point.integrate(Vec2::ZERO, 0.016);
        assert!(point.velocity.x < 10.0 && point.velocity.x > 0.0);
        assert!(point.velocity.y > -10.0 && point.velocity.y < 0.0);
    }

    #[test]
    fn test_unsigned_drag_pushes_negative_velocity() {
        let policy = IntegrationPolicy::with_drag(0.1, DragLaw::Unsigned);
        let mut point = point_at(Vec2::ZERO, policy);
        point.velocity = Vec2::new(0.0, -10.0);

        point.integrate(Vec2::ZERO, 0.016);
        assert!(point.acceleration.y < 0.0);
        assert!(point.velocity.y < -10.0);
    }

    #[test]
    fn test_inertial_motion_exact() {
        let mut point = point_at(Vec2::new(100.0, 200.0), IntegrationPolicy::default());
        point.velocity = Vec2::new(3.0, -4.0);
        let dt = 0.125;

        for n in 1..=50 {
            point.integrate(Vec2::ZERO, dt);
            let expected = Vec2::new(100.0, 200.0) + Vec2::new(3.0, -4.0) * (n as f32 * dt);
            assert_eq!(point.position, expected);
        }
    }

    proptest! {
        #[test]
        fn prop_inertial_motion_no_drift(
            px in -500.0f32..500.0,
            py in -500.0f32..500.0,
            vx in -100.0f32..100.0,
            vy in -100.0f32..100.0,
            dt in 0.001f32..0.1,
            steps in 1usize..100,
        ) {
            let start = Vec2::new(px, py);
            let velocity = Vec2::new(vx, vy);
            let mut point = point_at(start, IntegrationPolicy::default());
            point.velocity = velocity;

            for _ in 0..steps {
                point.integrate(Vec2::ZERO, dt);
            }

            let expected = start + velocity * (steps as f32 * dt);
            prop_assert!((point.position - expected).length() < 5e-2);
            prop_assert_eq!(point.velocity, velocity);
            prop_assert_eq!(point.acceleration, Vec2::ZERO);
        }

        #[test]
        fn prop_drag_never_speeds_up(
            drag in 0.01f32..0.3,
            mass in 0.5f32..5.0,
            vx in -40.0f32..40.0,
            vy in -40.0f32..40.0,
            dt in 0.001f32..0.016,
        ) {
            let policy = IntegrationPolicy::with_drag(drag, DragLaw::Opposing);
            let mut point = PointState::new(Vec2::ZERO, mass, policy).unwrap();
            point.velocity = Vec2::new(vx, vy);

            let mut speed = point.speed();
            for _ in 0..200 {
                point.integrate(Vec2::ZERO, dt);
                let next = point.speed();
                prop_assert!(next <= speed, "speed rose from {} to {}", speed, next);
                speed = next;
            }
        }
    }
}
