//! Seeded stand-in for a device orientation sensor
//!
//! Used by the native binary, which has no tilt sensor: a random walk of
//! beta/gamma that stays inside the sensor ranges.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::OrientationSample;

/// Largest change of any angle between two samples (degrees)
const MAX_STEP_DEG: f32 = 3.0;
/// Keep the walk away from the singular +-90 gamma edge
const GAMMA_LIMIT: f32 = 80.0;
const BETA_LIMIT: f32 = 80.0;

/// Random-walk orientation source
#[derive(Debug, Clone)]
pub struct SyntheticTilt {
    rng: Pcg32,
    sample: OrientationSample,
}

impl SyntheticTilt {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            sample: OrientationSample::default(),
        }
    }

    /// Next reading of the walk
    pub fn next_sample(&mut self) -> OrientationSample {
        let step = MAX_STEP_DEG;
        let alpha = (self.sample.alpha + self.rng.random_range(-step..=step)).rem_euclid(360.0);
        // rem_euclid can round a tiny negative up to exactly 360
        self.sample.alpha = if alpha >= 360.0 { 0.0 } else { alpha };
        self.sample.beta =
            (self.sample.beta + self.rng.random_range(-step..=step)).clamp(-BETA_LIMIT, BETA_LIMIT);
        self.sample.gamma =
            (self.sample.gamma + self.rng.random_range(-step..=step)).clamp(-GAMMA_LIMIT, GAMMA_LIMIT);
        self.sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_walk() {
        let mut a = SyntheticTilt::new(42);
        let mut b = SyntheticTilt::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn test_walk_stays_in_range() {
        let mut tilt = SyntheticTilt::new(7);
        let mut previous = OrientationSample::default();
        for _ in 0..5000 {
            let s = tilt.next_sample();
            assert!((0.0..360.0).contains(&s.alpha));
            assert!((-BETA_LIMIT..=BETA_LIMIT).contains(&s.beta));
            assert!((-GAMMA_LIMIT..=GAMMA_LIMIT).contains(&s.gamma));
            assert!((s.gamma - previous.gamma).abs() <= MAX_STEP_DEG + 1e-4);
            previous = s;
        }
    }
}
