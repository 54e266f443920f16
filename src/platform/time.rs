//! Frame timestamps to simulation time steps

/// Converts display-refresh timestamps (ms) into `dt` seconds
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick; the first tick is the zero baseline
    ///
    /// Timestamps are passed through unchecked: a backwards jump yields a
    /// negative `dt`, which the integrator treats as a no-op. A long stall
    /// (e.g. a backgrounded tab) yields one huge step.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_baseline() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12_345.0), 0.0);
    }

    #[test]
    fn test_deltas_are_relative_to_previous() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        assert_eq!(clock.tick(1016.0), 0.016);
        assert_eq!(clock.tick(1032.0), 0.016);
        assert_eq!(clock.tick(1532.0), 0.5);
    }
}
