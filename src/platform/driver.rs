//! Frame driver: owns the arena and runs it once per display refresh

use super::input::{InputEvent, InputQueue, InputSender, input_channel};
use super::time::FrameClock;
use crate::error::SimError;
use crate::settings::Settings;
use crate::sim::{Arena, Contacts, Readout};

/// Result of one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameOutput {
    /// Time step that was simulated (seconds)
    pub dt: f32,
    pub contacts: Contacts,
    /// Present while the debug overlay is on
    pub readout: Option<Readout>,
}

/// Owns the single arena and feeds it queued input and frame time
#[derive(Debug)]
pub struct FrameDriver {
    arena: Arena,
    clock: FrameClock,
    queue: InputQueue,
    show_overlay: bool,
}

impl FrameDriver {
    /// Build the driver and the sender that event sources should use
    pub fn new(settings: &Settings, width: f32, height: f32) -> Result<(Self, InputSender), SimError> {
        let arena = Arena::new(settings.arena_config(width, height))?;
        let (sender, queue) = input_channel();
        log::info!("Frame driver ready ({} variant)", settings.variant.as_str());

        let driver = Self {
            arena,
            clock: FrameClock::new(),
            queue,
            show_overlay: settings.show_overlay,
        };
        Ok((driver, sender))
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn show_overlay(&self) -> bool {
        self.show_overlay
    }

    /// Apply queued input, then advance the arena to `timestamp_ms`
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameOutput {
        self.apply_input();

        let dt = self.clock.tick(timestamp_ms);
        let contacts = self.arena.update(dt);

        FrameOutput {
            dt,
            contacts,
            readout: self.show_overlay.then(|| Readout::from(&self.arena)),
        }
    }

    fn apply_input(&mut self) {
        for event in self.queue.drain() {
            match event {
                InputEvent::Orientation(sample) => self.arena.set_orientation(sample),
                InputEvent::Resize { width, height } => {
                    if let Err(e) = self.arena.resize(width, height) {
                        log::warn!("Resize ignored: {}", e);
                    }
                }
                InputEvent::Nudge(direction) => {
                    self.arena.nudge(direction);
                }
                InputEvent::ToggleOverlay => {
                    self.show_overlay = !self.show_overlay;
                    log::info!("Overlay: {}", self.show_overlay);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Variant;
    use crate::sim::OrientationSample;
    use glam::Vec2;

    fn driver(variant: Variant) -> (FrameDriver, InputSender) {
        FrameDriver::new(&Settings::from_variant(variant), 800.0, 600.0).unwrap()
    }

    #[test]
    fn test_first_frame_is_zero_dt() {
        let (mut driver, _tx) = driver(Variant::Handheld);
        let out = driver.frame(5000.0);
        assert_eq!(out.dt, 0.0);
        assert_eq!(driver.arena().point().position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_last_orientation_wins() {
        let (mut driver, tx) = driver(Variant::Handheld);
        tx.orientation(0.0, 10.0, 10.0);
        tx.orientation(0.0, -20.0, 5.0);
        driver.frame(0.0);
        assert_eq!(
            driver.arena().orientation(),
            OrientationSample::new(0.0, -20.0, 5.0)
        );
    }

    #[test]
    fn test_tilt_moves_point() {
        let (mut driver, tx) = driver(Variant::Handheld);
        tx.orientation(0.0, 0.0, 30.0);
        for i in 0..30 {
            driver.frame(i as f64 * 16.0);
        }
        assert!(driver.arena().point().position.x > 400.0);
    }

    #[test]
    fn test_resize_and_bad_resize() {
        let (mut driver, tx) = driver(Variant::Planar);
        tx.resize(1000.0, 500.0);
        driver.frame(0.0);
        assert_eq!(driver.arena().extent(), Vec2::new(1000.0, 500.0));

        tx.resize(1.0, 1.0);
        driver.frame(16.0);
        assert_eq!(driver.arena().extent(), Vec2::new(1000.0, 500.0));
    }

    #[test]
    fn test_nudge_and_overlay() {
        let (mut driver, tx) = driver(Variant::Linear);
        assert!(driver.frame(0.0).readout.is_none());

        tx.key("ArrowRight");
        tx.toggle_overlay();
        let out = driver.frame(0.0);
        let readout = out.readout.unwrap();
        assert_eq!(readout.x, 420.0);
        assert!(driver.show_overlay());
    }
}
