//! Input events pushed by sensor/window/keyboard handlers
//!
//! Handlers hold an [`InputSender`] and never touch the arena directly; the
//! frame driver drains the [`InputQueue`] before each update, so the
//! simulation reads one orientation snapshot per frame.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::sim::{Nudge, OrientationSample};

/// Something that happened outside the frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// New device orientation reading (degrees)
    Orientation(OrientationSample),
    /// Arena extents changed
    Resize { width: f32, height: f32 },
    /// Arrow key hop
    Nudge(Nudge),
    /// Show/hide the debug readout
    ToggleOverlay,
}

/// Create a connected sender/queue pair
pub fn input_channel() -> (InputSender, InputQueue) {
    let (tx, rx) = mpsc::channel();
    (InputSender { tx }, InputQueue { rx })
}

/// Cloneable handle given to each event source
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<InputEvent>,
}

impl InputSender {
    pub fn send(&self, event: InputEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("Input dropped, frame driver gone: {:?}", event);
        }
    }

    pub fn orientation(&self, alpha: f32, beta: f32, gamma: f32) {
        self.send(InputEvent::Orientation(OrientationSample::new(alpha, beta, gamma)));
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.send(InputEvent::Resize { width, height });
    }

    /// Forward a DOM key name; non-arrow keys are ignored
    pub fn key(&self, key: &str) {
        if let Some(nudge) = Nudge::from_key(key) {
            self.send(InputEvent::Nudge(nudge));
        }
    }

    pub fn toggle_overlay(&self) {
        self.send(InputEvent::ToggleOverlay);
    }
}

/// Receiving end, owned by the frame driver
#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<InputEvent>,
}

impl InputQueue {
    /// All events queued so far, oldest first, without blocking
    pub fn drain(&self) -> impl Iterator<Item = InputEvent> + '_ {
        self.rx.try_iter()
    }
}
