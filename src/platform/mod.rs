//! Platform abstraction layer
//!
//! Everything between the outside world and the simulation:
//! - Time: frame timestamps to `dt`
//! - Input: orientation/resize/keyboard events via a queue
//! - Driver: owns the arena, runs one update per frame
//! - Synthetic: seeded tilt source for native runs
//! - Web: `wasm-bindgen` handle for the browser page

pub mod driver;
pub mod input;
pub mod synthetic;
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use driver::{FrameDriver, FrameOutput};
pub use input::{InputEvent, InputQueue, InputSender, input_channel};
pub use synthetic::SyntheticTilt;
pub use time::FrameClock;
