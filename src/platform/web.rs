//! Browser binding
//!
//! The page owns the canvas, the sensor permission dance and the
//! `requestAnimationFrame` loop; it forwards events here and reads the point
//! back for drawing.

use wasm_bindgen::prelude::*;

use super::driver::{FrameDriver, FrameOutput};
use super::input::InputSender;
use crate::settings::{Settings, Variant};

/// Install the panic hook and console logger
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
}

fn js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// Handle exported to JavaScript
#[wasm_bindgen]
pub struct WebToy {
    driver: FrameDriver,
    input: InputSender,
    settings: Settings,
    last: Option<FrameOutput>,
}

#[wasm_bindgen]
impl WebToy {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<WebToy, JsError> {
        let settings = Settings::load();
        let (driver, input) = FrameDriver::new(&settings, width, height).map_err(js_error)?;
        Ok(Self {
            driver,
            input,
            settings,
            last: None,
        })
    }

    /// `deviceorientation` handler; null angles read as level
    pub fn handle_orientation(&self, alpha: Option<f32>, beta: Option<f32>, gamma: Option<f32>) {
        self.input.orientation(
            alpha.unwrap_or(0.0),
            beta.unwrap_or(0.0),
            gamma.unwrap_or(0.0),
        );
    }

    /// `keydown` handler, takes `KeyboardEvent.key`
    pub fn handle_key(&self, key: &str) {
        self.input.key(key);
    }

    pub fn toggle_overlay(&self) {
        self.input.toggle_overlay();
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.input.resize(width, height);
    }

    /// `requestAnimationFrame` callback body
    pub fn frame(&mut self, timestamp_ms: f64) {
        self.last = Some(self.driver.frame(timestamp_ms));
    }

    /// Switch variant, persist it and restart the arena at the current size
    pub fn set_variant(&mut self, name: &str) -> Result<(), JsError> {
        let variant: Variant = name.parse().map_err(js_error)?;
        let mut settings = self.settings.clone();
        settings.apply_variant(variant);

        let extent = self.driver.arena().extent();
        let (driver, input) = FrameDriver::new(&settings, extent.x, extent.y).map_err(js_error)?;
        settings.save();

        self.driver = driver;
        self.input = input;
        self.settings = settings;
        self.last = None;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 {
        self.driver.arena().point().position.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 {
        self.driver.arena().point().position.y
    }

    #[wasm_bindgen(getter)]
    pub fn vx(&self) -> f32 {
        self.driver.arena().point().velocity.x
    }

    #[wasm_bindgen(getter)]
    pub fn vy(&self) -> f32 {
        self.driver.arena().point().velocity.y
    }

    #[wasm_bindgen(getter)]
    pub fn ax(&self) -> f32 {
        self.driver.arena().point().acceleration.x
    }

    #[wasm_bindgen(getter)]
    pub fn ay(&self) -> f32 {
        self.driver.arena().point().acceleration.y
    }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f32 {
        self.settings.point_radius
    }

    /// Overlay values as JSON, or `undefined` while the overlay is off
    pub fn readout_json(&self) -> Option<String> {
        let readout = self.last.and_then(|out| out.readout)?;
        serde_json::to_string(&readout).ok()
    }
}
