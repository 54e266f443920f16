//! Tilt Toybox entry point
//!
//! On the web the page drives `WebToy`; natively we run a headless session
//! fed by a synthetic tilt sensor and log what the point does.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    tilt_toybox::platform::web::init_logging();
    log::info!("Tilt Toybox starting...");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), tilt_toybox::SimError> {
    use tilt_toybox::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use tilt_toybox::platform::{FrameDriver, SyntheticTilt};
    use tilt_toybox::{Settings, Variant};

    env_logger::init();
    log::info!("Tilt Toybox (native) starting...");

    // tilt-toybox [variant] [seed]
    let mut args = std::env::args().skip(1);
    let mut settings = Settings::load();
    if let Some(name) = args.next() {
        settings.apply_variant(name.parse::<Variant>()?);
    }
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    settings.show_overlay = true;

    let (mut driver, input) = FrameDriver::new(&settings, DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
    let mut sensor = SyntheticTilt::new(seed);
    log::info!("Variant {} with seed {}", settings.variant.as_str(), seed);

    const FPS: u32 = 60;
    const SECONDS: u32 = 10;
    let mut bounces = 0u32;
    for frame in 0..=FPS * SECONDS {
        let s = sensor.next_sample();
        input.orientation(s.alpha, s.beta, s.gamma);

        let out = driver.frame(frame as f64 * 1000.0 / FPS as f64);
        if out.contacts.any() {
            bounces += 1;
        }
        if frame % FPS == 0 {
            if let Some(readout) = out.readout {
                log::info!("t={}s {:?}", frame / FPS, readout);
            }
        }
    }

    let point = driver.arena().point();
    println!(
        "{} frames, {} wall contacts, final position ({:.1}, {:.1}), speed {:.2}",
        FPS * SECONDS,
        bounces,
        point.position.x,
        point.position.y,
        point.speed()
    );
    Ok(())
}
