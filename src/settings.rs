//! Toy settings and variant presets
//!
//! Persisted as JSON: LocalStorage on the web, an optional file natively.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::sim::{
    ArenaConfig, BoundaryShape, DragLaw, IntegrationPolicy, Scheme, TiltAxes, VelocityUpdate,
};

/// The toy flavours, each a bundle of integration policy and constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Light mass, scaled force, walls with friction, y follows -beta
    #[default]
    Handheld,
    /// 2D with unsigned drag and per-frame velocity reset
    Planar,
    /// Planar physics on a 1D track (gamma only)
    Linear,
    /// Semi-implicit Euler, no drag
    Classic,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Handheld,
        Variant::Planar,
        Variant::Linear,
        Variant::Classic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Handheld => "handheld",
            Variant::Planar => "planar",
            Variant::Linear => "linear",
            Variant::Classic => "classic",
        }
    }

    pub fn mass(&self) -> f32 {
        match self {
            Variant::Handheld => HANDHELD_MASS,
            _ => 1.0,
        }
    }

    pub fn policy(&self) -> IntegrationPolicy {
        match self {
            Variant::Handheld => IntegrationPolicy::scaled(HANDHELD_FORCE_SCALE),
            Variant::Planar | Variant::Linear => {
                IntegrationPolicy::with_drag(DRAG_COEFFICIENT, DragLaw::Unsigned)
                    .velocity_update(VelocityUpdate::Reset)
            }
            Variant::Classic => IntegrationPolicy::default().scheme(Scheme::SemiImplicitEuler),
        }
    }

    pub fn tilt_axes(&self) -> TiltAxes {
        match self {
            Variant::Handheld => TiltAxes::PlanarInverted,
            Variant::Planar | Variant::Classic => TiltAxes::Planar,
            Variant::Linear => TiltAxes::Horizontal,
        }
    }

    /// Wall inset drawn around the play area
    pub fn wall_width(&self) -> f32 {
        match self {
            Variant::Handheld => HANDHELD_WALL_WIDTH,
            _ => 0.0,
        }
    }

    pub fn coupled_wall_friction(&self) -> bool {
        matches!(self, Variant::Handheld)
    }
}

impl FromStr for Variant {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "handheld" | "toy" => Ok(Variant::Handheld),
            "planar" | "2d" => Ok(Variant::Planar),
            "linear" | "1d" => Ok(Variant::Linear),
            "classic" => Ok(Variant::Classic),
            _ => Err(SimError::UnknownVariant(s.to_string())),
        }
    }
}

/// Toy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub variant: Variant,

    // === Arena ===
    /// Drawn radius of the point
    pub point_radius: f32,
    /// Wall thickness inset on every side
    pub wall_width: f32,
    pub boundary: BoundaryShape,

    // === Physics ===
    /// Fraction of speed kept on a bounce, (0, 1]
    pub damping_factor: f32,
    pub gravity: f32,
    /// Damp the along-wall velocity on impact too
    pub coupled_wall_friction: bool,

    // === HUD ===
    /// Show the position/velocity/orientation readout
    #[serde(default)]
    pub show_overlay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_variant(Variant::default())
    }
}

impl Settings {
    /// Settings with the variant's own defaults
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            point_radius: POINT_RADIUS,
            wall_width: variant.wall_width(),
            boundary: BoundaryShape::Rect,
            damping_factor: DAMPING_FACTOR,
            gravity: GRAVITY,
            coupled_wall_friction: variant.coupled_wall_friction(),
            show_overlay: false,
        }
    }

    /// Switch variant, resetting the variant-dependent fields
    pub fn apply_variant(&mut self, variant: Variant) {
        self.variant = variant;
        self.wall_width = variant.wall_width();
        self.coupled_wall_friction = variant.coupled_wall_friction();
    }

    /// Arena construction parameters for the given extents
    pub fn arena_config(&self, width: f32, height: f32) -> ArenaConfig {
        ArenaConfig {
            width,
            height,
            point_radius: self.point_radius,
            wall_width: self.wall_width,
            boundary: self.boundary,
            damping_factor: self.damping_factor,
            gravity: self.gravity,
            mass: self.variant.mass(),
            policy: self.variant.policy(),
            tilt_axes: self.variant.tilt_axes(),
            coupled_wall_friction: self.coupled_wall_friction,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "tilt_toybox_settings";

    /// Environment variable naming a native settings file
    #[allow(dead_code)]
    const PATH_ENV: &'static str = "TILT_TOYBOX_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from `$TILT_TOYBOX_SETTINGS` if set (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Write settings back to `$TILT_TOYBOX_SETTINGS` if set (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            return;
        };
        match self.to_json() {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => log::info!("Settings saved to {}", path),
                Err(e) => log::warn!("Cannot write {}: {}", path, e),
            },
            Err(e) => log::warn!("Cannot serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Arena;

    #[test]
    fn test_variant_from_str() {
        assert_eq!("Planar".parse::<Variant>().unwrap(), Variant::Planar);
        assert_eq!("1d".parse::<Variant>().unwrap(), Variant::Linear);
        assert!(matches!(
            "3d".parse::<Variant>(),
            Err(SimError::UnknownVariant(_))
        ));
        for variant in Variant::ALL {
            assert_eq!(variant.as_str().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_every_variant_builds_an_arena() {
        for variant in Variant::ALL {
            let settings = Settings::from_variant(variant);
            let arena = Arena::new(settings.arena_config(DEFAULT_WIDTH, DEFAULT_HEIGHT));
            assert!(arena.is_ok(), "{} failed", variant.as_str());
        }
    }

    #[test]
    fn test_handheld_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.variant, Variant::Handheld);
        assert!(settings.coupled_wall_friction);

        let config = settings.arena_config(400.0, 300.0);
        assert_eq!(config.margin(), POINT_RADIUS + HANDHELD_WALL_WIDTH);
        assert_eq!(config.policy.force_scale, HANDHELD_FORCE_SCALE);
        assert_eq!(config.tilt_axes, TiltAxes::PlanarInverted);
    }

    #[test]
    fn test_apply_variant() {
        let mut settings = Settings::default();
        settings.apply_variant(Variant::Linear);
        assert_eq!(settings.wall_width, 0.0);
        assert!(!settings.coupled_wall_friction);
        assert_eq!(settings.arena_config(100.0, 100.0).tilt_axes, TiltAxes::Horizontal);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::from_variant(Variant::Classic);
        settings.boundary = BoundaryShape::Circle { radius: 250.0 };
        settings.show_overlay = true;

        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Settings::from_json("{\"variant\": 3}"),
            Err(SimError::Settings(_))
        ));
    }
}
