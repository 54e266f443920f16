//! Error types for arena construction and configuration.

use thiserror::Error;

/// Errors raised while building or reconfiguring a simulation.
///
/// The per-frame kernel never fails; these only surface from constructors,
/// resizes and settings parsing.
#[derive(Error, Debug)]
pub enum SimError {
    /// Mass must be strictly positive.
    #[error("point mass must be positive, got {0}")]
    NonPositiveMass(f32),

    /// Drag coefficient must be non-negative.
    #[error("drag coefficient must be non-negative, got {0}")]
    NegativeDrag(f32),

    /// Damping factor must lie in (0, 1].
    #[error("damping factor must be in (0, 1], got {0}")]
    DampingOutOfRange(f32),

    /// Arena cannot fit the point inside its margins.
    #[error("arena {width}x{height} is too small for margin {margin}")]
    ArenaTooSmall {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
        /// Point radius plus wall width.
        margin: f32,
    },

    /// Unrecognised variant name.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// Settings JSON could not be parsed.
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}
