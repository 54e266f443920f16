//! Deterministic simulation module
//!
//! The numerical core: integrator, arena containment, orientation mapping.
//! Pure and platform-free:
//! - `dt` and orientation come in from the driver
//! - No rendering or platform dependencies
//! - Same inputs, same bits out

pub mod arena;
pub mod collision;
pub mod orientation;
pub mod point;
pub mod policy;
pub mod readout;

pub use arena::{Arena, ArenaConfig, Nudge};
pub use collision::{
    BoundaryShape, Contacts, WallResponse, damped_reflection, resolve_circle, resolve_rect,
};
pub use orientation::{OrientationSample, TiltAxes};
pub use point::PointState;
pub use policy::{DragLaw, IntegrationPolicy, Scheme, VelocityUpdate};
pub use readout::Readout;
