//! Seat geometry calculator
//!
//! Places N seats around a table of a given shape so they are evenly spaced
//! and sit on or just outside the table edge. Pure and deterministic: the
//! seat set of a table is fully determined by its shape, capacity, style and
//! optional physical size, so it is safe to recompute at any time.

pub mod config;
pub mod engine;
pub mod presets;
pub mod transform;
pub mod types;

pub use config::GeometryConfig;
pub use engine::{compute_seats, compute_seats_with_config};
pub use presets::{PresetError, Standoff, StandoffPresets};
pub use transform::{seat_to_canvas, seats_to_canvas, CanvasSeat, RotationTransform, TablePlacement};
pub use types::*;
