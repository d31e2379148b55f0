//! Configuration for the seat geometry calculator

use super::presets::{Standoff, StandoffPresets};

/// Spacing and size constants used when placing seats
#[derive(Debug, Clone)]
pub struct GeometryConfig {
    /// Radius of the seat ring on round tables, as a fraction of the diameter
    pub circle_radius: f64,

    /// How far past the edge a seat may protrude, as a fraction of the half-size
    pub seat_protrusion: f64,

    /// Distance of seat rows on square tables
    pub square_standoff: f64,

    /// Standoff used for rectangles that match no preset
    pub default_standoff: f64,

    /// Seat footprint as a fraction of the table's smaller dimension
    pub seat_size_ratio: f64,

    /// Smallest seat footprint in pixels
    pub min_seat_px: f64,

    /// Largest seat footprint in pixels
    pub max_seat_px: f64,

    /// Gap between neighbouring seats in pixels
    pub seat_gap_px: f64,

    /// Relative spacing used when no physical size is known
    pub default_spacing: f64,

    /// Largest fraction of a side a row of seats may span
    pub max_span: f64,

    /// Fraction of the width used by each half in the side-split style
    pub side_split_span: f64,

    /// Tuned standoffs for known rectangular table sizes
    pub presets: StandoffPresets,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            circle_radius: 0.5,
            seat_protrusion: 0.3,
            square_standoff: 0.55,
            default_standoff: 0.5,
            seat_size_ratio: 0.22,
            min_seat_px: 28.0,
            max_seat_px: 44.0,
            seat_gap_px: 10.0,
            default_spacing: 0.22,
            max_span: 0.9,
            side_split_span: 0.8,
            presets: StandoffPresets::default(),
        }
    }
}

impl GeometryConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the standoff preset table
    pub fn with_presets(mut self, presets: StandoffPresets) -> Self {
        self.presets = presets;
        self
    }

    /// Set the seat gap in pixels
    pub fn with_seat_gap(mut self, gap: f64) -> Self {
        self.seat_gap_px = gap;
        self
    }

    /// Set the seat footprint bounds in pixels
    pub fn with_seat_size_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_seat_px = min;
        self.max_seat_px = max.max(min);
        self
    }

    /// Set the relative spacing used without physical dimensions
    pub fn with_default_spacing(mut self, spacing: f64) -> Self {
        self.default_spacing = spacing;
        self
    }

    /// Farthest a seat may sit from the table center on either axis
    pub fn max_seat_distance(&self) -> f64 {
        0.5 * (1.0 + self.seat_protrusion)
    }

    /// Clamp a standoff so seats sit on or just outside the edge
    pub fn clamp_standoff(&self, standoff: f64) -> f64 {
        standoff.clamp(0.5, self.max_seat_distance())
    }

    /// Pixel footprint of one seat for a table of the given size
    pub fn seat_size_px(&self, width: f64, height: f64) -> f64 {
        (width.min(height) * self.seat_size_ratio).clamp(self.min_seat_px, self.max_seat_px)
    }

    /// Standoffs for a rectangle, falling back to the default when no preset matches
    pub fn rectangle_standoff(&self, dimensions: Option<(f64, f64)>) -> Standoff {
        let standoff = dimensions
            .and_then(|(w, h)| {
                let found = self.presets.lookup(w, h);
                if found.is_none() {
                    tracing::trace!(width = w, height = h, "no standoff preset for table size");
                }
                found
            })
            .unwrap_or(Standoff::uniform(self.default_standoff));

        Standoff {
            short_side: self.clamp_standoff(standoff.short_side),
            long_side: self.clamp_standoff(standoff.long_side),
        }
    }
}
