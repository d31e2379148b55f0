//! Table Seating - seat geometry and guest arrangement planning
//!
//! This library places seats around tables and assigns a guest roster to a
//! configured set of tables. It performs no I/O of its own beyond optional
//! loading of request and preset files; persisting and rendering the
//! results is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use table_seating::geometry::TableShape;
//! use table_seating::planner::{execute, GuestRecord, PlanOptions, TableTypeRequest};
//!
//! let roster = vec![GuestRecord::new("ann"), GuestRecord::new("bob")];
//! let tables = [TableTypeRequest::new(TableShape::Circle, 8, 1)];
//!
//! let plan = execute(&roster, &tables, &PlanOptions::default());
//! assert_eq!(plan.seated_guests, 2);
//! assert_eq!(plan.tables[0].seats.len(), 8);
//! ```

pub mod error;
pub mod geometry;
pub mod planner;
pub mod request;

pub use error::SeatingError;
pub use geometry::{compute_seats, GeometryConfig, SeatPosition, StandoffPresets};
pub use planner::{execute, preview, ArrangementPlan, ArrangementPreview};
pub use request::PlanRequest;

use std::path::Path;

/// Configuration for request-driven planning
#[derive(Debug, Clone, Default)]
pub struct SeatingConfig {
    /// Geometry used to lay out every created table
    pub geometry: GeometryConfig,
}

impl SeatingConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the geometry configuration
    pub fn with_geometry(mut self, geometry: GeometryConfig) -> Self {
        self.geometry = geometry;
        self
    }

    /// Overlay standoff presets loaded from a TOML file on the defaults
    pub fn with_presets_file(mut self, path: &Path) -> Result<Self, SeatingError> {
        let extra = StandoffPresets::from_file(path)?;
        let presets = std::mem::replace(&mut self.geometry.presets, StandoffPresets::empty());
        self.geometry.presets = presets.merge(extra);
        Ok(self)
    }
}

/// Preview a planning request
pub fn preview_request(request: &PlanRequest) -> ArrangementPreview {
    planner::preview(&request.guests, &request.tables, request.mode)
}

/// Execute a planning request with default configuration
pub fn plan_request(request: &PlanRequest) -> ArrangementPlan {
    plan_request_with_config(request, &SeatingConfig::default())
}

/// Execute a planning request with custom configuration
pub fn plan_request_with_config(request: &PlanRequest, config: &SeatingConfig) -> ArrangementPlan {
    planner::execute_with_config(
        &request.guests,
        &request.tables,
        &request.options(),
        &config.geometry,
    )
}
