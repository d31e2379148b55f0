//! File-driven planning requests
//!
//! A request bundles the roster, the table-type requests and the run
//! options so a whole planning session can be described in one TOML or
//! JSON document:
//!
//! ```toml
//! mode = "replace"
//! assignment = "mix-remaining"
//!
//! [[tables]]
//! shape = "circle"
//! capacity = 10
//! count = 2
//! groups = ["family"]
//!
//! [[guests]]
//! id = "ann"
//! group = "family"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeatingError;
use crate::planner::{
    AssignmentMode, GuestRecord, PlanMode, PlanOptions, TableTypeRequest,
};

fn one() -> u32 {
    1
}

/// A complete planning session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub mode: PlanMode,
    #[serde(default)]
    pub assignment: AssignmentMode,
    #[serde(default = "one")]
    pub first_table_number: u32,
    #[serde(default)]
    pub tables: Vec<TableTypeRequest>,
    #[serde(default)]
    pub guests: Vec<GuestRecord>,
}

impl PlanRequest {
    /// Load a request, choosing JSON or TOML by file extension
    pub fn from_file(path: &Path) -> Result<Self, SeatingError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, SeatingError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, SeatingError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn options(&self) -> PlanOptions {
        PlanOptions {
            mode: self.mode,
            assignment: self.assignment,
            first_table_number: self.first_table_number,
        }
    }
}
