//! Standoff presets for rectangular tables
//!
//! A standoff is how far from the table center a row of seats sits, as a
//! fraction of the table dimension along that axis. 0.5 places seats exactly
//! on the edge; larger values push them outward. Known table sizes carry
//! tuned standoffs so seats do not visually overlap the tabletop.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing preset files
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Failed to read preset file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse preset TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Standoff pair for one table size
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Standoff {
    /// Distance of the left/right (short side) seat columns
    pub short_side: f64,
    /// Distance of the top/bottom (long side) seat rows
    pub long_side: f64,
}

impl Standoff {
    pub fn uniform(value: f64) -> Self {
        Self {
            short_side: value,
            long_side: value,
        }
    }
}

/// Lookup table from table size key (`"<width>x<height>"`) to standoffs
#[derive(Debug, Clone, PartialEq)]
pub struct StandoffPresets {
    pub name: Option<String>,
    pub presets: HashMap<String, Standoff>,
}

#[derive(Deserialize)]
struct TomlPresets {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    standoffs: HashMap<String, Standoff>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Tuned standoffs for the rectangular table sizes offered in the planner
const DEFAULT_PRESETS: &str = r#"
[metadata]
name = "default"

[standoffs]
"120x60" = { short_side = 0.60, long_side = 0.62 }
"160x80" = { short_side = 0.58, long_side = 0.60 }
"180x90" = { short_side = 0.57, long_side = 0.60 }
"200x100" = { short_side = 0.56, long_side = 0.58 }
"240x100" = { short_side = 0.56, long_side = 0.57 }
"300x120" = { short_side = 0.55, long_side = 0.56 }
"#;

/// Build the lookup key for a physical table size
pub fn size_key(width: f64, height: f64) -> String {
    format!("{}x{}", width.round() as i64, height.round() as i64)
}

impl StandoffPresets {
    /// Create an empty preset table
    pub fn empty() -> Self {
        Self {
            name: None,
            presets: HashMap::new(),
        }
    }

    /// Load presets from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PresetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load presets from a TOML string
    pub fn from_str(content: &str) -> Result<Self, PresetError> {
        let parsed: TomlPresets = toml::from_str(content)?;

        Ok(StandoffPresets {
            name: parsed.metadata.and_then(|m| m.name),
            presets: parsed.standoffs,
        })
    }

    /// Add or replace the standoffs for one table size
    pub fn with_preset(mut self, width: f64, height: f64, standoff: Standoff) -> Self {
        self.presets.insert(size_key(width, height), standoff);
        self
    }

    /// Overlay another preset table on top of this one
    pub fn merge(mut self, other: StandoffPresets) -> Self {
        if other.name.is_some() {
            self.name = other.name;
        }
        self.presets.extend(other.presets);
        self
    }

    /// Look up the standoffs for an exact table size
    pub fn lookup(&self, width: f64, height: f64) -> Option<Standoff> {
        self.presets.get(&size_key(width, height)).copied()
    }
}

impl Default for StandoffPresets {
    fn default() -> Self {
        Self::from_str(DEFAULT_PRESETS).expect("Default presets should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_presets() {
        let presets = StandoffPresets::default();
        assert_eq!(presets.name.as_deref(), Some("default"));
        let standoff = presets.lookup(180.0, 90.0).expect("180x90 preset");
        assert_eq!(standoff.short_side, 0.57);
        assert_eq!(standoff.long_side, 0.60);
    }

    #[test]
    fn test_lookup_rounds_dimensions() {
        let presets = StandoffPresets::default();
        assert!(presets.lookup(179.6, 90.2).is_some());
        assert!(presets.lookup(181.0, 90.0).is_none());
    }

    #[test]
    fn test_size_key() {
        assert_eq!(size_key(200.0, 100.0), "200x100");
        assert_eq!(size_key(119.5, 60.4), "120x60");
    }

    #[test]
    fn test_merge_overrides() {
        let custom = StandoffPresets::from_str(
            r#"
[standoffs]
"180x90" = { short_side = 0.5, long_side = 0.5 }
"400x100" = { short_side = 0.52, long_side = 0.53 }
"#,
        )
        .expect("Should parse");
        assert_eq!(custom.name, None);

        let merged = StandoffPresets::default().merge(custom);
        assert_eq!(merged.name.as_deref(), Some("default"));
        assert_eq!(merged.lookup(180.0, 90.0), Some(Standoff::uniform(0.5)));
        assert!(merged.lookup(400.0, 100.0).is_some());
        assert!(merged.lookup(120.0, 60.0).is_some());
    }

    #[test]
    fn test_with_preset() {
        let presets = StandoffPresets::empty().with_preset(100.0, 50.0, Standoff::uniform(0.6));
        assert_eq!(presets.lookup(100.0, 50.0), Some(Standoff::uniform(0.6)));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = StandoffPresets::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(PresetError::ParseError(_))));
    }
}
