//! Error types for loading requests and configuration

use thiserror::Error;

use crate::geometry::PresetError;

/// Errors at the file and format boundaries of the crate
///
/// Seat geometry and planning themselves never fail.
#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid standoff presets: {0}")]
    Presets(#[from] PresetError),
}
