//! Engine configuration.
//!
//! The host may pass a JSON object when creating the canvas; any field it
//! leaves out keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::VERTEX_SIZE;
use crate::error::EngineError;
use crate::hit::SelectPolicy;
use crate::layout::WrapCorrection;

/// Colors and font used by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Fill behind the graph when no background image is loaded.
    pub background: String,
    pub edge: String,
    pub vertex: String,
    /// Outline around the active vertex.
    pub active_outline: String,
    pub active_line_width: f64,
    pub arc: String,
    pub label: String,
    /// CSS font shorthand for degree labels.
    pub font: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: "#11f9b9".into(),
            edge: "#ff8888".into(),
            vertex: "#ff8888".into(),
            active_outline: "#000".into(),
            active_line_width: 1.0,
            arc: "#ff8888".into(),
            label: "#ff8888".into(),
            font: "14px Silkscreen, sans-serif".into(),
        }
    }
}

/// Tunables for hit-testing, layout and styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of a vertex square and its hit box.
    pub vertex_size: f64,
    pub select_policy: SelectPolicy,
    pub wrap_correction: WrapCorrection,
    pub style: Style,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vertex_size: VERTEX_SIZE,
            select_policy: SelectPolicy::default(),
            wrap_correction: WrapCorrection::default(),
            style: Style::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if `json` is malformed or a field has
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}
