//! Tunable constants for layout and rendering.
//!
//! All fields deserialize with camelCase names and fall back to defaults, so
//! a partial JSON document such as `{"render": {"annotationOffsetUnits": 40}}`
//! is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default room fill colors, cycled by room index.
pub const DEFAULT_FILL_PALETTE: [&str; 5] = [
    "#e0f2fe", "#f0fdf4", "#fef3c7", "#fce7f3", "#f3f4f6",
];

/// Packing parameters for the layout composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Horizontal gap left between consecutive rooms, in meters.
    pub room_gap_units: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            room_gap_units: 6.0,
        }
    }
}

/// Drawing parameters for the blueprint renderer.
///
/// Everything except `units_per_meter` is in drawing units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Drawing units per meter.
    pub units_per_meter: f64,
    /// Distance between a wall and its dimension line.
    pub annotation_offset_units: f64,
    /// Room fill colors, indexed by `room_index % len`.
    pub fill_palette: Vec<String>,
    /// Offset of the room label from the room's first vertex.
    pub label_offset_units: f64,
    /// Space kept around the rooms' bounding box.
    pub margin_units: f64,
    pub show_grid: bool,
    pub grid_size_units: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            units_per_meter: 100.0,
            annotation_offset_units: 25.0,
            fill_palette: DEFAULT_FILL_PALETTE.iter().map(|&c| c.to_owned()).collect(),
            label_offset_units: 50.0,
            margin_units: 100.0,
            show_grid: true,
            grid_size_units: 50.0,
        }
    }
}

impl RenderConfig {
    /// Fill color for the room at `room_index`, or `None` if the palette is empty.
    #[must_use]
    pub fn fill_for(&self, room_index: usize) -> Option<&str> {
        if self.fill_palette.is_empty() {
            return None;
        }
        Some(self.fill_palette[room_index % self.fill_palette.len()].as_str())
    }
}

/// Complete pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueprintConfig {
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl BlueprintConfig {
    /// Loads a configuration from JSON, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `FloorplanError::Json` if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
