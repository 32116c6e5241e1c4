//! Wall records captured by the on-site survey workflow.
//!
//! Walls are ordered: within a room, the order of records is the order in
//! which the surveyor walked the perimeter.

mod parse;

pub use parse::parse_walls;

use serde::{Deserialize, Serialize};

/// Identity of the room a wall belongs to.
///
/// Identifiers and labels live in separate key spaces: a wall with
/// `room_id` `"Kitchen"` never groups with walls merely labelled `"Kitchen"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKey<'a> {
    /// Keyed by the surveyor-supplied `room_id`.
    Id(&'a str),
    /// Keyed by the `room_type` label.
    Label(&'a str),
}

/// An opening or fixture recorded on a wall (door, window, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallFeature {
    pub feature_type: String,
    pub width_m: f64,
}

/// One measured straight wall.
///
/// `angle_deg` is the turn taken *before* walking the wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallMeasurement {
    pub room_type: String,
    /// Stable room identifier; when absent, rooms are keyed by `room_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    pub length_m: f64,
    pub angle_deg: f64,
    pub height_m: f64,
    #[serde(default)]
    pub features: Vec<WallFeature>,
}

impl WallMeasurement {
    /// Creates a wall with no features and no room identifier.
    #[must_use]
    pub fn new(room_type: impl Into<String>, length_m: f64, angle_deg: f64, height_m: f64) -> Self {
        Self {
            room_type: room_type.into(),
            room_id: None,
            length_m,
            angle_deg,
            height_m,
            features: Vec::new(),
        }
    }

    /// Attaches a stable room identifier.
    #[must_use]
    pub fn with_room_id(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Records a feature on this wall.
    #[must_use]
    pub fn with_feature(mut self, feature_type: impl Into<String>, width_m: f64) -> Self {
        self.features.push(WallFeature {
            feature_type: feature_type.into(),
            width_m,
        });
        self
    }

    /// Key used to group this wall into a room.
    #[must_use]
    pub fn room_key(&self) -> RoomKey<'_> {
        match &self.room_id {
            Some(id) => RoomKey::Id(id),
            None => RoomKey::Label(&self.room_type),
        }
    }
}
