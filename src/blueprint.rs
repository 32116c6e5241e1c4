//! The generated drawing as handed to the persistence layer.

use serde::{Deserialize, Serialize};

use crate::math::polygon_2d::Bounds2;

/// Review state of a generated blueprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlueprintStatus {
    /// Freshly generated, not yet looked at.
    #[default]
    Pending,
    /// Regenerated from a reprocessed survey; needs another review.
    #[serde(rename = "Review Needed")]
    ReviewNeeded,
    Approved,
}

/// Drawing size in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl From<&Bounds2> for Dimensions {
    fn from(bounds: &Bounds2) -> Self {
        Self {
            width: bounds.width(),
            height: bounds.height(),
        }
    }
}

/// One survey's rendered floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub svg_data: String,
    pub status: BlueprintStatus,
    pub dimensions: Dimensions,
}

impl Blueprint {
    /// Creates a pending blueprint.
    #[must_use]
    pub fn new(svg_data: String, dimensions: Dimensions) -> Self {
        Self {
            svg_data,
            status: BlueprintStatus::Pending,
            dimensions,
        }
    }

    /// Overwrites the drawing after the survey was reprocessed.
    ///
    /// Any previous review outcome is discarded.
    pub fn regenerate(&mut self, svg_data: String, dimensions: Dimensions) {
        self.svg_data = svg_data;
        self.dimensions = dimensions;
        self.status = BlueprintStatus::ReviewNeeded;
    }

    /// Marks the blueprint as approved.
    pub fn approve(&mut self) {
        self.status = BlueprintStatus::Approved;
    }
}
