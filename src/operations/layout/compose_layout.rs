use crate::config::LayoutConfig;
use crate::error::{LayoutError, MeasurementError, Result};
use crate::geometry::Room;
use crate::operations::resolve::ResolveVertices;
use crate::survey::WallMeasurement;

use super::group::{group_walls, RoomGroup};

/// Groups a survey's walls into rooms and packs them onto one canvas.
///
/// # Algorithm
///
/// 1. Group walls by room key, in first-seen order.
/// 2. Resolve each group into a local polygon.
/// 3. Lay rooms out left to right: each room is shifted along x by a running
///    offset, which then advances by the room's unshifted x-extent plus
///    `room_gap_units`. The y coordinates are left unchanged.
#[derive(Debug)]
pub struct ComposeLayout<'a> {
    walls: &'a [WallMeasurement],
    config: &'a LayoutConfig,
}

impl<'a> ComposeLayout<'a> {
    /// Creates a new layout operation over a whole survey.
    #[must_use]
    pub fn new(walls: &'a [WallMeasurement], config: &'a LayoutConfig) -> Self {
        Self { walls, config }
    }

    /// Executes grouping, resolution and packing.
    ///
    /// # Errors
    ///
    /// - `LayoutError::EmptySurvey` if there are no walls (nothing is resolved)
    /// - `LayoutError::GeometricProcessingFailure` naming the room whose
    ///   walls could not be resolved
    pub fn execute(&self) -> Result<Vec<Room>> {
        if self.walls.is_empty() {
            return Err(LayoutError::EmptySurvey.into());
        }

        let groups = group_walls(self.walls);
        let mut rooms = Vec::with_capacity(groups.len());
        let mut offset = 0.0;

        for group in groups {
            let room = resolve_group(group)?;
            let (min_x, max_x) = room.x_extent().unwrap_or((0.0, 0.0));
            let placed = room.shifted_x(offset);
            tracing::debug!(room = %placed.name, offset, width = max_x - min_x, "placed room");
            offset += self.config.room_gap_units + (max_x - min_x);
            rooms.push(placed);
        }

        Ok(rooms)
    }
}

fn resolve_group(group: RoomGroup<'_>) -> std::result::Result<Room, LayoutError> {
    if group.walls.is_empty() {
        return Err(LayoutError::GeometricProcessingFailure {
            room: group.name,
            source: MeasurementError::EmptyWalls,
        });
    }
    match ResolveVertices::new(&group.walls).execute() {
        Ok(vertices) => Ok(Room::new(group.name, group.walls, vertices)),
        Err(source) => Err(LayoutError::GeometricProcessingFailure {
            room: group.name,
            source,
        }),
    }
}
