use std::collections::HashMap;

use crate::survey::{RoomKey, WallMeasurement};

/// Walls of one room, in survey order.
#[derive(Debug, Clone)]
pub struct RoomGroup<'a> {
    /// Grouping key: `room_id` when supplied, otherwise `room_type`.
    pub key: RoomKey<'a>,
    /// Display label, taken from the first wall's `room_type`.
    pub name: String,
    pub walls: Vec<WallMeasurement>,
}

/// Partitions a flat survey into rooms, ordered by first appearance.
///
/// Walls sharing a key are merged even when they are not contiguous. For
/// label-keyed walls that usually means two physical rooms share a type
/// label; this is logged but not resolved here.
#[must_use]
pub fn group_walls(walls: &[WallMeasurement]) -> Vec<RoomGroup<'_>> {
    let mut groups: Vec<RoomGroup<'_>> = Vec::new();
    let mut index_of: HashMap<RoomKey<'_>, usize> = HashMap::new();
    let mut previous: Option<RoomKey<'_>> = None;

    for wall in walls {
        let key = wall.room_key();
        if let Some(&idx) = index_of.get(&key) {
            if let RoomKey::Label(label) = key {
                if previous != Some(key) {
                    tracing::warn!(
                        room_type = %label,
                        "room type reappears non-contiguously; merging walls into one room"
                    );
                }
            }
            groups[idx].walls.push(wall.clone());
        } else {
            index_of.insert(key, groups.len());
            groups.push(RoomGroup {
                key,
                name: wall.room_type.clone(),
                walls: vec![wall.clone()],
            });
        }
        previous = Some(key);
    }

    groups
}
