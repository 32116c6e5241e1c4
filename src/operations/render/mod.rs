mod dimension;
mod outline;
mod render_blueprint;
pub mod svg;

pub use dimension::DimensionLine;
pub use outline::render_room_outline;
pub use render_blueprint::{Drawing, RenderBlueprint};

use crate::error::RenderError;
use crate::geometry::Room;
use crate::math::polygon_2d::Bounds2;
use crate::math::Point2;

/// Scales a room's vertices from meters to drawing units.
///
/// Returns the scaled points with their bounds. Fails if the room has no
/// vertices or scaling leaves the finite range.
fn to_drawing_units(
    room: &Room,
    units_per_meter: f64,
) -> Result<(Vec<Point2>, Bounds2), RenderError> {
    let points: Vec<Point2> = room
        .vertices
        .iter()
        .map(|v| Point2::new(v.x * units_per_meter, v.y * units_per_meter))
        .collect();
    match Bounds2::from_points(&points) {
        Some(bounds) if bounds.is_finite() => Ok((points, bounds)),
        Some(_) => Err(out_of_range(room)),
        None => Err(RenderError::MalformedRoomData {
            room: room.name.clone(),
            reason: "room has no vertices".to_owned(),
        }),
    }
}

fn out_of_range(room: &Room) -> RenderError {
    RenderError::MalformedRoomData {
        room: room.name.clone(),
        reason: "coordinates exceed the drawable range".to_owned(),
    }
}
