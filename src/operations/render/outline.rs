use crate::config::RenderConfig;
use crate::error::Result;
use crate::geometry::Room;

use super::render_blueprint::check_room;
use super::svg::{closed_path_data, escape_xml, num};
use super::{out_of_range, to_drawing_units};

/// Renders a single room as a bare outline labelled at its first vertex.
///
/// A lightweight preview: no fill, grid or dimension lines, and no layout
/// offset is applied beyond what the room's vertices already carry.
///
/// # Errors
///
/// Returns `RenderError::MalformedRoomData` if the room is incomplete or its
/// coordinates do not fit a finite drawing.
pub fn render_room_outline(room: &Room, config: &RenderConfig) -> Result<String> {
    check_room(room)?;
    let (points, bounds) = to_drawing_units(room, config.units_per_meter)?;
    let view_box = bounds.expanded(config.margin_units);
    if !view_box.is_finite() {
        return Err(out_of_range(room).into());
    }

    Ok(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n\
         <path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"2\"/>\n\
         <text x=\"{}\" y=\"{}\" font-size=\"20\">{}</text>\n\
         </svg>\n",
        num(view_box.min.x),
        num(view_box.min.y),
        num(view_box.width()),
        num(view_box.height()),
        closed_path_data(&points),
        num(points[0].x),
        num(points[0].y),
        escape_xml(&room.name),
    ))
}
