use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::geometry::Room;
use crate::math::polygon_2d::Bounds2;
use crate::math::{Point2, Vector2};

use super::dimension::DimensionLine;
use super::svg::{closed_path_data, escape_xml, num};
use super::{out_of_range, to_drawing_units};

const ROOM_STROKE_WIDTH: u32 = 3;
const ROOM_LABEL_FONT_SIZE: u32 = 30;

/// A rendered drawing and the viewBox it was sized to.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub svg: String,
    pub view_box: Bounds2,
}

/// Serializes composed rooms into one annotated SVG document.
///
/// Room outlines and labels are written first, then one dimension line per
/// wall. Wall `i` of a room runs from `vertices[i]` to `vertices[(i + 1) % n]`
/// and is labelled with its measured `length_m`, which for the closing wall
/// may differ from the drawn distance. Zero-length walls are drawn but get no
/// dimension line.
#[derive(Debug)]
pub struct RenderBlueprint<'a> {
    rooms: &'a [Room],
    config: &'a RenderConfig,
}

impl<'a> RenderBlueprint<'a> {
    /// Creates a new render operation.
    #[must_use]
    pub fn new(rooms: &'a [Room], config: &'a RenderConfig) -> Self {
        Self { rooms, config }
    }

    /// Executes the render.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MalformedRoomData` naming the first room that has
    /// no vertices, no walls, or a vertex count different from its wall count,
    /// or whose coordinates do not fit a finite drawing.
    pub fn execute(&self) -> Result<Drawing> {
        let mut scaled = Vec::with_capacity(self.rooms.len());
        let mut extent: Option<Bounds2> = None;
        for room in self.rooms {
            check_room(room)?;
            let (points, bounds) = to_drawing_units(room, self.config.units_per_meter)?;
            let merged = extent.map_or(bounds, |e| e.union(bounds));
            if !merged.expanded(self.config.margin_units).is_finite() {
                return Err(out_of_range(room).into());
            }
            extent = Some(merged);
            scaled.push(points);
        }

        let view_box = extent
            .unwrap_or(Bounds2 {
                min: Point2::origin(),
                max: Point2::origin(),
            })
            .expanded(self.config.margin_units);

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n",
            num(view_box.min.x),
            num(view_box.min.y),
            num(view_box.width()),
            num(view_box.height()),
            num(view_box.width()),
            num(view_box.height()),
        ));
        if self.config.show_grid {
            svg.push_str(&self.grid(&view_box));
        }

        for (index, (room, points)) in self.rooms.iter().zip(&scaled).enumerate() {
            svg.push_str(&self.room_group(index, room, points));
        }

        let mut annotated = 0usize;
        let mut skipped = 0usize;
        svg.push_str("<g class=\"dimensions\">\n");
        for (room, points) in self.rooms.iter().zip(&scaled) {
            let n = points.len();
            for (i, wall) in room.walls.iter().enumerate() {
                let (v1, v2) = (points[i], points[(i + 1) % n]);
                let offset = self.config.annotation_offset_units;
                match DimensionLine::for_wall(v1, v2, wall.length_m, offset) {
                    Some(line) => {
                        svg.push_str(&line.to_svg());
                        annotated += 1;
                    }
                    None => {
                        tracing::debug!(
                            room = %room.name,
                            wall = i,
                            "skipping dimension for zero-length wall"
                        );
                        skipped += 1;
                    }
                }
            }
        }
        svg.push_str("</g>\n</svg>\n");

        tracing::debug!(
            rooms = self.rooms.len(),
            annotated,
            skipped,
            width = view_box.width(),
            height = view_box.height(),
            "rendered blueprint"
        );

        Ok(Drawing { svg, view_box })
    }

    fn grid(&self, view_box: &Bounds2) -> String {
        let g = num(self.config.grid_size_units);
        format!(
            "<defs>\n\
             <pattern id=\"grid\" width=\"{g}\" height=\"{g}\" patternUnits=\"userSpaceOnUse\">\n\
             <path d=\"M {g} 0 L 0 0 0 {g}\" fill=\"none\" stroke=\"gray\" stroke-width=\"0.5\" opacity=\"0.2\"/>\n\
             </pattern>\n\
             </defs>\n\
             <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"url(#grid)\"/>\n",
            num(view_box.min.x),
            num(view_box.min.y),
            num(view_box.width()),
            num(view_box.height()),
        )
    }

    fn room_group(&self, index: usize, room: &Room, points: &[Point2]) -> String {
        let name = escape_xml(&room.name);
        let fill = self
            .config
            .fill_for(index)
            .map_or_else(|| "none".to_owned(), escape_xml);
        let label_at = points[0] + Vector2::repeat(self.config.label_offset_units);
        format!(
            "<g id=\"room-{index}\" data-room=\"{name}\">\n\
             <path d=\"{}\" fill=\"{fill}\" stroke=\"black\" stroke-width=\"{ROOM_STROKE_WIDTH}\"/>\n\
             <text x=\"{}\" y=\"{}\" font-size=\"{ROOM_LABEL_FONT_SIZE}\" font-family=\"serif\" fill=\"black\">{name}</text>\n\
             </g>\n",
            closed_path_data(points),
            num(label_at.x),
            num(label_at.y),
        )
    }
}

pub(super) fn check_room(room: &Room) -> std::result::Result<(), RenderError> {
    let reason = match (room.vertices.is_empty(), room.walls.is_empty()) {
        (true, true) => Some("room has neither vertices nor walls".to_owned()),
        (true, false) => Some("room has no vertices".to_owned()),
        (false, true) => Some("room has no walls".to_owned()),
        (false, false) if room.vertices.len() != room.walls.len() => Some(format!(
            "room has {} vertices for {} walls",
            room.vertices.len(),
            room.walls.len()
        )),
        (false, false) => None,
    };
    match reason {
        Some(reason) => Err(RenderError::MalformedRoomData {
            room: room.name.clone(),
            reason,
        }),
        None => Ok(()),
    }
}
