use crate::math::polygon_2d::{signed_area_2d, x_extent, Bounds2};
use crate::math::Point2;
use crate::survey::WallMeasurement;

/// A resolved room: its measured walls and one vertex per wall start.
///
/// `vertices[i]` is where wall `i` begins. The last wall runs from the last
/// vertex back toward `vertices[0]`; that closing edge is implied, never
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Display label (the walls' `room_type`).
    pub name: String,
    pub walls: Vec<WallMeasurement>,
    /// Polygon vertices in meters.
    pub vertices: Vec<Point2>,
}

impl Room {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        walls: Vec<WallMeasurement>,
        vertices: Vec<Point2>,
    ) -> Self {
        Self {
            name: name.into(),
            walls,
            vertices,
        }
    }

    /// Sum of the measured wall lengths.
    #[must_use]
    pub fn perimeter_m(&self) -> f64 {
        self.walls.iter().map(|w| w.length_m).sum()
    }

    /// Enclosed floor area of the vertex polygon.
    #[must_use]
    pub fn floor_area_m2(&self) -> f64 {
        signed_area_2d(&self.vertices).abs()
    }

    /// `(min_x, max_x)` of the vertices, or `None` for an empty room.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        x_extent(&self.vertices)
    }

    /// Bounding rectangle of the vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::from_points(&self.vertices)
    }

    /// Returns a copy shifted along x.
    #[must_use]
    pub fn shifted_x(&self, dx: f64) -> Self {
        Self {
            name: self.name.clone(),
            walls: self.walls.clone(),
            vertices: self
                .vertices
                .iter()
                .map(|v| Point2::new(v.x + dx, v.y))
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn living_room() -> Room {
        let walls = [5.0, 4.0, 5.0, 4.0]
            .iter()
            .map(|&l| WallMeasurement::new("Living Room", l, 90.0, 2.8))
            .collect();
        let vertices = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        Room::new("Living Room", walls, vertices)
    }

    #[test]
    fn perimeter_and_area() {
        let room = living_room();
        assert_relative_eq!(room.perimeter_m(), 18.0);
        assert_relative_eq!(room.floor_area_m2(), 20.0);
    }

    #[test]
    fn shift_moves_only_x() {
        let room = living_room().shifted_x(11.0);
        assert_eq!(room.x_extent(), Some((11.0, 16.0)));
        let b = room.bounds().unwrap();
        assert_relative_eq!(b.min.y, 0.0);
        assert_relative_eq!(b.max.y, 4.0);
        assert_eq!(room.walls.len(), 4);
    }
}
