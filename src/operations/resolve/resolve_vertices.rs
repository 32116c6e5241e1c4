use crate::error::MeasurementError;
use crate::math::{heading_vector, round_to, Point2, VERTEX_DECIMALS};
use crate::survey::WallMeasurement;

use super::closure::closure_residual;

/// Resolves one room's ordered walls into polygon vertices (turtle walk).
///
/// # Algorithm
///
/// Starting at the origin facing +x, for each wall the heading is first
/// turned by `angle_deg`, then the wall's length is walked along the new
/// heading. The start of every wall is emitted as a vertex, so the first
/// wall's own angle already rotates the initial direction.
///
/// The last wall's endpoint is not emitted: the polygon is assumed to close
/// back to the origin, and that assumption is not checked.
///
/// Stored vertices are rounded to four decimals; the running heading and
/// position are not, so rounding does not compound across walls.
#[derive(Debug)]
pub struct ResolveVertices<'a> {
    walls: &'a [WallMeasurement],
}

impl<'a> ResolveVertices<'a> {
    /// Creates a new resolve operation over one room's walls.
    #[must_use]
    pub fn new(walls: &'a [WallMeasurement]) -> Self {
        Self { walls }
    }

    /// Executes the walk, returning one vertex per wall.
    ///
    /// # Errors
    ///
    /// - `MeasurementError::EmptyWalls` if there are no walls
    /// - `MeasurementError::InvalidMeasurement` naming the wall index if a
    ///   length is not finite and positive, an angle is not finite, or the
    ///   walk runs past the range of `f64`
    pub fn execute(&self) -> Result<Vec<Point2>, MeasurementError> {
        if self.walls.is_empty() {
            return Err(MeasurementError::EmptyWalls);
        }
        for (index, wall) in self.walls.iter().enumerate() {
            validate_wall(index, wall)?;
        }

        let last = self.walls.len() - 1;
        let mut vertices = Vec::with_capacity(self.walls.len());
        vertices.push(Point2::origin());

        let mut heading = 0.0_f64;
        let mut position = Point2::origin();
        for (index, wall) in self.walls.iter().enumerate() {
            heading += wall.angle_deg.to_radians();
            position += heading_vector(heading) * wall.length_m;
            if !(position.x.is_finite() && position.y.is_finite()) {
                return Err(MeasurementError::InvalidMeasurement {
                    index,
                    field: "length_m",
                    reason: format!(
                        "walks out of the representable range, got {}",
                        wall.length_m
                    ),
                });
            }
            if index < last {
                vertices.push(Point2::new(
                    round_to(position.x, VERTEX_DECIMALS),
                    round_to(position.y, VERTEX_DECIMALS),
                ));
            }
        }

        let residual = closure_residual(self.walls);
        tracing::debug!(
            walls = self.walls.len(),
            residual_x = residual.x,
            residual_y = residual.y,
            "resolved room vertices"
        );

        Ok(vertices)
    }
}

fn validate_wall(index: usize, wall: &WallMeasurement) -> Result<(), MeasurementError> {
    if !wall.length_m.is_finite() {
        return Err(MeasurementError::InvalidMeasurement {
            index,
            field: "length_m",
            reason: format!("must be a finite number, got {}", wall.length_m),
        });
    }
    if wall.length_m <= 0.0 {
        return Err(MeasurementError::InvalidMeasurement {
            index,
            field: "length_m",
            reason: format!("must be greater than zero, got {}", wall.length_m),
        });
    }
    if !wall.angle_deg.is_finite() {
        return Err(MeasurementError::InvalidMeasurement {
            index,
            field: "angle_deg",
            reason: format!("must be a finite number, got {}", wall.angle_deg),
        });
    }
    Ok(())
}
