use crate::math::{heading_vector, Vector2};
use crate::survey::WallMeasurement;

/// Vector sum of every wall's displacement, including the final wall.
///
/// Zero for a perfectly closed survey. This is a diagnostic only; walls are
/// never adjusted to make it vanish.
#[must_use]
pub fn closure_residual(walls: &[WallMeasurement]) -> Vector2 {
    let mut heading = 0.0_f64;
    walls.iter().fold(Vector2::zeros(), |acc, wall| {
        heading += wall.angle_deg.to_radians();
        acc + heading_vector(heading) * wall.length_m
    })
}
