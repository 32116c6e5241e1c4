pub mod polygon_2d;

/// 2D point type. Room vertices are stored in meters.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Number of decimal places kept on stored vertices.
pub const VERTEX_DECIMALS: i32 = 4;

/// Rounds `value` to `decimals` places (half away from zero).
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // Avoid storing -0.0 for values that round to zero from below.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Returns the unit vector for a heading in radians.
#[must_use]
pub fn heading_vector(heading: f64) -> Vector2 {
    Vector2::new(heading.cos(), heading.sin())
}
