use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `(min_x, max_x)` over `points`, or `None` when empty.
#[must_use]
pub fn x_extent(points: &[Point2]) -> Option<(f64, f64)> {
    let first = points.first()?;
    Some(
        points
            .iter()
            .fold((first.x, first.x), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))),
    )
}

/// An axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Bounds2 {
    /// Bounds of a point set, or `None` when empty.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().skip(1).fold(
            Self {
                min: first,
                max: first,
            },
            |b, p| b.including(*p),
        ))
    }

    /// Returns these bounds grown to contain `p`.
    #[must_use]
    pub fn including(self, p: Point2) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Smallest bounds containing both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        self.including(other.min).including(other.max)
    }

    /// Returns these bounds grown by `margin` on every side.
    #[must_use]
    pub fn expanded(self, margin: f64) -> Self {
        Self {
            min: Point2::new(self.min.x - margin, self.min.y - margin),
            max: Point2::new(self.max.x + margin, self.max.y + margin),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// `true` if both corners and both side lengths are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.min.x, self.min.y, self.max.x, self.max.y]
            .into_iter()
            .all(f64::is_finite)
            && self.width().is_finite()
            && self.height().is_finite()
    }
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// Returns `None` if the segment has zero length, or a length too large to
/// represent.
#[must_use]
pub fn segment_direction(a: &Point2, b: &Point2) -> Option<Vector2> {
    let d = b - a;
    let len = d.norm();
    if !len.is_finite() || len < TOLERANCE {
        return None;
    }
    Some(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}
