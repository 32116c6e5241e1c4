use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::Point2;

use super::svg::num;

/// Vertical nudge applied to the length label so it clears the line.
const LABEL_LIFT: f64 = 5.0;
const MARKER_RADIUS: f64 = 2.0;
const DIMENSION_COLOR: &str = "blue";
const DIMENSION_FONT_SIZE: u32 = 12;

/// A dashed dimension line drawn parallel to a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLine {
    pub start: Point2,
    pub end: Point2,
    /// Measured wall length shown on the label.
    pub length_m: f64,
}

impl DimensionLine {
    /// Builds the dimension line for a wall from `v1` to `v2` (drawing units).
    ///
    /// Both endpoints are pushed `offset` units along the wall's left normal.
    /// Returns `None` for a zero-length wall, whose normal is undefined.
    #[must_use]
    pub fn for_wall(v1: Point2, v2: Point2, length_m: f64, offset: f64) -> Option<Self> {
        let normal = left_normal(segment_direction(&v1, &v2)?);
        Some(Self {
            start: v1 + normal * offset,
            end: v2 + normal * offset,
            length_m,
        })
    }

    /// Label anchor: the line's midpoint, lifted slightly.
    #[must_use]
    pub fn label_anchor(&self) -> Point2 {
        let mid = self.start + (self.end - self.start) * 0.5;
        Point2::new(mid.x, mid.y - LABEL_LIFT)
    }

    /// Length label text, e.g. `4.00m`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.2}m", self.length_m)
    }

    /// Serializes the line, its end markers and its label.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let (x1, y1) = (num(self.start.x), num(self.start.y));
        let (x2, y2) = (num(self.end.x), num(self.end.y));
        let anchor = self.label_anchor();
        let mut out = String::new();
        out.push_str(&format!(
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{DIMENSION_COLOR}\" stroke-width=\"1\" stroke-dasharray=\"4\"/>\n"
        ));
        for (cx, cy) in [(&x1, &y1), (&x2, &y2)] {
            out.push_str(&format!(
                "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{}\" fill=\"{DIMENSION_COLOR}\"/>\n",
                num(MARKER_RADIUS)
            ));
        }
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{DIMENSION_FONT_SIZE}\" fill=\"{DIMENSION_COLOR}\" text-anchor=\"middle\">{}</text>\n",
            num(anchor.x),
            num(anchor.y),
            self.label()
        ));
        out
    }
}
