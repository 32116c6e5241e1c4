//! Small helpers for writing SVG markup.

use crate::math::Point2;

/// Formats a drawing coordinate with at most two decimals.
///
/// Trailing zeros are trimmed and negative zero is written as `0`, so equal
/// geometry always produces identical markup.
#[must_use]
pub fn num(value: f64) -> String {
    let mut s = format!("{value:.2}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Escapes text for use in element content and attribute values.
#[must_use]
pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Builds a closed path (`M .. L .. Z`) through `points`.
#[must_use]
pub fn closed_path_data(points: &[Point2]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        d.push_str(&format!("{cmd} {} {}", num(p.x), num(p.y)));
    }
    if !points.is_empty() {
        d.push_str(" Z");
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_trims_and_normalizes() {
        assert_eq!(num(500.0), "500");
        assert_eq!(num(412.5), "412.5");
        assert_eq!(num(12.340_000_000_000_002), "12.34");
        assert_eq!(num(-0.000_1), "0");
        assert_eq!(num(-25.0), "-25");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_xml("Kid's <Room> & \"Den\""),
            "Kid&apos;s &lt;Room&gt; &amp; &quot;Den&quot;"
        );
    }

    #[test]
    fn closed_path() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(500.0, 0.0),
            Point2::new(500.0, 400.0),
        ];
        assert_eq!(closed_path_data(&pts), "M 0 0 L 500 0 L 500 400 Z");
        assert_eq!(closed_path_data(&[]), "");
    }
}
