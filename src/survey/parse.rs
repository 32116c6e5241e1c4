use serde::Deserialize;
use serde_json::Value;

use super::{WallFeature, WallMeasurement};
use crate::error::{MeasurementError, Result};

/// Wall record as submitted, before numeric fields are checked.
#[derive(Debug, Deserialize)]
struct RawWall {
    room_type: String,
    #[serde(default)]
    room_id: Option<String>,
    #[serde(default)]
    length_m: Option<Value>,
    #[serde(default)]
    angle_deg: Option<Value>,
    #[serde(default)]
    height_m: Option<Value>,
    #[serde(default)]
    features: Vec<WallFeature>,
}

/// Parses a JSON array of wall records.
///
/// # Errors
///
/// - `FloorplanError::Json` if the document is not an array of wall objects
/// - `MeasurementError::InvalidMeasurement` naming the survey-wide wall index
///   when `length_m`, `angle_deg` or `height_m` is missing or not a number
pub fn parse_walls(json: &str) -> Result<Vec<WallMeasurement>> {
    let raw: Vec<RawWall> = serde_json::from_str(json)?;
    let walls = raw
        .into_iter()
        .enumerate()
        .map(|(index, wall)| wall.into_measurement(index))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    tracing::debug!(walls = walls.len(), "parsed survey walls");
    Ok(walls)
}

impl RawWall {
    fn into_measurement(
        self,
        index: usize,
    ) -> std::result::Result<WallMeasurement, MeasurementError> {
        Ok(WallMeasurement {
            length_m: number_field(self.length_m.as_ref(), index, "length_m")?,
            angle_deg: number_field(self.angle_deg.as_ref(), index, "angle_deg")?,
            height_m: number_field(self.height_m.as_ref(), index, "height_m")?,
            room_type: self.room_type,
            room_id: self.room_id,
            features: self.features,
        })
    }
}

fn number_field(
    value: Option<&Value>,
    index: usize,
    field: &'static str,
) -> std::result::Result<f64, MeasurementError> {
    match value {
        Some(v) => v.as_f64().ok_or_else(|| MeasurementError::InvalidMeasurement {
            index,
            field,
            reason: format!("must be a number, got {v}"),
        }),
        None => Err(MeasurementError::InvalidMeasurement {
            index,
            field,
            reason: "is missing".to_owned(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FloorplanError;

    #[test]
    fn parses_walls_in_order() {
        let json = r#"[
            {"room_type": "Hall", "length_m": 5, "angle_deg": 90, "height_m": 3},
            {"room_type": "Hall", "room_id": "hall-1", "length_m": 4.5, "angle_deg": 90,
             "height_m": 3, "features": [{"feature_type": "Door", "width_m": 0.9}]}
        ]"#;
        let walls = parse_walls(json).unwrap();
        assert_eq!(walls.len(), 2);
        assert!((walls[0].length_m - 5.0).abs() < f64::EPSILON);
        assert_eq!(walls[1].room_id.as_deref(), Some("hall-1"));
        assert_eq!(walls[1].features[0].feature_type, "Door");
    }

    #[test]
    fn non_numeric_length_names_index() {
        let json = r#"[
            {"room_type": "Hall", "length_m": 5, "angle_deg": 0, "height_m": 3},
            {"room_type": "Hall", "length_m": 4, "angle_deg": 90, "height_m": 3},
            {"room_type": "Hall", "length_m": "abc", "angle_deg": 90, "height_m": 3}
        ]"#;
        let err = parse_walls(json).unwrap_err();
        match err {
            FloorplanError::Measurement(MeasurementError::InvalidMeasurement {
                index,
                field,
                ..
            }) => {
                assert_eq!(index, 2);
                assert_eq!(field, "length_m");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_angle_is_invalid() {
        let json = r#"[{"room_type": "Hall", "length_m": 5, "height_m": 3}]"#;
        let err = parse_walls(json).unwrap_err();
        assert!(err.to_string().contains("angle_deg is missing"));
    }

    #[test]
    fn non_array_document_is_json_error() {
        let err = parse_walls(r#"{"room_type": "Hall"}"#).unwrap_err();
        assert!(matches!(err, FloorplanError::Json(_)));
    }
}
