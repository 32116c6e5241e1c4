#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use floorplan::math::Point2;
use floorplan::operations::resolve::closure_residual;
use floorplan::{
    parse_walls, BlueprintConfig, ComposeLayout, FloorplanError, GenerateBlueprint, LayoutConfig,
    LayoutError, MeasurementError, RenderBlueprint, RenderConfig, RenderError, ResolveVertices,
    Room, WallMeasurement,
};

fn rect(room: &str, w: f64, h: f64) -> Vec<WallMeasurement> {
    [(w, 0.0), (h, 90.0), (w, 90.0), (h, 90.0)]
        .iter()
        .map(|&(l, a)| WallMeasurement::new(room, l, a, 3.0))
        .collect()
}

fn full_house() -> Vec<WallMeasurement> {
    let mut walls = rect("Living Room", 5.0, 4.0);
    walls.extend(rect("Kitchen", 3.0, 3.0));
    walls
}

#[test]
fn rectangle_survey_resolves_and_annotates_closing_wall() {
    let walls = rect("Living Room", 5.0, 4.0);
    let vertices = ResolveVertices::new(&walls).execute().unwrap();
    let expected = [(0.0, 0.0), (5.0, 0.0), (5.0, 4.0), (0.0, 4.0)];
    for (v, (x, y)) in vertices.iter().zip(expected) {
        assert_abs_diff_eq!(v.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(v.y, y, epsilon = 1e-9);
    }

    let bp = GenerateBlueprint::new(&walls, &BlueprintConfig::default())
        .execute()
        .unwrap();
    // Closing wall (0,4) -> (0,0), labelled with its measured length.
    assert!(bp.svg_data.contains("<line x1=\"25\" y1=\"400\" x2=\"25\" y2=\"0\""));
    assert_eq!(bp.svg_data.matches(">4.00m</text>").count(), 2);
    assert_eq!(bp.svg_data.matches(">5.00m</text>").count(), 2);
}

#[test]
fn rectilinear_rooms_close() {
    let rooms = [
        rect("A", 5.0, 4.0),
        rect("B", 2.5, 7.25),
        (0..4)
            .map(|_| WallMeasurement::new("C", 3.0, 90.0, 3.0))
            .collect(),
        (0..4)
            .map(|_| WallMeasurement::new("D", 3.0, -90.0, 3.0))
            .collect(),
    ];
    for walls in &rooms {
        assert_abs_diff_eq!(closure_residual(walls).norm(), 0.0, epsilon = 1e-3);
    }
}

#[test]
fn pipeline_is_deterministic() {
    let walls = full_house();
    let config = BlueprintConfig::default();
    let first = GenerateBlueprint::new(&walls, &config).execute().unwrap();
    let second = GenerateBlueprint::new(&walls, &config).execute().unwrap();
    assert_eq!(first.svg_data, second.svg_data);
    assert_eq!(first, second);
}

#[test]
fn composed_rooms_do_not_overlap() {
    let mut walls = full_house();
    walls.extend(rect("Bath", 2.0, 2.0));
    walls.extend(rect("Study", 4.5, 3.0));
    let config = LayoutConfig::default();
    let rooms = ComposeLayout::new(&walls, &config).execute().unwrap();
    assert_eq!(rooms.len(), 4);
    for pair in rooms.windows(2) {
        let (_, prev_max) = pair[0].x_extent().unwrap();
        let (next_min, _) = pair[1].x_extent().unwrap();
        assert!(next_min >= prev_max + config.room_gap_units - 1e-9);
    }
}

#[test]
fn non_numeric_length_is_reported_with_index() {
    let json = r#"[
        {"room_type": "Hall", "length_m": 5, "angle_deg": 0, "height_m": 3},
        {"room_type": "Hall", "length_m": 4, "angle_deg": 90, "height_m": 3},
        {"room_type": "Hall", "length_m": "abc", "angle_deg": 90, "height_m": 3},
        {"room_type": "Hall", "length_m": 4, "angle_deg": 90, "height_m": 3}
    ]"#;
    match parse_walls(json).unwrap_err() {
        FloorplanError::Measurement(err) => assert_eq!(err.wall_index(), Some(2)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_survey_fails_before_resolution() {
    let err = GenerateBlueprint::new(&[], &BlueprintConfig::default())
        .execute()
        .unwrap_err();
    assert!(matches!(err, FloorplanError::Layout(LayoutError::EmptySurvey)));
}

#[test]
fn invalid_wall_surfaces_room_and_index() {
    let mut walls = full_house();
    walls[6].length_m = -1.0;
    let err = GenerateBlueprint::new(&walls, &BlueprintConfig::default())
        .execute()
        .unwrap_err();
    match err {
        FloorplanError::Layout(LayoutError::GeometricProcessingFailure { room, source }) => {
            assert_eq!(room, "Kitchen");
            assert!(matches!(
                source,
                MeasurementError::InvalidMeasurement {
                    index: 2,
                    field: "length_m",
                    ..
                }
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn huge_walls_fail_instead_of_drawing_nan() {
    let walls: Vec<WallMeasurement> = [0.0, 90.0, 90.0, 90.0]
        .iter()
        .map(|&angle| WallMeasurement::new("Hangar", 1e307, angle, 3.0))
        .collect();
    let err = GenerateBlueprint::new(&walls, &BlueprintConfig::default())
        .execute()
        .unwrap_err();
    match err {
        FloorplanError::Render(RenderError::MalformedRoomData { room, .. }) => {
            assert_eq!(room, "Hangar");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn identified_room_stays_apart_from_matching_label() {
    let mut walls: Vec<WallMeasurement> = rect("Bedroom", 4.0, 3.0)
        .into_iter()
        .map(|w| w.with_room_id("Kitchen"))
        .collect();
    walls.extend(rect("Kitchen", 3.0, 3.0));
    let rooms = ComposeLayout::new(&walls, &LayoutConfig::default())
        .execute()
        .unwrap();
    let names: Vec<&str> = rooms.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Bedroom", "Kitchen"]);
    assert!(rooms.iter().all(|r| r.walls.len() == 4));
}

#[test]
fn zero_length_wall_is_skipped_by_renderer() {
    let mut walls = rect("Hall", 5.0, 4.0);
    walls.push(WallMeasurement::new("Hall", 0.0, 0.0, 3.0));
    let mut vertices = ResolveVertices::new(&walls[..4]).execute().unwrap();
    // The fourth wall brings the walk back to the origin; the extra wall
    // starts and ends there.
    vertices.push(Point2::origin());
    let rooms = vec![Room::new("Hall", walls, vertices)];

    let drawing = RenderBlueprint::new(&rooms, &RenderConfig::default())
        .execute()
        .unwrap();
    assert!(!drawing.svg.contains("NaN"));
    assert_eq!(drawing.svg.matches("<line ").count(), 4);
    assert!(!drawing.svg.contains(">0.00m</text>"));
}

#[test]
fn surveys_can_be_processed_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let walls = rect("Room", 3.0 + f64::from(i), 4.0);
                GenerateBlueprint::new(&walls, &BlueprintConfig::default())
                    .execute()
                    .map(|bp| bp.svg_data.len())
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().unwrap() > 0);
    }
}
