//! Floorplan demo: turns a two-room survey into an SVG blueprint.
//!
//! Usage:
//! ```text
//! cargo run --example full_house > house.svg
//! cargo run --example full_house -- survey.json > house.svg
//! RUST_LOG=floorplan=debug cargo run --example full_house
//! ```
//!
//! The SVG goes to stdout; a per-room summary goes to stderr.

use std::error::Error;

use floorplan::{parse_walls, BlueprintConfig, ComposeLayout, GenerateBlueprint, WallMeasurement};

fn sample_survey() -> Vec<WallMeasurement> {
    let rooms = [
        ("Living Room", [(5.0, 0.0), (4.0, 90.0), (5.0, 90.0), (4.0, 90.0)]),
        ("Kitchen", [(3.0, 0.0), (3.0, 90.0), (3.0, 90.0), (3.0, 90.0)]),
    ];
    let mut walls = Vec::new();
    for (room, measured) in rooms {
        for (length, angle) in measured {
            walls.push(WallMeasurement::new(room, length, angle, 2.7));
        }
    }
    walls
}

/// Reads the survey at `path`, or falls back to the sample when none is given.
fn load_survey(path: Option<&str>) -> Result<Vec<WallMeasurement>, Box<dyn Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|err| format!("cannot read survey {path}: {err}"))?;
            Ok(parse_walls(&json)?)
        }
        None => Ok(sample_survey()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for floorplan.
    // Override with RUST_LOG env var (e.g. RUST_LOG=floorplan=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("floorplan=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let walls = load_survey(std::env::args().nth(1).as_deref())?;
    let config = BlueprintConfig::default();

    for room in ComposeLayout::new(&walls, &config.layout).execute()? {
        eprintln!(
            "{:<12} walls={} perimeter={:.2}m area={:.2}m2",
            room.name,
            room.walls.len(),
            room.perimeter_m(),
            room.floor_area_m2(),
        );
    }

    let blueprint = GenerateBlueprint::new(&walls, &config).execute()?;
    eprintln!(
        "blueprint {:?}: {} x {} units",
        blueprint.status, blueprint.dimensions.width, blueprint.dimensions.height
    );
    println!("{}", blueprint.svg_data);
    Ok(())
}
