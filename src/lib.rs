//! Survey-to-floor-plan pipeline.
//!
//! Wall measurements from an on-site survey are resolved into room polygons
//! ([`ResolveVertices`]), packed onto one canvas ([`ComposeLayout`]) and
//! written out as an annotated SVG drawing ([`RenderBlueprint`]).
//! [`GenerateBlueprint`] runs all three.

pub mod blueprint;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod survey;

pub use blueprint::{Blueprint, BlueprintStatus, Dimensions};
pub use config::{BlueprintConfig, LayoutConfig, RenderConfig};
pub use error::{FloorplanError, LayoutError, MeasurementError, RenderError, Result};
pub use geometry::Room;
pub use operations::{
    render_room_outline, ComposeLayout, GenerateBlueprint, RenderBlueprint, ResolveVertices,
};
pub use survey::{parse_walls, RoomKey, WallFeature, WallMeasurement};
