use thiserror::Error;

/// Top-level error type for the floor-plan pipeline.
#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error(transparent)]
    Measurement(#[from] MeasurementError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("malformed input document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while validating wall measurements.
///
/// Both variants report an invalid measurement: `EmptyWalls` when the wall
/// list as a whole is unusable, `InvalidMeasurement` when a single wall is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    /// The wall list is empty; there is no wall to blame.
    #[error("invalid measurement: wall list is empty")]
    EmptyWalls,

    /// Wall `index` carries an unusable `field`.
    #[error("invalid measurement at wall {index}: {field} {reason}")]
    InvalidMeasurement {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

impl MeasurementError {
    /// Returns the offending wall index.
    ///
    /// `None` for `EmptyWalls`: the failure belongs to the list itself, not
    /// to any one wall.
    #[must_use]
    pub fn wall_index(&self) -> Option<usize> {
        match self {
            Self::EmptyWalls => None,
            Self::InvalidMeasurement { index, .. } => Some(*index),
        }
    }
}

/// Errors raised while grouping and packing rooms.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("survey contains no wall measurements")]
    EmptySurvey,

    #[error("geometric processing failed for room '{room}': {source}")]
    GeometricProcessingFailure {
        room: String,
        #[source]
        source: MeasurementError,
    },
}

/// Errors raised while serializing rooms to a drawing.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("malformed room data for '{room}': {reason}")]
    MalformedRoomData { room: String, reason: String },
}

/// Convenience type alias for results using [`FloorplanError`].
pub type Result<T> = std::result::Result<T, FloorplanError>;
