use thiserror::Error;

/// Errors raised while building field geometry from raw coordinates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Degenerate wall at ({x}, {y}): both endpoints coincide")]
    DegenerateSegment { x: i32, y: i32 },
}
