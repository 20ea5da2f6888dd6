//! Field geometry: grid points, velocities, walls and wall-bounding.

pub mod bounding;
pub mod error;
pub mod span;
pub mod types;
pub mod wall;

pub use bounding::{bound_wall, free_span, BoundingMode};
pub use error::GeometryError;
pub use span::Span;
pub use types::{Arena, Point, Velocity, MAX_HEIGHT, MAX_WIDTH};
pub use wall::{Wall, WallSegment};
