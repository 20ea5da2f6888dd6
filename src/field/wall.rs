//! Wall descriptors: the protocol-shaped quadruple and the typed segment.

use std::fmt;

use super::error::GeometryError;
use super::span::Span;
use super::types::Point;

/// A wall as exchanged with the game server: two endpoints `(x1, y1)`, `(x2, y2)`.
///
/// The server expects `x1 = x2` for a vertical wall and `y1 = y2` for a
/// horizontal one, with the second endpoint not below the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Wall {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns both endpoints.
    pub const fn endpoints(&self) -> (Point, Point) {
        (Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
    }

    /// Classifies this wall into a typed [`WallSegment`].
    pub fn to_segment(&self) -> Result<WallSegment, GeometryError> {
        let (a, b) = self.endpoints();
        WallSegment::from_endpoints(a, b)
    }

    /// Coordinates in wire order `[x1, y1, x2, y2]`.
    pub const fn as_array(&self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x1, self.y1, self.x2, self.y2)
    }
}

/// An axis-aligned wall segment.
///
/// Both variants keep their span ordered (`y1 <= y2`, `x1 <= x2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallSegment {
    /// Wall along column `x`, covering rows `y1..=y2`.
    Vertical { x: i32, y1: i32, y2: i32 },
    /// Wall along row `y`, covering columns `x1..=x2`.
    Horizontal { y: i32, x1: i32, x2: i32 },
}

impl WallSegment {
    /// Classifies two raw endpoints into a segment.
    ///
    /// Endpoints sharing an x coordinate give a vertical wall; any other
    /// pair gives a horizontal wall on the first endpoint's row. Endpoints
    /// may arrive in either order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateSegment`] if the endpoints coincide.
    pub fn from_endpoints(a: Point, b: Point) -> Result<Self, GeometryError> {
        if a == b {
            return Err(GeometryError::DegenerateSegment { x: a.x, y: a.y });
        }
        if a.x == b.x {
            Ok(Self::vertical(a.x, Span::ordered(a.y, b.y)))
        } else {
            Ok(Self::horizontal(a.y, Span::ordered(a.x, b.x)))
        }
    }

    /// Vertical wall on column `x` spanning `rows`.
    pub const fn vertical(x: i32, rows: Span) -> Self {
        Self::Vertical {
            x,
            y1: rows.lo(),
            y2: rows.hi(),
        }
    }

    /// Horizontal wall on row `y` spanning `columns`.
    pub const fn horizontal(y: i32, columns: Span) -> Self {
        Self::Horizontal {
            y,
            x1: columns.lo(),
            x2: columns.hi(),
        }
    }

    pub const fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical { .. })
    }

    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal { .. })
    }

    /// The coordinate shared by every cell of the wall (`x` for vertical, `y` for horizontal).
    pub const fn fixed_coordinate(&self) -> i32 {
        match *self {
            Self::Vertical { x, .. } => x,
            Self::Horizontal { y, .. } => y,
        }
    }

    /// The cells covered along the wall's own axis.
    pub const fn span(&self) -> Span {
        match *self {
            Self::Vertical { y1, y2, .. } => Span::new(y1, y2),
            Self::Horizontal { x1, x2, .. } => Span::new(x1, x2),
        }
    }

    /// Returns true if the wall covers `point`.
    pub const fn contains(&self, point: Point) -> bool {
        match *self {
            Self::Vertical { x, y1, y2 } => point.x == x && y1 <= point.y && point.y <= y2,
            Self::Horizontal { y, x1, x2 } => point.y == y && x1 <= point.x && point.x <= x2,
        }
    }

    /// Rebuilds the protocol descriptor for this segment.
    pub const fn to_wall(&self) -> Wall {
        match *self {
            Self::Vertical { x, y1, y2 } => Wall::new(x, y1, x, y2),
            Self::Horizontal { y, x1, x2 } => Wall::new(x1, y, x2, y),
        }
    }
}

impl TryFrom<Wall> for WallSegment {
    type Error = GeometryError;

    fn try_from(wall: Wall) -> Result<Self, Self::Error> {
        wall.to_segment()
    }
}

impl From<WallSegment> for Wall {
    fn from(segment: WallSegment) -> Self {
        segment.to_wall()
    }
}

impl fmt::Display for WallSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical { x, y1, y2 } => write!(f, "vertical x={} y=[{}, {}]", x, y1, y2),
            Self::Horizontal { y, x1, x2 } => write!(f, "horizontal y={} x=[{}, {}]", y, x1, x2),
        }
    }
}
