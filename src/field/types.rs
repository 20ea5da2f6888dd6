//! Core grid types for the evasion field.
//!
//! Defines integer grid points, unit velocities, and the arena bounds
//! supplied by the game server.

use std::fmt;

/// Default arena width in distance units.
pub const MAX_WIDTH: i32 = 300;
/// Default arena height in distance units.
pub const MAX_HEIGHT: i32 = 300;

/// A single grid coordinate in the field `[0, W) × [0, H)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0).
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A velocity vector in distance units per tick.
///
/// Valid components are `-1`, `0` and `1`. The hunter applies its velocity
/// every tick; the prey only on odd ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

impl Velocity {
    /// Creates a velocity without validating its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a velocity by coercing each component to its sign.
    pub const fn coerced(x: i32, y: i32) -> Self {
        Self {
            x: x.signum(),
            y: y.signum(),
        }
    }

    /// Returns true if both components lie in `{-1, 0, 1}`.
    pub const fn is_unit(&self) -> bool {
        -1 <= self.x && self.x <= 1 && -1 <= self.y && self.y <= 1
    }

    /// Returns true for the stationary velocity `(0, 0)`.
    pub const fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

/// Arena bounds supplied by the game server.
///
/// Treated as configuration constants; valid coordinates are
/// `0..max_width` and `0..max_height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub max_width: i32,
    pub max_height: i32,
}

impl Arena {
    pub const fn new(max_width: i32, max_height: i32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Largest valid x coordinate.
    pub const fn last_x(&self) -> i32 {
        self.max_width - 1
    }

    /// Largest valid y coordinate.
    pub const fn last_y(&self) -> i32 {
        self.max_height - 1
    }

    /// Returns true if `point` lies inside the arena.
    pub const fn contains(&self, point: Point) -> bool {
        0 <= point.x && point.x < self.max_width && 0 <= point.y && point.y < self.max_height
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(MAX_WIDTH, MAX_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerced_velocity_uses_signum() {
        assert_eq!(Velocity::coerced(5, -3), Velocity::new(1, -1));
        assert_eq!(Velocity::coerced(0, 0), Velocity::new(0, 0));
    }

    #[test]
    fn unit_velocity_check() {
        assert!(Velocity::new(-1, 1).is_unit());
        assert!(Velocity::new(0, 0).is_unit());
        assert!(!Velocity::new(2, 0).is_unit());
        assert!(!Velocity::new(0, -2).is_unit());
    }

    #[test]
    fn arena_contains_is_half_open() {
        let arena = Arena::new(20, 10);
        assert!(arena.contains(Point::new(0, 0)));
        assert!(arena.contains(Point::new(19, 9)));
        assert!(!arena.contains(Point::new(20, 9)));
        assert!(!arena.contains(Point::new(-1, 0)));
    }

    #[test]
    fn default_arena_matches_server_constants() {
        let arena = Arena::default();
        assert_eq!(arena.last_x(), MAX_WIDTH - 1);
        assert_eq!(arena.last_y(), MAX_HEIGHT - 1);
    }
}
