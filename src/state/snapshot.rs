//! Per-tick game snapshots and per-game configuration, as delivered by the server.

use std::fmt;

use crate::field::{Point, Velocity, Wall};

/// Which side this client plays in the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Hunter,
    Prey,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Hunter => write!(f, "hunter"),
            Role::Prey => write!(f, "prey"),
        }
    }
}

/// Per-game rules announced by the server before the first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// (N) Minimum ticks between two hunter wall placements.
    pub next_wall_interval: u32,
    /// (M) Maximum number of walls the hunter may hold at once.
    pub max_walls: usize,
}

impl GameConfig {
    pub fn new(next_wall_interval: u32, max_walls: usize) -> Self {
        Self {
            next_wall_interval,
            max_walls,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            next_wall_interval: 10,
            max_walls: 5,
        }
    }
}

/// Immutable view of the game at one tick.
///
/// # Wall ordering
///
/// `walls` is kept in the order the server reported them, which is the
/// order they were created. Observation slots and removal indices both
/// refer to positions in this list, so the transport must pass the list
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    /// Current game tick.
    pub tick: u32,
    pub hunter_position: Point,
    pub hunter_velocity: Velocity,
    /// Tick at which the hunter last built a wall (`None` if it never has).
    pub hunter_last_wall: Option<u32>,
    pub prey_position: Point,
    /// Prey velocity; only applied on odd ticks.
    pub prey_velocity: Velocity,
    /// Walls in server order.
    pub walls: Vec<Wall>,
}

impl GameSnapshot {
    /// Snapshot at tick 0 with both players still and no walls.
    pub fn new(hunter_position: Point, prey_position: Point) -> Self {
        Self {
            tick: 0,
            hunter_position,
            hunter_velocity: Velocity::default(),
            hunter_last_wall: None,
            prey_position,
            prey_velocity: Velocity::default(),
            walls: Vec::new(),
        }
    }
}
