//! evasion_hunter - move-decision engine for the evasion pursuit game
//!
//! Turns per-tick game snapshots into hunter commands using a pluggable
//! policy over a fixed observation encoding, computes maximal wall
//! placements from the current obstacles, and answers for the prey role
//! with a fixed evasive table.

pub mod decision;
pub mod field;
pub mod protocol;
pub mod state;

pub use decision::{Action, EngineConfig, EngineError, HunterEngine, Player, Policy};
pub use field::{Arena, Point, Velocity, Wall, WallSegment};
pub use state::{GameConfig, GameSnapshot, Observation, Role};
