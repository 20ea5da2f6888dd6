//! Commands the engine can ask the server to carry out.

use std::fmt;

use crate::field::{Velocity, WallSegment};

/// One move for the current tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Do nothing this tick.
    NoOp,
    /// Build a wall (hunter only).
    CreateWall(WallSegment),
    /// Remove existing walls (hunter only).
    RemoveWalls(Vec<WallSegment>),
    /// Change velocity (prey only).
    ChangeVelocity(Velocity),
}

impl Action {
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::NoOp)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::NoOp => write!(f, "no-op"),
            Action::CreateWall(segment) => write!(f, "create {}", segment),
            Action::RemoveWalls(segments) => write!(f, "remove {} wall(s)", segments.len()),
            Action::ChangeVelocity(v) => write!(f, "change velocity to {}", v),
        }
    }
}
