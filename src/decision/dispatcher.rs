//! Maps policy action indices to concrete commands.

use super::action::Action;
use super::config::EngineConfig;
use crate::field::{bound_wall, BoundingMode};
use crate::state::InternalState;

/// Action index for "do nothing".
pub const NOOP: usize = 0;
/// Action index for a horizontal wall bounded by vertical walls.
pub const WALL_ACROSS_ROW: usize = 1;
/// Action index for a vertical wall bounded by horizontal walls.
pub const WALL_ACROSS_COLUMN: usize = 2;
/// First removal index; `REMOVE_BASE + i` removes wall slot `i`.
pub const REMOVE_BASE: usize = 3;

/// Stateless translation from action index to [`Action`].
///
/// Any index that cannot be turned into a valid command becomes
/// [`Action::NoOp`]; this never fails.
#[derive(Debug, Clone)]
pub struct ActionDispatcher {
    config: EngineConfig,
}

impl ActionDispatcher {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Converts `index` into a command for `state`.
    ///
    /// - `0`: no-op
    /// - `1`: maximal horizontal wall through the hunter
    /// - `2`: maximal vertical wall through the hunter
    /// - `k >= 3`: remove `state.walls[k - 3]`, or no-op if there is no such wall
    pub fn dispatch(&self, index: usize, state: &InternalState) -> Action {
        match index {
            NOOP => Action::NoOp,
            WALL_ACROSS_ROW => self.create(state, BoundingMode::VerticalBlocking),
            WALL_ACROSS_COLUMN => self.create(state, BoundingMode::HorizontalBlocking),
            k => Self::remove(state, k - REMOVE_BASE),
        }
    }

    fn create(&self, state: &InternalState, mode: BoundingMode) -> Action {
        if self.config.enforce_wall_rules && !state.can_place_wall() {
            log::debug!(
                "tick {}: wall rules forbid a new wall (cooldown ready: {}, walls: {}/{})",
                state.tick,
                state.wall_cooldown_ready(),
                state.walls.len(),
                state.config.max_walls
            );
            return Action::NoOp;
        }
        match bound_wall(state.hunter_position, mode, &state.walls, &self.config.arena) {
            Some(segment) => Action::CreateWall(segment),
            None => {
                log::debug!("tick {}: no room for a wall, sending no-op", state.tick);
                Action::NoOp
            }
        }
    }

    fn remove(state: &InternalState, slot: usize) -> Action {
        match state.walls.get(slot) {
            Some(segment) => Action::RemoveWalls(vec![*segment]),
            None => {
                log::debug!(
                    "tick {}: removal slot {} out of range ({} walls), sending no-op",
                    state.tick,
                    slot,
                    state.walls.len()
                );
                Action::NoOp
            }
        }
    }
}
