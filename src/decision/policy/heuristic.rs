//! Greedy wall-building heuristic.
//!
//! Builds a wall between hunter and prey whenever the rules allow it, and
//! frees the oldest wall once capacity is reached.

use super::trait_::Policy;
use crate::state::{Observation, ObservationBuilder as Obs};

/// Greedy heuristic hunter policy.
///
/// Reads only the observation vector:
/// - cooldown elapsed and room left: build across the prey's dominant
///   direction (`2` when the prey is mostly left/right, `1` otherwise);
/// - at capacity: remove the oldest wall (`3`);
/// - otherwise: no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyWallPolicy;

impl GreedyWallPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for GreedyWallPolicy {
    fn predict(&mut self, observation: &Observation) -> usize {
        if observation.len() < Obs::HEADER_DIM {
            return 0;
        }
        let obs = observation.as_slice();
        let max_walls = (obs.len() - Obs::HEADER_DIM) / Obs::WALL_SLOT_DIM;
        let n_walls = obs[Obs::WALL_COUNT] as usize;

        let since = obs[Obs::SINCE_LAST_WALL];
        let ready = since == Obs::NO_WALL_YET || since >= obs[Obs::WALL_INTERVAL];

        if n_walls >= max_walls {
            return 3;
        }
        if !ready {
            return 0;
        }

        let dx = (obs[Obs::PREY_X] - obs[Obs::HUNTER_X]).abs();
        let dy = (obs[Obs::PREY_Y] - obs[Obs::HUNTER_Y]).abs();
        if dx >= dy {
            2
        } else {
            1
        }
    }

    fn name(&self) -> &str {
        "greedy_wall"
    }
}
