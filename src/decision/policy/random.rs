//! Random policy for testing and baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::trait_::Policy;
use crate::state::Observation;

/// Uniformly random action selection.
///
/// Picks from `[0, action_dim)` on every tick. Used for smoke tests and as
/// a lower-bound baseline; many of its picks are rejected by the server.
pub struct RandomPolicy {
    action_dim: usize,
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a new random policy seeded from the OS.
    ///
    /// # Arguments
    ///
    /// * `action_dim` - Number of possible actions (`3 + max_walls`).
    pub fn new(action_dim: usize) -> Self {
        Self {
            action_dim,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a random policy with a fixed seed for reproducible runs.
    pub fn seeded(action_dim: usize, seed: u64) -> Self {
        Self {
            action_dim,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn predict(&mut self, _observation: &Observation) -> usize {
        self.rng.gen_range(0..self.action_dim)
    }

    fn name(&self) -> &str {
        "random"
    }
}
