//! Deterministic stand-in policy.

use std::collections::VecDeque;

use super::trait_::Policy;
use crate::decision::config::TrainingProfile;
use crate::state::Observation;

/// Replays a fixed list of action indices, then repeats a fallback.
///
/// Lets the engine run end to end without a model artifact.
#[derive(Debug, Clone)]
pub struct ScriptedPolicy {
    script: VecDeque<usize>,
    fallback: usize,
    profile: Option<TrainingProfile>,
    seen: Vec<Observation>,
}

impl ScriptedPolicy {
    /// Replays `script`, then answers `0` (no-op) forever.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: 0,
            profile: None,
            seen: Vec::new(),
        }
    }

    /// Always answers `action`.
    pub fn constant(action: usize) -> Self {
        Self {
            fallback: action,
            ..Self::new([])
        }
    }

    /// Reports `profile` as the training configuration.
    pub fn with_profile(mut self, profile: TrainingProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Observations received so far, in order.
    pub fn seen(&self) -> &[Observation] {
        &self.seen
    }
}

impl Policy for ScriptedPolicy {
    fn predict(&mut self, observation: &Observation) -> usize {
        self.seen.push(observation.clone());
        self.script.pop_front().unwrap_or(self.fallback)
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn profile(&self) -> Option<TrainingProfile> {
        self.profile
    }
}
