//! Policy trait for the hunter engine.

use crate::decision::config::TrainingProfile;
use crate::state::Observation;

/// A policy that picks the hunter's action from an observation.
///
/// Actions are indices into:
/// - 0: no-op
/// - 1: horizontal wall through the hunter, bounded by vertical walls
/// - 2: vertical wall through the hunter, bounded by horizontal walls
/// - 3..: remove the wall in slot `index - 3`
///
/// Implementations are loaded once, before the first tick, and must not
/// block on I/O inside [`Policy::predict`].
pub trait Policy: Send {
    /// Selects one action index for the given observation.
    fn predict(&mut self, observation: &Observation) -> usize;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;

    /// The configuration this policy was trained under, if known.
    fn profile(&self) -> Option<TrainingProfile> {
        None
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn predict(&mut self, observation: &Observation) -> usize {
        (**self).predict(observation)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn profile(&self) -> Option<TrainingProfile> {
        (**self).profile()
    }
}
