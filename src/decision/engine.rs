//! The hunter decision engine: snapshot in, command out.

use super::action::Action;
use super::config::EngineConfig;
use super::dispatcher::ActionDispatcher;
use super::error::EngineError;
use super::policy::Policy;
use crate::state::{to_internal_state, GameSnapshot, InternalState, ObservationBuilder};

/// One decision per tick, with no state carried between ticks.
///
/// # Lifecycle
///
/// 1. Load the policy (once) and build the engine with [`HunterEngine::new`],
///    which validates the configuration against the policy.
/// 2. Call [`HunterEngine::decide`] with every snapshot, in arrival order.
/// 3. Encode the returned [`Action`] with [`crate::protocol::encode_action`].
pub struct HunterEngine<P: Policy> {
    policy: P,
    dispatcher: ActionDispatcher,
}

impl<P: Policy> HunterEngine<P> {
    /// Creates an engine around a loaded policy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the configuration is invalid or
    /// disagrees with the policy's training profile.
    pub fn new(config: EngineConfig, policy: P) -> Result<Self, EngineError> {
        config.validate()?;
        match policy.profile() {
            Some(profile) => config.check_profile(&profile)?,
            None => log::debug!(
                "policy '{}' reports no training profile; skipping profile check",
                policy.name()
            ),
        }
        log::info!(
            "hunter engine ready: policy={} arena={}x{} max_walls={} wall_interval={}",
            policy.name(),
            config.arena.max_width,
            config.arena.max_height,
            config.game.max_walls,
            config.game.next_wall_interval
        );
        Ok(Self {
            policy,
            dispatcher: ActionDispatcher::new(config),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        self.dispatcher.config()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Decides the hunter's move for one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Geometry`] if the snapshot holds a degenerate wall.
    pub fn decide(&mut self, snapshot: &GameSnapshot) -> Result<Action, EngineError> {
        let state = to_internal_state(snapshot, self.config().game)?;
        Ok(self.decide_state(&state))
    }

    /// Decides the hunter's move for an already translated state.
    pub fn decide_state(&mut self, state: &InternalState) -> Action {
        let observation = ObservationBuilder::build(state);
        let index = self.policy.predict(&observation);
        let action = self.dispatcher.dispatch(index, state);
        log::trace!("tick {}: policy chose {} -> {}", state.tick, index, action);
        action
    }
}
