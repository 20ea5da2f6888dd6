//! Neural network policy using tch-rs (PyTorch bindings).
//!
//! Inference only: the actor is loaded once from a saved `VarStore`
//! checkpoint and evaluated greedily. This module is only available with
//! the `rl-nn` feature.

use std::path::Path;

use tch::{nn, nn::Module, Device, Kind, Tensor};
use thiserror::Error;

use super::config::{ConfigError, TrainingProfile};
use super::policy::Policy;
use crate::state::Observation;

/// MLP actor network that outputs action log-probabilities.
///
/// Architecture: `obs_dim → 64 → 64 → action_dim` with tanh activations,
/// the default actor shape of the PPO setup the hunter was trained with.
pub struct ActorNetwork {
    vs: nn::VarStore,
    net: nn::Sequential,
}

impl ActorNetwork {
    /// Creates a new actor network with freshly initialised weights.
    pub fn new(obs_dim: usize, action_dim: usize, device: Device) -> Self {
        let vs = nn::VarStore::new(device);
        let p = &vs.root();
        let net = nn::seq()
            .add(nn::linear(p / "l1", obs_dim as i64, 64, Default::default()))
            .add_fn(|x| x.tanh())
            .add(nn::linear(p / "l2", 64, 64, Default::default()))
            .add_fn(|x| x.tanh())
            .add(nn::linear(p / "l3", 64, action_dim as i64, Default::default()));

        Self { vs, net }
    }

    /// Forward pass: returns log-probabilities over actions.
    pub fn forward(&self, obs: &Tensor) -> Tensor {
        self.net.forward(obs).log_softmax(-1, Kind::Float)
    }

    /// Loads weights saved with `VarStore::save`.
    pub fn load(&mut self, path: &Path) -> Result<(), tch::TchError> {
        self.vs.load(path)
    }

    pub fn var_store(&self) -> &nn::VarStore {
        &self.vs
    }
}

/// Errors raised while loading a trained actor.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error(transparent)]
    Profile(#[from] ConfigError),

    #[error("Cannot load actor weights from {path}: {source}")]
    Weights {
        path: String,
        #[source]
        source: tch::TchError,
    },
}

/// Greedy neural policy wrapping an [`ActorNetwork`].
///
/// The network is shaped by the [`TrainingProfile`] of the artifact, and
/// that profile is what [`Policy::profile`] reports, so
/// [`HunterEngine::new`](super::HunterEngine::new) rejects an engine whose
/// game rules differ from the ones the actor was trained under.
pub struct NeuralPolicy {
    actor: ActorNetwork,
    device: Device,
    profile: TrainingProfile,
}

impl NeuralPolicy {
    /// Creates an untrained policy shaped for `profile`.
    pub fn with_profile(profile: TrainingProfile, device: Device) -> Self {
        Self {
            actor: ActorNetwork::new(profile.observation_dim, profile.action_dim(), device),
            device,
            profile,
        }
    }

    /// Loads a trained actor from `checkpoint_path`, reading its profile
    /// from the `<checkpoint>.json` sidecar.
    ///
    /// Call once at start-up; loading is the expensive step and must stay
    /// off the per-tick path.
    pub fn from_checkpoint(
        checkpoint_path: impl AsRef<Path>,
        device: Device,
    ) -> Result<Self, CheckpointError> {
        let checkpoint_path = checkpoint_path.as_ref();
        let profile = TrainingProfile::for_artifact(checkpoint_path)?;
        Self::from_checkpoint_with_profile(checkpoint_path, profile, device)
    }

    /// Loads a trained actor from `checkpoint_path` using a profile supplied
    /// by the caller.
    pub fn from_checkpoint_with_profile(
        checkpoint_path: impl AsRef<Path>,
        profile: TrainingProfile,
        device: Device,
    ) -> Result<Self, CheckpointError> {
        let checkpoint_path = checkpoint_path.as_ref();
        let mut policy = Self::with_profile(profile, device);
        policy
            .actor
            .load(checkpoint_path)
            .map_err(|source| CheckpointError::Weights {
                path: checkpoint_path.display().to_string(),
                source,
            })?;
        log::info!(
            "loaded hunter actor from {} (max_walls={}, wall_interval={}, obs_dim={})",
            checkpoint_path.display(),
            profile.max_walls,
            profile.next_wall_interval,
            profile.observation_dim
        );
        Ok(policy)
    }

    pub fn actor(&self) -> &ActorNetwork {
        &self.actor
    }
}

impl Policy for NeuralPolicy {
    fn predict(&mut self, observation: &Observation) -> usize {
        let obs = Tensor::from_slice(observation.as_slice())
            .to_kind(Kind::Float)
            .to_device(self.device)
            .unsqueeze(0);
        let action = tch::no_grad(|| self.actor.forward(&obs).argmax(-1, false));
        action.int64_value(&[0]) as usize
    }

    fn name(&self) -> &str {
        "neural"
    }

    fn profile(&self) -> Option<TrainingProfile> {
        Some(self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::{EngineConfig, EngineError, HunterEngine};
    use crate::field::Arena;
    use crate::state::GameConfig;

    #[test]
    fn actor_forward_shape() {
        let actor = ActorNetwork::new(32, 8, Device::Cpu);
        let obs = Tensor::randn([4, 32], (Kind::Float, Device::Cpu));
        assert_eq!(actor.forward(&obs).size(), &[4, 8]);
    }

    #[test]
    fn neural_policy_action_in_range() {
        let config = EngineConfig::default();
        let mut policy =
            NeuralPolicy::with_profile(TrainingProfile::for_game(config.game), Device::Cpu);
        let obs = Observation::from_vec(vec![0.5; config.observation_dim()]);
        assert!(policy.predict(&obs) < config.action_dim());
    }

    #[test]
    fn checkpoint_profile_comes_from_sidecar() {
        let dir = std::env::temp_dir();
        let checkpoint = dir.join("evasion_hunter_actor_test.ot");
        let sidecar = TrainingProfile::sidecar_path(&checkpoint);
        let trained = TrainingProfile::for_game(GameConfig::new(10, 3));

        let actor = ActorNetwork::new(trained.observation_dim, trained.action_dim(), Device::Cpu);
        actor.var_store().save(&checkpoint).unwrap();
        std::fs::write(&sidecar, serde_json::to_string(&trained).unwrap()).unwrap();

        let loaded = NeuralPolicy::from_checkpoint(&checkpoint, Device::Cpu);
        std::fs::remove_file(&checkpoint).unwrap();
        std::fs::remove_file(&sidecar).unwrap();
        let policy = loaded.unwrap();
        assert_eq!(policy.profile(), Some(trained));

        let config = EngineConfig::new(Arena::new(20, 20), GameConfig::new(10, 5));
        assert_eq!(
            HunterEngine::new(config, policy).err(),
            Some(EngineError::Config(ConfigError::ProfileMismatch {
                field: "max_walls",
                trained: 3,
                configured: 5,
            }))
        );
    }

    #[test]
    fn missing_sidecar_is_an_error() {
        let checkpoint = std::env::temp_dir().join("evasion_hunter_no_sidecar.ot");
        assert!(matches!(
            NeuralPolicy::from_checkpoint(&checkpoint, Device::Cpu),
            Err(CheckpointError::Profile(ConfigError::ProfileUnreadable { .. }))
        ));
    }
}
