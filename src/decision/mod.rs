//! Move decisions for both roles.
//!
//! The hunter side runs a [`Policy`] over the observation and turns its
//! action index into a command through the [`ActionDispatcher`]. The prey
//! side uses a fixed reflection table. The [`NeuralPolicy`] (feature
//! `rl-nn`) loads a trained actor network.

pub mod action;
pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod player;
pub mod policy;
pub mod prey;

#[cfg(feature = "rl-nn")]
pub mod network;


pub use action::Action;
pub use config::{ConfigError, EngineConfig, TrainingProfile};
pub use dispatcher::ActionDispatcher;
pub use engine::HunterEngine;
pub use error::EngineError;
pub use player::Player;
pub use policy::{GreedyWallPolicy, Policy, RandomPolicy, ScriptedPolicy};
pub use prey::{prey_action, prey_response};

#[cfg(feature = "rl-nn")]
pub use network::{CheckpointError, NeuralPolicy};
