//! Line-level player: answers server lines for either role.
//!
//! Owns no socket; the transport feeds it one line at a time and sends
//! back whatever it returns.

use super::action::Action;
use super::config::EngineConfig;
use super::engine::HunterEngine;
use super::error::EngineError;
use super::policy::Policy;
use super::prey::prey_action;
use crate::protocol::{decode_setup, decode_snapshot, encode_action, is_end_of_game};
use crate::state::{GameSnapshot, Role};

/// A client for one game, in whichever role the server assigned.
pub struct Player<P: Policy> {
    role: Role,
    hunter: HunterEngine<P>,
}

impl<P: Policy> Player<P> {
    /// Builds a player from the server's setup line.
    ///
    /// The game rules announced in the setup line override `config.game`.
    pub fn from_setup(setup: &str, mut config: EngineConfig, policy: P) -> Result<Self, EngineError> {
        let (role, game) = decode_setup(setup)?;
        log::info!(
            "joined as {} (wall interval {}, max walls {})",
            role,
            game.next_wall_interval,
            game.max_walls
        );
        config.game = game;
        Ok(Self {
            role,
            hunter: HunterEngine::new(config, policy)?,
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Decides this role's move for a decoded snapshot.
    ///
    /// # Errors
    ///
    /// As the prey, returns [`EngineError::UnknownVelocity`] when the hunter
    /// is stationary; choosing a fallback is left to the caller.
    pub fn decide(&mut self, snapshot: &GameSnapshot) -> Result<Action, EngineError> {
        match self.role {
            Role::Hunter => self.hunter.decide(snapshot),
            Role::Prey => prey_action(snapshot.hunter_velocity),
        }
    }

    /// Answers one server line.
    ///
    /// Returns `Ok(None)` on the end-of-game line, otherwise the encoded command.
    pub fn respond(&mut self, line: &str) -> Result<Option<String>, EngineError> {
        if is_end_of_game(line) {
            log::info!("game over");
            return Ok(None);
        }
        let snapshot = decode_snapshot(line)?;
        let action = self.decide(&snapshot)?;
        Ok(Some(encode_action(&action)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::policy::ScriptedPolicy;
    use crate::field::Arena;

    fn config() -> EngineConfig {
        EngineConfig {
            arena: Arena::new(20, 20),
            ..EngineConfig::default()
        }
    }

    #[test]
    fn hunter_answers_with_policy_command() {
        let mut player =
            Player::from_setup("hunter 10 5", config(), ScriptedPolicy::new([1, 3])).unwrap();
        assert_eq!(player.role(), Role::Hunter);

        let line = "0 5 5 0 0 null 15 15 0 0 2 3 0 3 19 8 0 8 19";
        assert_eq!(player.respond(line).unwrap().as_deref(), Some("create 4 5 7 5"));
        assert_eq!(player.respond(line).unwrap().as_deref(), Some("remove 3 0 3 19"));
        assert_eq!(player.respond("end").unwrap(), None);
    }

    #[test]
    fn setup_overrides_game_rules() {
        let player = Player::from_setup("hunter 3 2", config(), ScriptedPolicy::new([])).unwrap();
        assert_eq!(player.hunter.config().game.max_walls, 2);
        assert_eq!(player.hunter.config().game.next_wall_interval, 3);
    }

    #[test]
    fn prey_reflects_hunter_velocity() {
        let mut player = Player::from_setup("prey 10 5", config(), ScriptedPolicy::new([])).unwrap();
        let line = "3 5 5 1 1 null 15 15 0 0 0";
        assert_eq!(player.respond(line).unwrap().as_deref(), Some("change -1 1"));
    }

    #[test]
    fn prey_surfaces_stationary_hunter() {
        let mut player = Player::from_setup("prey 10 5", config(), ScriptedPolicy::new([])).unwrap();
        let line = "3 5 5 0 0 null 15 15 0 0 0";
        assert!(matches!(
            player.respond(line),
            Err(EngineError::UnknownVelocity(_))
        ));
    }

    #[test]
    fn malformed_line_is_protocol_error() {
        let mut player = Player::from_setup("hunter 10 5", config(), ScriptedPolicy::new([])).unwrap();
        assert!(matches!(
            player.respond("0 5 5"),
            Err(EngineError::Protocol(_))
        ));
    }
}
