//! Configuration for the hunter decision engine.

use thiserror::Error;

use crate::field::Arena;
use crate::state::{GameConfig, ObservationBuilder};

/// Errors found while validating engine configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Arena must be at least 2x2, got {width}x{height}")]
    InvalidArena { width: i32, height: i32 },

    #[error("max_walls must be at least 1")]
    ZeroWallCapacity,

    #[error("Policy was trained with {field} = {trained}, engine configured with {configured}")]
    ProfileMismatch {
        field: &'static str,
        trained: usize,
        configured: usize,
    },

    #[error("Cannot read training profile {path}: {reason}")]
    ProfileUnreadable { path: String, reason: String },
}

/// Configuration of a [`HunterEngine`](super::HunterEngine).
///
/// The game rules must match the values the policy was trained against;
/// [`EngineConfig::check_profile`] compares them when the policy can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Field bounds supplied by the server.
    pub arena: Arena,
    /// Wall cooldown and capacity of the current game.
    pub game: GameConfig,
    /// Turn wall creation into a no-op while the cooldown is running or the
    /// hunter is at capacity. Off by default: the raw policy choice is sent.
    pub enforce_wall_rules: bool,
}

impl EngineConfig {
    pub fn new(arena: Arena, game: GameConfig) -> Self {
        Self {
            arena,
            game,
            enforce_wall_rules: false,
        }
    }

    /// Observation length produced under this configuration.
    pub fn observation_dim(&self) -> usize {
        ObservationBuilder::observation_dim(self.game.max_walls)
    }

    /// Number of policy actions: no-op, two wall orientations, one removal per slot.
    pub fn action_dim(&self) -> usize {
        3 + self.game.max_walls
    }

    /// Checks the configuration on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena.max_width < 2 || self.arena.max_height < 2 {
            return Err(ConfigError::InvalidArena {
                width: self.arena.max_width,
                height: self.arena.max_height,
            });
        }
        if self.game.max_walls == 0 {
            return Err(ConfigError::ZeroWallCapacity);
        }
        Ok(())
    }

    /// Checks the configuration against the values a policy was trained with.
    pub fn check_profile(&self, profile: &TrainingProfile) -> Result<(), ConfigError> {
        let pairs = [
            ("max_walls", profile.max_walls, self.game.max_walls),
            (
                "next_wall_interval",
                profile.next_wall_interval as usize,
                self.game.next_wall_interval as usize,
            ),
            ("observation_dim", profile.observation_dim, self.observation_dim()),
        ];
        for (field, trained, configured) in pairs {
            if trained != configured {
                return Err(ConfigError::ProfileMismatch {
                    field,
                    trained,
                    configured,
                });
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Arena::default(), GameConfig::default())
    }
}

/// The configuration a policy artifact was produced under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingProfile {
    pub max_walls: usize,
    pub next_wall_interval: u32,
    pub observation_dim: usize,
}

impl TrainingProfile {
    /// Profile matching a game configuration.
    pub fn for_game(game: GameConfig) -> Self {
        Self {
            max_walls: game.max_walls,
            next_wall_interval: game.next_wall_interval,
            observation_dim: ObservationBuilder::observation_dim(game.max_walls),
        }
    }

    /// Number of policy actions the artifact was trained to emit.
    pub fn action_dim(&self) -> usize {
        3 + self.max_walls
    }

    /// Location of the JSON profile for `artifact`: the artifact path with
    /// `.json` appended (`hunter.ot` -> `hunter.ot.json`).
    pub fn sidecar_path(artifact: impl AsRef<std::path::Path>) -> std::path::PathBuf {
        let mut path = artifact.as_ref().as_os_str().to_owned();
        path.push(".json");
        path.into()
    }

    /// Reads the profile stored in the sidecar of `artifact`.
    #[cfg(feature = "serde")]
    pub fn for_artifact(artifact: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        Self::from_json_file(Self::sidecar_path(artifact))
    }

    /// Reads a profile stored as JSON.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let unreadable = |reason: String| ConfigError::ProfileUnreadable {
            path: path.display().to_string(),
            reason,
        };
        let json = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| unreadable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.arena, Arena::new(300, 300));
        assert_eq!(cfg.action_dim(), 3 + cfg.game.max_walls);
        assert!(!cfg.enforce_wall_rules);
    }

    #[test]
    fn observation_dim_matches() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.observation_dim(), 12 + cfg.game.max_walls * 4);
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = EngineConfig::new(Arena::default(), GameConfig::new(10, 0));
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWallCapacity));
    }

    #[test]
    fn tiny_arena_rejected() {
        let cfg = EngineConfig::new(Arena::new(1, 30), GameConfig::default());
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidArena {
                width: 1,
                height: 30
            })
        );
    }

    #[test]
    fn matching_profile_passes() {
        let cfg = EngineConfig::default();
        assert!(cfg.check_profile(&TrainingProfile::for_game(cfg.game)).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn profile_reads_from_json_sidecar() {
        let path = std::env::temp_dir().join("evasion_hunter_profile_test.json");
        let profile = TrainingProfile::for_game(GameConfig::new(7, 4));
        std::fs::write(&path, serde_json::to_string(&profile).unwrap()).unwrap();
        assert_eq!(TrainingProfile::from_json_file(&path), Ok(profile));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            TrainingProfile::from_json_file(&path),
            Err(ConfigError::ProfileUnreadable { .. })
        ));
    }

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            TrainingProfile::sidecar_path("models/hunter.ot"),
            std::path::PathBuf::from("models/hunter.ot.json")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sidecar_profile_disagreeing_with_engine_is_rejected() {
        let artifact = std::env::temp_dir().join("evasion_hunter_sidecar_test.ot");
        let sidecar = TrainingProfile::sidecar_path(&artifact);
        let trained = TrainingProfile::for_game(GameConfig::new(10, 3));
        std::fs::write(&sidecar, serde_json::to_string(&trained).unwrap()).unwrap();
        let loaded = TrainingProfile::for_artifact(&artifact);
        std::fs::remove_file(&sidecar).unwrap();

        let loaded = loaded.unwrap();
        assert_eq!(loaded, trained);
        assert_eq!(loaded.action_dim(), 6);

        let cfg = EngineConfig::new(Arena::default(), GameConfig::new(10, 5));
        assert_eq!(
            cfg.check_profile(&loaded),
            Err(ConfigError::ProfileMismatch {
                field: "max_walls",
                trained: 3,
                configured: 5,
            })
        );
    }

    #[test]
    fn mismatched_profile_names_field() {
        let cfg = EngineConfig::new(Arena::default(), GameConfig::new(10, 5));
        let profile = TrainingProfile::for_game(GameConfig::new(20, 5));
        assert_eq!(
            cfg.check_profile(&profile),
            Err(ConfigError::ProfileMismatch {
                field: "next_wall_interval",
                trained: 20,
                configured: 10,
            })
        );

        let profile = TrainingProfile::for_game(GameConfig::new(10, 3));
        assert!(matches!(
            cfg.check_profile(&profile),
            Err(ConfigError::ProfileMismatch {
                field: "max_walls",
                ..
            })
        ));
    }
}
