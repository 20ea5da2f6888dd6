use thiserror::Error;

use super::config::ConfigError;
use crate::field::{GeometryError, Velocity};
use crate::protocol::ProtocolError;

/// Errors the decision engine surfaces to its caller.
///
/// Recoverable situations (out-of-range removal index, no room for a wall)
/// never reach this type; the engine answers them with a no-op.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("No prey response for hunter velocity {0}")]
    UnknownVelocity(Velocity),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
