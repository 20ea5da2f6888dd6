//! Fixed evasive response for the prey role.

use super::action::Action;
use super::error::EngineError;
use crate::field::Velocity;

/// Returns the prey velocity prescribed for a given hunter velocity.
///
/// Defined for the eight non-zero unit velocities only.
///
/// # Errors
///
/// Returns [`EngineError::UnknownVelocity`] for `(0, 0)` or any component
/// outside `{-1, 0, 1}`.
pub fn prey_response(hunter_velocity: Velocity) -> Result<Velocity, EngineError> {
    let (x, y) = match (hunter_velocity.x, hunter_velocity.y) {
        (1, 1) | (1, 0) | (1, -1) => (-1, 1),
        (0, 1) => (0, -1),
        (0, -1) => (0, 1),
        (-1, 1) => (1, 0),
        (-1, 0) => (1, 1),
        (-1, -1) => (1, -1),
        _ => return Err(EngineError::UnknownVelocity(hunter_velocity)),
    };
    Ok(Velocity::new(x, y))
}

/// The prey's move for a given hunter velocity.
pub fn prey_action(hunter_velocity: Velocity) -> Result<Action, EngineError> {
    prey_response(hunter_velocity).map(Action::ChangeVelocity)
}
