//! Game state: server snapshots, the engine's typed view of them, and
//! the observation vector handed to the policy.

pub mod internal;
pub mod observation;
pub mod snapshot;

pub use internal::{to_internal_state, InternalState};
pub use observation::{Observation, ObservationBuilder};
pub use snapshot::{GameConfig, GameSnapshot, Role};
