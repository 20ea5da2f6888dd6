//! Observation encoding for the hunter policy.
//!
//! The policy was trained against one fixed layout, so the encoding must
//! not drift: same [`InternalState`], same vector, bit for bit.

use std::ops::Deref;

use super::internal::InternalState;

/// Fixed-length feature vector consumed by a [`Policy`](crate::decision::Policy).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation(Vec<f64>);

impl Observation {
    /// Wraps raw features. Intended for tests and replay tooling.
    pub fn from_vec(features: Vec<f64>) -> Self {
        Self(features)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Wall slot `i` as `[x1, y1, x2, y2]`, or `None` if the slot is empty
    /// or out of range.
    pub fn wall_slot(&self, i: usize) -> Option<[f64; 4]> {
        let start = i
            .checked_mul(ObservationBuilder::WALL_SLOT_DIM)?
            .checked_add(ObservationBuilder::HEADER_DIM)?;
        let end = start.checked_add(ObservationBuilder::WALL_SLOT_DIM)?;
        let slot = self.0.get(start..end)?;
        if slot.iter().all(|&v| v == ObservationBuilder::EMPTY_SLOT) {
            return None;
        }
        Some([slot[0], slot[1], slot[2], slot[3]])
    }
}

impl Deref for Observation {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

/// Builds observation vectors from engine state.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Number of scalar features ahead of the wall slots.
    pub const HEADER_DIM: usize = 12; // tick, hunter(4), since_wall, interval, prey(4), n_walls

    /// Number of features encoding one wall slot.
    pub const WALL_SLOT_DIM: usize = 4; // x1, y1, x2, y2

    /// Fill value for wall slots with no wall.
    pub const EMPTY_SLOT: f64 = -1.0;

    /// Value of the "ticks since last wall" feature before the first wall.
    pub const NO_WALL_YET: f64 = -1.0;

    // Header offsets.
    pub const TICK: usize = 0;
    pub const HUNTER_X: usize = 1;
    pub const HUNTER_Y: usize = 2;
    pub const HUNTER_VX: usize = 3;
    pub const HUNTER_VY: usize = 4;
    pub const SINCE_LAST_WALL: usize = 5;
    pub const WALL_INTERVAL: usize = 6;
    pub const PREY_X: usize = 7;
    pub const PREY_Y: usize = 8;
    pub const PREY_VX: usize = 9;
    pub const PREY_VY: usize = 10;
    pub const WALL_COUNT: usize = 11;

    /// Builds the observation vector for `state`.
    ///
    /// The observation is a flat vector with structure:
    /// ```text
    /// [header(12)] ++ [wall_1(4)] ++ ... ++ [wall_M(4)]
    /// ```
    ///
    /// Wall slots follow the state's wall order and are padded with
    /// [`Self::EMPTY_SLOT`]. Walls beyond `max_walls` are not encoded.
    pub fn build(state: &InternalState) -> Observation {
        let max_walls = state.config.max_walls;
        let mut obs = Vec::with_capacity(Self::observation_dim(max_walls));

        let since_last_wall = state
            .ticks_since_last_wall()
            .map_or(Self::NO_WALL_YET, f64::from);

        obs.extend([
            f64::from(state.tick),
            f64::from(state.hunter_position.x),
            f64::from(state.hunter_position.y),
            f64::from(state.hunter_velocity.x),
            f64::from(state.hunter_velocity.y),
            since_last_wall,
            f64::from(state.config.next_wall_interval),
            f64::from(state.prey_position.x),
            f64::from(state.prey_position.y),
            f64::from(state.prey_velocity.x),
            f64::from(state.prey_velocity.y),
            state.walls.len() as f64,
        ]);

        if state.walls.len() > max_walls {
            log::warn!(
                "{} walls reported but only {} slots are encoded",
                state.walls.len(),
                max_walls
            );
        }

        for i in 0..max_walls {
            match state.walls.get(i) {
                Some(segment) => {
                    obs.extend(segment.to_wall().as_array().map(f64::from));
                }
                None => {
                    obs.extend(std::iter::repeat_n(Self::EMPTY_SLOT, Self::WALL_SLOT_DIM));
                }
            }
        }

        Observation(obs)
    }

    /// Dimension of the observation vector for a given wall capacity.
    pub fn observation_dim(max_walls: usize) -> usize {
        Self::HEADER_DIM + max_walls * Self::WALL_SLOT_DIM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Point, Velocity, Wall};
    use crate::state::{to_internal_state, GameConfig, GameSnapshot};

    fn make_state(walls: Vec<Wall>, config: GameConfig) -> InternalState {
        let snapshot = GameSnapshot {
            tick: 42,
            hunter_position: Point::new(5, 6),
            hunter_velocity: Velocity::new(1, -1),
            hunter_last_wall: Some(30),
            prey_position: Point::new(100, 120),
            prey_velocity: Velocity::new(-1, 0),
            walls,
        };
        to_internal_state(&snapshot, config).unwrap()
    }

    #[test]
    fn observation_has_correct_dim() {
        let config = GameConfig::new(10, 5);
        let obs = ObservationBuilder::build(&make_state(vec![], config));
        assert_eq!(obs.len(), ObservationBuilder::observation_dim(5));
        assert_eq!(obs.len(), 12 + 5 * 4);
    }

    #[test]
    fn header_layout() {
        let obs = ObservationBuilder::build(&make_state(vec![], GameConfig::new(10, 3)));
        assert_eq!(
            &obs[..ObservationBuilder::HEADER_DIM],
            &[42.0, 5.0, 6.0, 1.0, -1.0, 12.0, 10.0, 100.0, 120.0, -1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn wall_slots_follow_order_and_pad() {
        let walls = vec![Wall::new(3, 0, 3, 10), Wall::new(12, 7, 0, 7)];
        let obs = ObservationBuilder::build(&make_state(walls, GameConfig::new(10, 3)));
        assert_eq!(obs[ObservationBuilder::WALL_COUNT], 2.0);
        assert_eq!(obs.wall_slot(0), Some([3.0, 0.0, 3.0, 10.0]));
        // Reversed endpoints are normalized before encoding.
        assert_eq!(obs.wall_slot(1), Some([0.0, 7.0, 12.0, 7.0]));
        assert_eq!(obs.wall_slot(2), None);
        assert_eq!(&obs[20..24], &[-1.0; 4]);
        assert_eq!(obs.wall_slot(3), None);
    }

    #[test]
    fn excess_walls_are_truncated() {
        let walls = vec![
            Wall::new(1, 0, 1, 5),
            Wall::new(2, 0, 2, 5),
            Wall::new(3, 0, 3, 5),
        ];
        let obs = ObservationBuilder::build(&make_state(walls, GameConfig::new(10, 2)));
        assert_eq!(obs.len(), ObservationBuilder::observation_dim(2));
        assert_eq!(obs[ObservationBuilder::WALL_COUNT], 3.0);
        assert_eq!(obs.wall_slot(1), Some([2.0, 0.0, 2.0, 5.0]));
        assert_eq!(obs.wall_slot(2), None);
        assert_eq!(obs.wall_slot(usize::MAX), None);
        assert_eq!(obs.wall_slot(usize::MAX / ObservationBuilder::WALL_SLOT_DIM), None);
    }

    #[test]
    fn no_wall_yet_uses_sentinel() {
        let mut state = make_state(vec![], GameConfig::default());
        state.hunter_last_wall = None;
        let obs = ObservationBuilder::build(&state);
        assert_eq!(obs[ObservationBuilder::SINCE_LAST_WALL], ObservationBuilder::NO_WALL_YET);
    }

    #[test]
    fn encoding_is_bit_reproducible() {
        let walls = vec![Wall::new(3, 0, 3, 10), Wall::new(0, 7, 12, 7)];
        let state = make_state(walls, GameConfig::default());
        let a = ObservationBuilder::build(&state);
        let b = ObservationBuilder::build(&state.clone());
        let bits = |o: &Observation| o.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }
}
