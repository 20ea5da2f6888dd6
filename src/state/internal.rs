//! Engine-side game state with typed wall segments.

use super::snapshot::{GameConfig, GameSnapshot};
use crate::field::{GeometryError, Point, Velocity, WallSegment};

/// A [`GameSnapshot`] with its walls classified, plus the game rules it was read under.
///
/// Built fresh for each decision and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InternalState {
    pub config: GameConfig,
    pub tick: u32,
    pub hunter_position: Point,
    pub hunter_velocity: Velocity,
    pub hunter_last_wall: Option<u32>,
    pub prey_position: Point,
    pub prey_velocity: Velocity,
    /// Walls in the snapshot's order.
    pub walls: Vec<WallSegment>,
}

impl InternalState {
    /// Ticks elapsed since the hunter's last wall, if it has built one.
    pub fn ticks_since_last_wall(&self) -> Option<u32> {
        self.hunter_last_wall
            .map(|last| self.tick.saturating_sub(last))
    }

    /// Returns true once the wall cooldown has elapsed (or no wall was ever built).
    pub fn wall_cooldown_ready(&self) -> bool {
        match self.hunter_last_wall {
            None => true,
            Some(last) => self.tick >= last.saturating_add(self.config.next_wall_interval),
        }
    }

    /// Returns true if the hunter already holds the maximum number of walls.
    pub fn at_wall_capacity(&self) -> bool {
        self.walls.len() >= self.config.max_walls
    }

    /// Returns true if a new wall would currently be accepted by the server's
    /// cooldown and capacity rules.
    pub fn can_place_wall(&self) -> bool {
        self.wall_cooldown_ready() && !self.at_wall_capacity()
    }
}

/// Classifies every wall of `snapshot` and attaches the game rules.
///
/// Wall order is preserved.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateSegment`] if any wall has coincident endpoints.
pub fn to_internal_state(
    snapshot: &GameSnapshot,
    config: GameConfig,
) -> Result<InternalState, GeometryError> {
    let walls = snapshot
        .walls
        .iter()
        .map(|w| w.to_segment())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InternalState {
        config,
        tick: snapshot.tick,
        hunter_position: snapshot.hunter_position,
        hunter_velocity: snapshot.hunter_velocity,
        hunter_last_wall: snapshot.hunter_last_wall,
        prey_position: snapshot.prey_position,
        prey_velocity: snapshot.prey_velocity,
        walls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Wall;

    fn snapshot_with_walls(walls: Vec<Wall>) -> GameSnapshot {
        GameSnapshot {
            walls,
            ..GameSnapshot::new(Point::new(5, 5), Point::new(20, 20))
        }
    }

    #[test]
    fn walls_keep_server_order() {
        let snapshot = snapshot_with_walls(vec![
            Wall::new(3, 0, 3, 10),
            Wall::new(0, 7, 12, 7),
            Wall::new(8, 2, 8, 1),
        ]);
        let state = to_internal_state(&snapshot, GameConfig::default()).unwrap();
        assert_eq!(
            state.walls,
            vec![
                WallSegment::Vertical { x: 3, y1: 0, y2: 10 },
                WallSegment::Horizontal { y: 7, x1: 0, x2: 12 },
                WallSegment::Vertical { x: 8, y1: 1, y2: 2 },
            ]
        );
        assert_eq!(state.hunter_position, snapshot.hunter_position);
        assert_eq!(state.prey_position, snapshot.prey_position);
    }

    #[test]
    fn degenerate_wall_fails_translation() {
        let snapshot = snapshot_with_walls(vec![Wall::new(3, 0, 3, 10), Wall::new(4, 4, 4, 4)]);
        let err = to_internal_state(&snapshot, GameConfig::default()).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateSegment { x: 4, y: 4 });
    }

    #[test]
    fn cooldown_follows_interval() {
        let mut snapshot = snapshot_with_walls(vec![]);
        snapshot.tick = 14;
        snapshot.hunter_last_wall = Some(5);
        let state = to_internal_state(&snapshot, GameConfig::new(10, 5)).unwrap();
        assert_eq!(state.ticks_since_last_wall(), Some(9));
        assert!(!state.wall_cooldown_ready());

        snapshot.tick = 15;
        let state = to_internal_state(&snapshot, GameConfig::new(10, 5)).unwrap();
        assert!(state.wall_cooldown_ready());
    }

    #[test]
    fn never_built_is_ready() {
        let state = to_internal_state(&snapshot_with_walls(vec![]), GameConfig::default()).unwrap();
        assert_eq!(state.ticks_since_last_wall(), None);
        assert!(state.can_place_wall());
    }

    #[test]
    fn capacity_blocks_placement() {
        let snapshot = snapshot_with_walls(vec![Wall::new(3, 0, 3, 10), Wall::new(0, 7, 12, 7)]);
        let state = to_internal_state(&snapshot, GameConfig::new(0, 2)).unwrap();
        assert!(state.at_wall_capacity());
        assert!(!state.can_place_wall());
    }
}
