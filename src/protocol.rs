//! Text wire format spoken with the game server.
//!
//! The server sends one setup line (`"<role> <N> <M>"`), then one state line
//! per tick, then `end`. The client answers every state line with exactly
//! one command:
//!
//! ```text
//! none
//! create x1 y1 x2 y2
//! remove x1 y1 x2 y2 [x1 y1 x2 y2 ...]
//! change vx vy
//! ```

use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;

use crate::decision::Action;
use crate::field::{Point, Velocity, Wall};
use crate::state::{GameConfig, GameSnapshot, Role};

/// Line the server sends when the game is over.
pub const END_OF_GAME: &str = "end";

/// Upper bound on the wall buffer reserved from the count a state line claims.
const MAX_PREALLOCATED_WALLS: usize = 64;

/// Errors produced while decoding server lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("Unknown role: {0:?}")]
    UnknownRole(String),

    #[error("Unexpected trailing input: {0:?}")]
    TrailingInput(String),
}

struct Fields<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            inner: line.split_whitespace(),
        }
    }

    fn token(&mut self, field: &'static str) -> Result<&'a str, ProtocolError> {
        self.inner.next().ok_or(ProtocolError::MissingField(field))
    }

    fn parse<T: FromStr>(&mut self, field: &'static str) -> Result<T, ProtocolError> {
        let raw = self.token(field)?;
        raw.parse().map_err(|_| ProtocolError::InvalidField {
            field,
            value: raw.to_string(),
        })
    }

    fn point(&mut self, x: &'static str, y: &'static str) -> Result<Point, ProtocolError> {
        Ok(Point::new(self.parse(x)?, self.parse(y)?))
    }

    fn velocity(&mut self, x: &'static str, y: &'static str) -> Result<Velocity, ProtocolError> {
        Ok(Velocity::coerced(self.parse(x)?, self.parse(y)?))
    }

    fn finish(mut self) -> Result<(), ProtocolError> {
        match self.inner.next() {
            None => Ok(()),
            Some(extra) => {
                let rest: Vec<&str> = std::iter::once(extra).chain(self.inner).collect();
                Err(ProtocolError::TrailingInput(rest.join(" ")))
            }
        }
    }
}

/// Decodes the setup line `"<hunter|prey> <next_wall_interval> <max_walls>"`.
pub fn decode_setup(line: &str) -> Result<(Role, GameConfig), ProtocolError> {
    let mut fields = Fields::new(line);
    let role = match fields.token("role")? {
        "hunter" => Role::Hunter,
        "prey" => Role::Prey,
        other => return Err(ProtocolError::UnknownRole(other.to_string())),
    };
    let config = GameConfig::new(fields.parse("next_wall_interval")?, fields.parse("max_walls")?);
    fields.finish()?;
    Ok((role, config))
}

/// Decodes one per-tick state line.
///
/// Layout: `tick hx hy hvx hvy last_wall|null px py pvx pvy n_walls` followed
/// by `n_walls` groups of `x1 y1 x2 y2`. Velocities are coerced to their sign.
pub fn decode_snapshot(line: &str) -> Result<GameSnapshot, ProtocolError> {
    let mut fields = Fields::new(line);

    let tick = fields.parse("tick")?;
    let hunter_position = fields.point("hunter_x", "hunter_y")?;
    let hunter_velocity = fields.velocity("hunter_vx", "hunter_vy")?;
    let hunter_last_wall = match fields.token("hunter_last_wall")? {
        "null" => None,
        raw => Some(raw.parse().map_err(|_| ProtocolError::InvalidField {
            field: "hunter_last_wall",
            value: raw.to_string(),
        })?),
    };
    let prey_position = fields.point("prey_x", "prey_y")?;
    let prey_velocity = fields.velocity("prey_vx", "prey_vy")?;

    let n_walls: usize = fields.parse("n_walls")?;
    let mut walls = Vec::with_capacity(n_walls.min(MAX_PREALLOCATED_WALLS));
    for _ in 0..n_walls {
        walls.push(Wall::new(
            fields.parse("wall_x1")?,
            fields.parse("wall_y1")?,
            fields.parse("wall_x2")?,
            fields.parse("wall_y2")?,
        ));
    }
    fields.finish()?;

    Ok(GameSnapshot {
        tick,
        hunter_position,
        hunter_velocity,
        hunter_last_wall,
        prey_position,
        prey_velocity,
        walls,
    })
}

/// Encodes one snapshot back into a state line.
pub fn encode_snapshot(snapshot: &GameSnapshot) -> String {
    let last_wall = snapshot
        .hunter_last_wall
        .map_or_else(|| "null".to_string(), |t| t.to_string());
    let mut line = format!(
        "{} {} {} {} {} {} {} {} {} {} {}",
        snapshot.tick,
        snapshot.hunter_position.x,
        snapshot.hunter_position.y,
        snapshot.hunter_velocity.x,
        snapshot.hunter_velocity.y,
        last_wall,
        snapshot.prey_position.x,
        snapshot.prey_position.y,
        snapshot.prey_velocity.x,
        snapshot.prey_velocity.y,
        snapshot.walls.len(),
    );
    for wall in &snapshot.walls {
        line.push(' ');
        line.push_str(&wall.to_string());
    }
    line
}

/// Encodes an action as a command line (without trailing newline).
pub fn encode_action(action: &Action) -> String {
    match action {
        Action::NoOp => "none".to_string(),
        Action::CreateWall(segment) => format!("create {}", segment.to_wall()),
        Action::RemoveWalls(segments) if segments.is_empty() => "none".to_string(),
        Action::RemoveWalls(segments) => {
            let walls: Vec<String> = segments.iter().map(|s| s.to_wall().to_string()).collect();
            format!("remove {}", walls.join(" "))
        }
        Action::ChangeVelocity(v) => format!("change {} {}", v.x, v.y),
    }
}

/// Returns true if `line` signals the end of the game.
pub fn is_end_of_game(line: &str) -> bool {
    line.trim() == END_OF_GAME
}
