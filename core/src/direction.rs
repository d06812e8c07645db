use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Direction tiles travel in during a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit step a tile takes towards the target edge.
    pub const fn delta(self) -> Delta {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Order in which cells are resolved on a `size`×`size` board.
    ///
    /// Lines (rows for horizontal moves, columns for vertical ones) are visited
    /// in ascending order. Within a line the cell on the target edge is skipped
    /// and the rest are visited from the one next to the target edge towards the
    /// far edge, so every tile only looks at cells that have already settled.
    pub fn traversal(self, size: Coord) -> impl Iterator<Item = Coord2> {
        let toward_start = matches!(self, Self::Up | Self::Left);
        let horizontal = self.is_horizontal();
        let movable = size.saturating_sub(1);

        (0..size).flat_map(move |line| {
            (0..movable).map(move |step| {
                let pos = if toward_start {
                    step + 1
                } else {
                    movable - 1 - step
                };
                if horizontal { (line, pos) } else { (pos, line) }
            })
        })
    }

    /// Maps a key or command name to a direction.
    ///
    /// Accepts the `ArrowUp`/`ArrowDown`/`ArrowLeft`/`ArrowRight` key names as
    /// well as the plain words, case-insensitively.
    pub fn from_key_name(name: &str) -> Result<Self> {
        let name = name.trim();
        let word = name.strip_prefix("Arrow").unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|direction| word.eq_ignore_ascii_case(direction.name()))
            .ok_or(GameError::InvalidDirection)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key_name(s)
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(GameError::InvalidDirection)
    }
}
