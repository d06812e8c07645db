#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use direction::*;
pub use engine::*;
pub use error::*;
pub use evaluator::*;
pub use resolver::*;
pub use spawner::*;
pub use types::*;

mod board;
mod direction;
mod engine;
mod error;
mod evaluator;
mod resolver;
mod spawner;
mod types;

pub const MIN_SIZE: Coord = 2;
pub const MAX_SIZE: Coord = 16;
pub const DEFAULT_SIZE: Coord = 4;
pub const DEFAULT_WIN_VALUE: Tile = 2048;

/// Smallest win value that a single merge can produce.
pub const MIN_WIN_VALUE: Tile = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub win_value: Tile,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, win_value: Tile) -> Self {
        Self { size, win_value }
    }

    /// Clamps the size into `MIN_SIZE..=MAX_SIZE` and rounds the win value up
    /// to a power of two in `MIN_WIN_VALUE..=MAX_TILE`.
    pub fn new(size: Coord, win_value: Tile) -> Self {
        let clamped_size = size.clamp(MIN_SIZE, MAX_SIZE);
        if clamped_size != size {
            log::warn!("Board size {size} unsupported, using {clamped_size}");
        }

        let rounded_win = win_value
            .clamp(MIN_WIN_VALUE, MAX_TILE)
            .next_power_of_two();
        if rounded_win != win_value {
            log::warn!("Win value {win_value} is not a reachable tile, using {rounded_win}");
        }

        Self::new_unchecked(clamped_size, rounded_win)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, DEFAULT_WIN_VALUE)
    }
}

/// What a single call to [`GridEngine::apply_move`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// At least one tile slid or merged.
    pub changed: bool,
    /// Sum of all merge results of this move.
    pub score_delta: Score,
    /// A merge of this move produced the win value.
    pub won: bool,
}

impl MoveResult {
    pub const fn has_update(self) -> bool {
        self.changed
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    /// Lost is the only outcome that stops accepting moves.
    pub const fn accepts_moves(self) -> bool {
        !matches!(self, Self::Lost)
    }
}

impl Default for GameOutcome {
    fn default() -> Self {
        Self::InProgress
    }
}
