use rand::prelude::*;

use crate::*;

/// Chance that a spawned tile is a 4 instead of a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Number of tiles placed on a fresh board.
pub const INITIAL_TILES: usize = 2;

/// Picks where the next tile appears and what it holds.
pub trait TileSpawner {
    /// Returns one of `empty_cells` and a tile value, or `None` to skip.
    /// Never called with an empty slice.
    fn pick(&mut self, empty_cells: &[Coord2]) -> Option<(Coord2, Tile)>;
}

impl<S: TileSpawner + ?Sized> TileSpawner for &mut S {
    fn pick(&mut self, empty_cells: &[Coord2]) -> Option<(Coord2, Tile)> {
        (**self).pick(empty_cells)
    }
}

/// Uniform cell choice, 2 with probability 0.9 and 4 otherwise.
#[derive(Clone, Debug)]
pub struct RandomSpawner {
    rng: SmallRng,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TileSpawner for RandomSpawner {
    fn pick(&mut self, empty_cells: &[Coord2]) -> Option<(Coord2, Tile)> {
        if empty_cells.is_empty() {
            return None;
        }
        let coords = empty_cells[self.rng.random_range(0..empty_cells.len())];
        let value = if self.rng.random_bool(FOUR_PROBABILITY) {
            4
        } else {
            2
        };
        Some((coords, value))
    }
}

impl Board {
    /// Places one tile chosen by `spawner` into an empty cell.
    ///
    /// A full board is a no-op. Picks that name an occupied or out-of-range
    /// cell, or a value that is not a power of two, are ignored.
    pub fn spawn_tile<S: TileSpawner + ?Sized>(&mut self, spawner: &mut S) -> Option<Coord2> {
        let empty_cells = self.empty_cells();
        if empty_cells.is_empty() {
            log::trace!("No empty cell to spawn into");
            return None;
        }

        let (coords, value) = spawner.pick(&empty_cells)?;
        if value == 0 || !is_valid_tile(value) || self.is_empty(coords) != Ok(true) {
            log::warn!("Spawner picked {value} at {coords:?}, ignored");
            return None;
        }

        self.set(coords, value);
        log::trace!("Spawned {value} at {coords:?}");
        Some(coords)
    }
}
