use ndarray::Array2;

use crate::*;

/// Result of sliding a whole board once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideSummary {
    pub changed: bool,
    pub score_delta: Score,
    /// Some merge produced the win value.
    pub reached_win: bool,
}

/// Value produced by merging `moving` into `resting`, if they may merge.
fn merge_value(moving: Tile, resting: Tile) -> Option<Tile> {
    if moving != resting {
        return None;
    }
    moving.checked_mul(2).filter(|&doubled| doubled <= MAX_TILE)
}

impl Board {
    /// Slides every tile as far as it goes towards `direction`, merging equal
    /// neighbours.
    ///
    /// Tiles are resolved in [`Direction::traversal`] order. A tile walks
    /// through empty cells until it meets another tile; if both hold the same
    /// value and the other one was not itself produced by a merge during this
    /// slide, they merge and the walk ends. Reaching `win_value` does not cut
    /// the slide short. Two tiles of `MAX_TILE` never merge.
    ///
    /// The merged-cell guard is deliberate: without it `[2, 2, 4, 0]` moved
    /// left would chain into `[8, 0, 0, 0]`; with it the result is
    /// `[4, 4, 0, 0]`, so no tile takes part in two merges in one move.
    pub fn slide(&mut self, direction: Direction, win_value: Tile) -> SlideSummary {
        let size = self.size();
        let delta = direction.delta();
        let mut merged: Array2<bool> = Array2::default((size, size).to_nd_index());
        let mut summary = SlideSummary::default();

        for start in direction.traversal(size) {
            let value = self[start];
            if value == 0 {
                continue;
            }

            let mut current = start;
            while let Some(next) = apply_delta(current, delta, size) {
                let next_value = self[next];

                if next_value == 0 {
                    self.set(next, value);
                    self.set(current, 0);
                    current = next;
                    summary.changed = true;
                } else if let Some(doubled) = merge_value(value, next_value)
                    && !merged[next.to_nd_index()]
                {
                    self.set(next, doubled);
                    self.set(current, 0);
                    merged[next.to_nd_index()] = true;
                    summary.changed = true;
                    summary.score_delta += Score::from(doubled);
                    if doubled == win_value {
                        summary.reached_win = true;
                    }
                    break;
                } else {
                    break;
                }
            }
        }

        summary
    }

    /// Like [`Board::slide`] but on a copy, leaving `self` untouched.
    pub fn slid(&self, direction: Direction, win_value: Tile) -> (Board, SlideSummary) {
        let mut board = self.clone();
        let summary = board.slide(direction, win_value);
        (board, summary)
    }

    pub fn can_slide(&self, direction: Direction) -> bool {
        self.slid(direction, 0).1.changed
    }
}
