use crate::*;

impl Board {
    /// Some cell holds exactly `win_value`.
    pub fn has_reached(&self, win_value: Tile) -> bool {
        self.view().iter().any(|&value| value == win_value)
    }

    /// No empty cell and no orthogonally adjacent pair of equal tiles that may
    /// still merge, so no direction can change the board.
    pub fn is_stuck(&self) -> bool {
        for coords in self.iter_coords() {
            let value = self[coords];
            if value == 0 {
                return false;
            }
            if self
                .iter_forward_neighbors(coords)
                .any(|neighbor| self[neighbor] == value && value < MAX_TILE)
            {
                return false;
            }
        }
        true
    }
}

/// Derives the outcome from the board alone. A stuck board is lost even if it
/// also holds the win value, since it can no longer accept moves.
pub fn evaluate(board: &Board, win_value: Tile) -> GameOutcome {
    if board.is_stuck() {
        GameOutcome::Lost
    } else if board.has_reached(win_value) {
        GameOutcome::Won
    } else {
        GameOutcome::InProgress
    }
}
