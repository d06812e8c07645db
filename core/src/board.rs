use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of tiles, row-major, 0 marks an empty cell.
///
/// Every constructor checks that the grid is square, that its side lies in
/// `MIN_SIZE..=MAX_SIZE` and that each value is 0 or a power of two of at
/// least 2. Cells are only written by the move resolver and the spawner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Tile>", into = "Array2<Tile>")]
pub struct Board {
    cells: Array2<Tile>,
}

impl Board {
    /// Empty board, `size` is clamped to the supported range.
    pub fn new(size: Coord) -> Self {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        Self {
            cells: Array2::default((size, size).to_nd_index()),
        }
    }

    pub fn from_rows<const N: usize>(rows: [[Tile; N]; N]) -> Result<Self> {
        let size = Coord::try_from(N).map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_shape_vec(size, rows.iter().flatten().copied().collect())
    }

    /// Builds a board from `size * size` values in row-major order.
    pub fn from_shape_vec(size: Coord, cells: Vec<Tile>) -> Result<Self> {
        let side = usize::from(size);
        let cells = Array2::from_shape_vec((side, side), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::try_from(cells)
    }

    pub fn size(&self) -> Coord {
        // checked on construction
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn value_at(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn is_empty(&self, coords: Coord2) -> Result<bool> {
        self.value_at(coords).map(|value| value == 0)
    }

    /// Read-only view of all cell values.
    pub fn view(&self) -> ArrayView2<'_, Tile> {
        self.cells.view()
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord2> {
        self.iter_coords().filter(|&coords| self[coords] == 0).collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    pub fn tile_count(&self) -> usize {
        self.total_cells() - self.empty_count()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    pub(crate) fn set(&mut self, coords: Coord2, value: Tile) {
        self.cells[coords.to_nd_index()] = value;
    }

    pub(crate) fn iter_forward_neighbors(&self, coords: Coord2) -> ForwardNeighborIter {
        self.cells.iter_forward_neighbors(coords)
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<Tile>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let supported = usize::from(MIN_SIZE)..=usize::from(MAX_SIZE);
        if rows != cols || !supported.contains(&rows) {
            return Err(GameError::InvalidBoardShape);
        }
        if !cells.iter().all(|&value| is_valid_tile(value)) {
            return Err(GameError::InvalidTile);
        }
        Ok(Self { cells })
    }
}

impl From<Board> for Array2<Tile> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .max_tile()
            .checked_ilog10()
            .map_or(1, |digits| digits as usize + 1);

        for row in self.cells.rows() {
            for (col, &value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(4);

        assert_eq!(board.size(), 4);
        assert_eq!(board.empty_count(), 16);
        assert_eq!(board.max_tile(), 0);
        assert_eq!(board.empty_cells().len(), 16);
    }

    #[test]
    fn new_board_clamps_size() {
        assert_eq!(Board::new(0).size(), MIN_SIZE);
        assert_eq!(Board::new(200).size(), MAX_SIZE);
    }

    #[test]
    fn accessors_reject_out_of_range_coords() {
        let board = Board::from_rows([[2, 0], [0, 4]]).unwrap();

        assert_eq!(board.value_at((1, 1)), Ok(4));
        assert_eq!(board.is_empty((0, 1)), Ok(true));
        assert_eq!(board.is_empty((0, 0)), Ok(false));
        assert_eq!(board.value_at((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.is_empty((0, 2)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn rejects_bad_shapes_and_values() {
        assert_eq!(
            Board::from_shape_vec(3, vec![0; 8]),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Board::from_rows([[2]]),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Board::from_rows([[2, 3], [0, 0]]),
            Err(GameError::InvalidTile)
        );
        assert_eq!(
            Board::from_rows([[1, 0], [0, 0]]),
            Err(GameError::InvalidTile)
        );
    }

    #[test]
    fn empty_cells_are_row_major() {
        let board = Board::from_rows([[2, 0, 4], [0, 8, 0], [2, 2, 2]]).unwrap();

        assert_eq!(board.empty_cells(), vec![(0, 1), (1, 0), (1, 2)]);
        assert_eq!(board.to_rows(), vec![vec![2, 0, 4], vec![0, 8, 0], vec![2, 2, 2]]);
        assert_eq!(board.tile_count(), 6);
        assert_eq!(board.tile_sum(), 20);
    }

    #[test]
    fn display_aligns_columns() {
        let board = Board::from_rows([[2, 0], [128, 16]]).unwrap();

        assert_eq!(board.to_string(), "  2   .\n128  16\n");
    }

    #[test]
    fn serde_validates_on_the_way_in() {
        let board = Board::from_rows([[2, 0], [0, 4]]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);

        let tampered = json.replace('4', "5");
        assert!(serde_json::from_str::<Board>(&tampered).is_err());
    }
}
