use ndarray::Array2;

/// Single coordinate axis used for the board size and row/column positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Cell value: 0 for an empty cell, otherwise a power of two.
pub type Tile = u32;

/// Accumulated merge score.
pub type Score = u64;

/// Signed unit step `(d_row, d_col)`.
pub type Delta = (isize, isize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Largest tile a cell may hold; merging two of these is not allowed.
pub const MAX_TILE: Tile = 1 << (Tile::BITS - 2);

/// Whether `value` may appear in a cell.
pub const fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// Applies `delta` to `coords`, returning a value only when it stays inside a `size`×`size` grid.
pub fn apply_delta(coords: Coord2, delta: Delta, size: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}

/// Right and down neighbours. Visiting both from every cell covers each
/// orthogonally adjacent pair exactly once.
const FORWARD_DISPLACEMENTS: [Delta; 2] = [(0, 1), (1, 0)];

pub trait NeighborIterExt {
    fn iter_forward_neighbors(&self, index: Coord2) -> ForwardNeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_forward_neighbors(&self, index: Coord2) -> ForwardNeighborIter {
        // boards are square and never exceed `Coord::MAX` per side
        let size = self.nrows() as Coord;
        ForwardNeighborIter::new(index, size)
    }
}

#[derive(Debug)]
pub struct ForwardNeighborIter {
    center: Coord2,
    size: Coord,
    index: u8,
}

impl ForwardNeighborIter {
    fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for ForwardNeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= FORWARD_DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                FORWARD_DISPLACEMENTS[self.index as usize],
                self.size,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
