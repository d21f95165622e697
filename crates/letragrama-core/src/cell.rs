//! Grid cell coordinates and king-move adjacency.

use std::fmt;

/// All 8 king-move offsets as `(d_row, d_col)`: S, N, E, W, SE, SW, NE, NW.
pub const KING_DELTAS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// A cell coordinate `(row, col)` on the puzzle grid.
///
/// Row 0 is the top row. Coordinates are signed so that neighbour offsets
/// can step off the board before bounds checking; a cell is only meaningful
/// for a grid once the grid has confirmed it is in bounds.
///
/// Ordering is row-major, which matches the grid's canonical ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: i32,
    /// Column index, left to right.
    pub col: i32,
}

impl Cell {
    /// Create a cell at `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// True if `other` is exactly one king move away.
    ///
    /// A cell is not adjacent to itself.
    pub fn is_adjacent(self, other: Cell) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }

    /// Chebyshev (L-inf) distance, the number of king moves between cells.
    pub fn chebyshev(self, other: Cell) -> u32 {
        let dr = (self.row - other.row).unsigned_abs();
        let dc = (self.col - other.col).unsigned_abs();
        dr.max(dc)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
