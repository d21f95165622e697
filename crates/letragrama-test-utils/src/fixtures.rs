//! Reusable boards and words.
//!
//! - [`empty_board`]: a blank board of any size
//! - [`reference_board`]: the blank 8×6 board used by the editor
//! - [`perimeter_path`]: a clockwise walk around the rim
//! - [`word_of_len`]: a filler word of a given length

use letragrama_board::Board;
use letragrama_core::Cell;
use letragrama_grid::Grid;

/// A blank `rows × cols` board.
pub fn empty_board(rows: u32, cols: u32) -> Board {
    Board::new(Grid::new(rows, cols).expect("fixture grid dimensions"))
}

/// The blank 8×6 board.
pub fn reference_board() -> Board {
    empty_board(8, 6)
}

/// Every rim cell, walked clockwise from the top-left corner.
///
/// Ends on the cell below the top-left corner, so both endpoints lie on
/// the border. Grids with fewer than two rows or columns are walked as a
/// single line.
pub fn perimeter_path(grid: &Grid) -> Vec<Cell> {
    let (rows, cols) = (grid.rows() as i32, grid.cols() as i32);
    if rows == 1 {
        return (0..cols).map(|c| Cell::new(0, c)).collect();
    }
    if cols == 1 {
        return (0..rows).map(|r| Cell::new(r, 0)).collect();
    }
    let top = (0..cols).map(|c| Cell::new(0, c));
    let right = (1..rows).map(|r| Cell::new(r, cols - 1));
    let bottom = (0..cols - 1).rev().map(|c| Cell::new(rows - 1, c));
    let left = (1..rows - 1).rev().map(|r| Cell::new(r, 0));
    top.chain(right).chain(bottom).chain(left).collect()
}

/// `len` letters cycling through the alphabet: `ABCDE...`.
pub fn word_of_len(len: usize) -> String {
    (b'A'..=b'Z').cycle().take(len).map(char::from).collect()
}
