//! Rectangular grid with an 8-connected (king move) neighbourhood.

use crate::error::GridError;
use letragrama_core::{Border, BorderSet, Cell, KING_DELTAS};
use smallvec::SmallVec;

/// A `rows × cols` puzzle grid.
///
/// Each cell has coordinate `(row, col)` with row 0 at the top. Neighbours
/// are the four cardinal plus four diagonal cells; out-of-bounds neighbours
/// are omitted, so corners have 3 neighbours, edge cells 5 and interior
/// cells 8. Distance is Chebyshev, matching king-move semantics.
///
/// Cells have a canonical row-major rank `row * cols + col`, which board
/// state uses as a dense index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u32,
    cols: u32,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new grid with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Returns `true` if `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows as i32 && cell.col >= 0 && cell.col < self.cols as i32
    }

    /// Bounds-check `cell`.
    pub fn check(&self, cell: Cell) -> Result<(), GridError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::CellOutOfBounds {
                cell,
                bounds: format!("[0, {}) x [0, {})", self.rows, self.cols),
            })
        }
    }

    /// Row-major rank of `cell`, or `None` if out of bounds.
    pub fn rank(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.row as usize) * (self.cols as usize) + cell.col as usize)
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn cell_at(&self, rank: usize) -> Option<Cell> {
        if rank >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Cell::new((rank / cols) as i32, (rank % cols) as i32))
    }

    /// All cells in canonical row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
    }

    /// In-bounds king-move neighbours of `cell`, in [`KING_DELTAS`] order.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 8]> {
        KING_DELTAS
            .iter()
            .map(|&(dr, dc)| cell.offset(dr, dc))
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// Borders touched by `cell`: empty for interior cells, two for corners.
    ///
    /// On a one-row grid every cell touches both top and bottom.
    pub fn borders(&self, cell: Cell) -> BorderSet {
        let mut set = BorderSet::empty();
        if !self.contains(cell) {
            return set;
        }
        if cell.row == 0 {
            set.insert(Border::Top);
        }
        if cell.row == self.rows as i32 - 1 {
            set.insert(Border::Bottom);
        }
        if cell.col == 0 {
            set.insert(Border::Left);
        }
        if cell.col == self.cols as i32 - 1 {
            set.insert(Border::Right);
        }
        set
    }

    /// Returns `true` if `cell` touches any border.
    pub fn is_border(&self, cell: Cell) -> bool {
        !self.borders(cell).is_empty()
    }

    /// All rim cells in canonical order.
    pub fn border_cells(&self) -> Vec<Cell> {
        self.cells().filter(|c| self.is_border(*c)).collect()
    }

    /// King moves from `cell` to the line of `border`.
    pub fn distance_to_border(&self, cell: Cell, border: Border) -> u32 {
        let d = match border {
            Border::Top => cell.row,
            Border::Bottom => self.rows as i32 - 1 - cell.row,
            Border::Left => cell.col,
            Border::Right => self.cols as i32 - 1 - cell.col,
        };
        d.max(0) as u32
    }

    /// King moves from `cell` to the nearest border in `targets`, or
    /// `None` if `targets` is empty.
    pub fn distance_to_any(&self, cell: Cell, targets: BorderSet) -> Option<u32> {
        targets
            .iter()
            .map(|b| self.distance_to_border(cell, b))
            .min()
    }

    /// The spangram edge contract: `last` touches a border facing one of
    /// the borders touched by `first`.
    ///
    /// Corner starts count for either facing edge.
    pub fn spans_opposite(&self, first: Cell, last: Cell) -> bool {
        self.borders(last)
            .intersects(self.borders(first).opposites())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(r: i32, col: i32) -> Cell {
        Cell::new(r, col)
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(g.neighbours(c(2, 2)).len(), 8);
    }

    #[test]
    fn neighbours_corner() {
        let g = Grid::new(5, 5).unwrap();
        let n = g.neighbours(c(0, 0));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
        assert!(n.contains(&c(1, 1)));
    }

    #[test]
    fn neighbours_edge() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(g.neighbours(c(0, 2)).len(), 5);
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let g = Grid::new(1, 1).unwrap();
        assert!(g.neighbours(c(0, 0)).is_empty());
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_rows_returns_error() {
        assert_eq!(Grid::new(0, 5), Err(GridError::EmptyGrid));
        assert_eq!(Grid::new(5, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Grid::new(5, big),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    // ── Rank tests ──────────────────────────────────────────────

    #[test]
    fn rank_is_row_major() {
        let g = Grid::new(8, 6).unwrap();
        assert_eq!(g.rank(c(0, 0)), Some(0));
        assert_eq!(g.rank(c(1, 0)), Some(6));
        assert_eq!(g.rank(c(7, 5)), Some(47));
        assert_eq!(g.rank(c(8, 0)), None);
        assert_eq!(g.rank(c(0, -1)), None);
        assert_eq!(g.cell_at(47), Some(c(7, 5)));
        assert_eq!(g.cell_at(48), None);
    }

    #[test]
    fn cells_are_canonical() {
        let g = Grid::new(3, 2).unwrap();
        let cells: Vec<_> = g.cells().collect();
        assert_eq!(cells.len(), 6);
        let mut sorted = cells.clone();
        sorted.sort();
        assert_eq!(cells, sorted);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(g.rank(*cell), Some(i));
        }
    }

    #[test]
    fn check_reports_bounds() {
        let g = Grid::new(8, 6).unwrap();
        assert!(g.check(c(7, 5)).is_ok());
        let err = g.check(c(8, 5)).unwrap_err();
        assert_eq!(err.to_string(), "cell (8, 5) out of bounds: [0, 8) x [0, 6)");
    }

    // ── Border tests ────────────────────────────────────────────

    #[test]
    fn border_sets() {
        let g = Grid::new(8, 6).unwrap();
        assert!(g.borders(c(3, 3)).is_empty());
        assert_eq!(g.borders(c(0, 3)), BorderSet::from([Border::Top]));
        assert_eq!(g.borders(c(7, 2)), BorderSet::from([Border::Bottom]));
        assert_eq!(g.borders(c(4, 0)), BorderSet::from([Border::Left]));
        assert_eq!(g.borders(c(4, 5)), BorderSet::from([Border::Right]));
        assert_eq!(
            g.borders(c(7, 5)),
            BorderSet::from([Border::Bottom, Border::Right])
        );
        assert!(g.borders(c(9, 9)).is_empty());
    }

    #[test]
    fn border_cell_count_is_perimeter() {
        let g = Grid::new(8, 6).unwrap();
        assert_eq!(g.border_cells().len(), 2 * (8 + 6) - 4);
        let thin = Grid::new(1, 4).unwrap();
        assert_eq!(thin.border_cells().len(), 4);
    }

    #[test]
    fn distances_to_borders() {
        let g = Grid::new(8, 6).unwrap();
        let cell = c(2, 4);
        assert_eq!(g.distance_to_border(cell, Border::Top), 2);
        assert_eq!(g.distance_to_border(cell, Border::Bottom), 5);
        assert_eq!(g.distance_to_border(cell, Border::Left), 4);
        assert_eq!(g.distance_to_border(cell, Border::Right), 1);
        assert_eq!(
            g.distance_to_any(cell, BorderSet::from([Border::Bottom, Border::Left])),
            Some(4)
        );
        assert_eq!(g.distance_to_any(cell, BorderSet::empty()), None);
    }

    #[test]
    fn spans_opposite_edges() {
        let g = Grid::new(8, 6).unwrap();
        assert!(g.spans_opposite(c(0, 2), c(7, 3)));
        assert!(g.spans_opposite(c(3, 0), c(1, 5)));
        assert!(!g.spans_opposite(c(0, 2), c(0, 4)));
        assert!(!g.spans_opposite(c(0, 2), c(4, 5)));
        assert!(!g.spans_opposite(c(3, 3), c(7, 3)));
    }

    #[test]
    fn corner_start_spans_to_either_facing_edge() {
        let g = Grid::new(8, 6).unwrap();
        // Top-left corner: bottom or right both satisfy.
        assert!(g.spans_opposite(c(0, 0), c(7, 2)));
        assert!(g.spans_opposite(c(0, 0), c(3, 5)));
        assert!(!g.spans_opposite(c(0, 0), c(0, 3)));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_symmetric(
            rows in 1u32..10,
            cols in 1u32..10,
            r in 0i32..10, col in 0i32..10,
        ) {
            let g = Grid::new(rows, cols).unwrap();
            let cell = c(r % rows as i32, col % cols as i32);
            for nb in g.neighbours(cell) {
                prop_assert!(g.contains(nb));
                prop_assert!(cell.is_adjacent(nb));
                prop_assert!(
                    g.neighbours(nb).contains(&cell),
                    "neighbour symmetry violated: {} in N({}) but not vice versa",
                    nb, cell,
                );
            }
        }

        #[test]
        fn rank_round_trips(rows in 1u32..12, cols in 1u32..12, rank in 0usize..144) {
            let g = Grid::new(rows, cols).unwrap();
            match g.cell_at(rank) {
                Some(cell) => prop_assert_eq!(g.rank(cell), Some(rank)),
                None => prop_assert!(rank >= g.cell_count()),
            }
        }
    }
}
