//! Randomized depth-first path search over the king-move graph.
//!
//! A path must be self-avoiding, stay off cells owned by committed words,
//! and none of its connectors may cross a committed connector or an earlier
//! connector of the same path. The search explores neighbours in a fresh
//! random order at every step, so repeated calls with different RNG state
//! produce different shapes, while equal RNG state reproduces the same path.

use crate::error::PlacementError;
use letragrama_board::Board;
use letragrama_core::{BorderSet, Cell, Segment};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Find a path of `len` cells starting at `start`.
///
/// Nothing is committed to the board.
///
/// # Errors
///
/// - [`PlacementError::InvalidLength`] if `len == 0`
/// - [`PlacementError::CellOutOfBounds`] / [`PlacementError::StartOccupied`]
///   if `start` cannot begin a path
/// - [`PlacementError::PathNotFound`] once every branch is exhausted
pub fn find_path<R: Rng + ?Sized>(
    board: &Board,
    start: Cell,
    len: usize,
    rng: &mut R,
) -> Result<Vec<Cell>, PlacementError> {
    PathSearch::new(board, len, None).run(start, rng)
}

/// Like [`find_path`], but only accept paths whose last cell touches one of
/// `targets`.
///
/// Branches that can no longer reach a target border in the remaining
/// steps are cut off early. An empty `targets` set never matches.
pub fn find_path_to<R: Rng + ?Sized>(
    board: &Board,
    start: Cell,
    len: usize,
    targets: BorderSet,
    rng: &mut R,
) -> Result<Vec<Cell>, PlacementError> {
    PathSearch::new(board, len, Some(targets)).run(start, rng)
}

/// Scratch state for one search. Dropped when the search returns.
struct PathSearch<'a> {
    board: &'a Board,
    len: usize,
    targets: Option<BorderSet>,
    visited: Vec<bool>,
    path: Vec<Cell>,
    segments: Vec<Segment>,
    expanded: u64,
}

impl<'a> PathSearch<'a> {
    fn new(board: &'a Board, len: usize, targets: Option<BorderSet>) -> Self {
        Self {
            board,
            len,
            targets,
            visited: vec![false; board.grid().cell_count()],
            path: Vec::with_capacity(len),
            segments: Vec::with_capacity(len.saturating_sub(1)),
            expanded: 0,
        }
    }

    fn run<R: Rng + ?Sized>(
        mut self,
        start: Cell,
        rng: &mut R,
    ) -> Result<Vec<Cell>, PlacementError> {
        if self.len == 0 {
            return Err(PlacementError::InvalidLength);
        }
        let board = self.board;
        let Some(rank) = board.grid().rank(start) else {
            return Err(PlacementError::CellOutOfBounds { cell: start });
        };
        if board.is_occupied(start) {
            return Err(PlacementError::StartOccupied { cell: start });
        }
        if self.len > board.free_count() || !self.reachable(start, self.len - 1) {
            return Err(PlacementError::PathNotFound);
        }

        self.visited[rank] = true;
        self.path.push(start);
        if self.extend(rng) {
            log::debug!(
                "path of {} from {start} after {} expansions",
                self.len,
                self.expanded
            );
            Ok(self.path)
        } else {
            log::debug!(
                "no path of {} from {start} after {} expansions",
                self.len,
                self.expanded
            );
            Err(PlacementError::PathNotFound)
        }
    }

    /// Whether a target border is still within `steps` king moves of `cell`.
    fn reachable(&self, cell: Cell, steps: usize) -> bool {
        match self.targets {
            None => true,
            Some(targets) => self
                .board
                .grid()
                .distance_to_any(cell, targets)
                .is_some_and(|d| d as usize <= steps),
        }
    }

    fn extend<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(&current) = self.path.last() else {
            return false;
        };
        if self.path.len() == self.len {
            return self.reachable(current, 0);
        }
        self.expanded += 1;

        let board = self.board;
        let grid = board.grid();
        let remaining = self.len - self.path.len() - 1;
        let mut candidates: SmallVec<[(usize, Cell); 8]> = grid
            .neighbours(current)
            .into_iter()
            .filter_map(|n| grid.rank(n).map(|i| (i, n)))
            .filter(|&(i, n)| !self.visited[i] && !board.is_occupied(n))
            .collect();
        candidates.shuffle(rng);

        for (rank, next) in candidates {
            if !self.reachable(next, remaining) {
                continue;
            }
            let segment = Segment::new(current, next);
            if segment.crosses_any(&self.segments) || segment.crosses_any(board.segments()) {
                continue;
            }

            self.visited[rank] = true;
            self.path.push(next);
            self.segments.push(segment);
            if self.extend(rng) {
                return true;
            }
            self.segments.pop();
            self.path.pop();
            self.visited[rank] = false;
        }
        false
    }
}
