//! Test utilities for Letragrama development.
//!
//! Provides deterministic RNG construction, fixture boards (see
//! [`fixtures`]) and [`assert_board_invariants`], which re-checks every
//! board invariant from scratch instead of trusting derived state.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashSet;

use letragrama_board::Board;
use letragrama_core::{segments_intersect, Cell, Segment};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The RNG every test uses, seeded for reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Panic unless `path` is a well-formed word path on `board`'s grid:
/// `len` distinct in-bounds cells, king-move connected, with no connector
/// crossing another connector of the same path.
pub fn assert_path_shape(board: &Board, path: &[Cell], len: usize) {
    assert_eq!(path.len(), len, "path {path:?} should have {len} cells");
    let mut seen = HashSet::new();
    for cell in path {
        assert!(board.grid().contains(*cell), "{cell} is out of bounds");
        assert!(seen.insert(*cell), "{cell} appears twice in {path:?}");
    }
    let segments: Vec<Segment> = path.windows(2).map(|p| Segment::new(p[0], p[1])).collect();
    for (i, s) in segments.iter().enumerate() {
        assert!(s.a.is_adjacent(s.b), "{s} is not a king move");
        for other in &segments[..i] {
            assert!(!segments_intersect(s, other), "{s} crosses {other}");
        }
    }
}

/// Panic unless `board` satisfies every board invariant.
///
/// Checks are made against the words themselves: paths well formed, no
/// shared cells, no crossing connectors across the whole board, at most one
/// spangram with both endpoints on the border, and derived ownership and
/// letters in agreement with the words.
pub fn assert_board_invariants(board: &Board) {
    let grid = board.grid();
    let mut owners: HashSet<Cell> = HashSet::new();
    let mut all_segments: Vec<Segment> = Vec::new();

    for (index, word) in board.words().iter().enumerate() {
        assert_path_shape(board, &word.path, word.word.chars().count());
        for (cell, letter) in word.letters() {
            assert!(owners.insert(cell), "{cell} belongs to two words");
            assert_eq!(board.owner(cell), Some(index), "owner of {cell}");
            assert_eq!(board.letter(cell), Some(letter), "letter at {cell}");
            assert_eq!(board.fill_letter(cell), None, "fill under '{}'", word.word);
        }
        all_segments.extend(word.segments());
    }

    for (i, s) in all_segments.iter().enumerate() {
        for other in &all_segments[i + 1..] {
            assert!(!segments_intersect(s, other), "{s} crosses {other}");
        }
    }
    assert_eq!(board.segments().len(), all_segments.len());

    let spangrams: Vec<_> = board.words().iter().filter(|w| w.is_spangram).collect();
    assert!(spangrams.len() <= 1, "{} spangrams", spangrams.len());
    if let Some(s) = spangrams.first() {
        for end in [s.first(), s.last()].into_iter().flatten() {
            assert!(grid.is_border(end), "spangram endpoint {end} off the border");
        }
    }

    assert_eq!(board.occupied_count(), owners.len());
}

/// Panic unless the spangram exists and runs between opposite borders.
pub fn assert_spangram_spans(board: &Board) {
    let spangram = board.spangram().expect("board has no spangram");
    let (first, last) = (spangram.path[0], spangram.path[spangram.path.len() - 1]);
    let grid = board.grid();
    assert!(
        grid.borders(last).intersects(grid.borders(first).opposites()),
        "spangram runs from {first} ({}) to {last} ({})",
        grid.borders(first),
        grid.borders(last)
    );
}
