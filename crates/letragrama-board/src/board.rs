//! The puzzle board: committed words plus state derived from them.

use crate::error::BoardError;
use letragrama_core::{segments_intersect, Cell, PlacedWord, Segment};
use letragrama_grid::Grid;
use std::fmt;

/// A puzzle board: a [`Grid`] plus the words committed to it.
///
/// Ownership, segments and word letters are derived from `words` and are
/// recomputed after every successful mutation, never edited in place. Cell
/// lookups go through the grid's canonical rank, so "who owns this cell"
/// is O(1).
///
/// Invariants, checked before every mutation:
///
/// - each path is in bounds, self-avoiding and king-move connected;
/// - no cell belongs to two words;
/// - no two connectors cross unless they share an endpoint;
/// - at most one word is the spangram, and its endpoints lie on the border.
///
/// Fill letters are stored separately and only ever for uncovered cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    words: Vec<PlacedWord>,
    owners: Vec<Option<usize>>,
    letters: Vec<Option<char>>,
    fill: Vec<Option<char>>,
    segments: Vec<Segment>,
}

impl Board {
    /// An empty board on `grid`.
    pub fn new(grid: Grid) -> Self {
        let n = grid.cell_count();
        Self {
            grid,
            words: Vec::new(),
            owners: vec![None; n],
            letters: vec![None; n],
            fill: vec![None; n],
            segments: Vec::new(),
        }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Committed words in placement order.
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// The word at `index`, if any.
    pub fn word(&self, index: usize) -> Option<&PlacedWord> {
        self.words.get(index)
    }

    /// Number of committed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word is committed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The spangram, if one is placed.
    pub fn spangram(&self) -> Option<&PlacedWord> {
        self.words.iter().find(|w| w.is_spangram)
    }

    fn spangram_index(&self) -> Option<usize> {
        self.words.iter().position(|w| w.is_spangram)
    }

    /// Returns `true` if the spangram exists and its endpoints touch
    /// opposite borders.
    pub fn spangram_spans(&self) -> bool {
        match self.spangram().and_then(|w| w.first().zip(w.last())) {
            Some((first, last)) => self.grid.spans_opposite(first, last),
            None => false,
        }
    }

    /// Words authored by hand.
    pub fn locked_words(&self) -> impl Iterator<Item = &PlacedWord> {
        self.words.iter().filter(|w| w.locked)
    }

    /// Index of the word covering `cell`.
    pub fn owner(&self, cell: Cell) -> Option<usize> {
        self.grid.rank(cell).and_then(|i| self.owners[i])
    }

    /// Returns `true` if a word covers `cell`.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.owner(cell).is_some()
    }

    /// Number of cells covered by words.
    pub fn occupied_count(&self) -> usize {
        self.owners.iter().filter(|o| o.is_some()).count()
    }

    /// Number of cells not covered by any word.
    pub fn free_count(&self) -> usize {
        self.grid.cell_count() - self.occupied_count()
    }

    /// Cells not covered by any word, in canonical order.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.cells().filter(move |c| !self.is_occupied(*c))
    }

    /// All connectors of all committed words.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The letter shown at `cell`: the covering word's letter, else the
    /// fill letter.
    pub fn letter(&self, cell: Cell) -> Option<char> {
        let i = self.grid.rank(cell)?;
        self.letters[i].or(self.fill[i])
    }

    /// The fill letter at `cell`, if one was assigned.
    pub fn fill_letter(&self, cell: Cell) -> Option<char> {
        self.grid.rank(cell).and_then(|i| self.fill[i])
    }

    /// Assign a fill letter to an uncovered, unlettered cell.
    ///
    /// Returns `Ok(false)` without changing anything if `cell` already
    /// shows a letter.
    pub fn set_fill_letter(&mut self, cell: Cell, letter: char) -> Result<bool, BoardError> {
        self.grid.check(cell)?;
        let i = self.rank_of(cell);
        if self.letters[i].is_some() || self.fill[i].is_some() {
            return Ok(false);
        }
        self.fill[i] = Some(letter);
        Ok(true)
    }

    /// Remove every fill letter.
    pub fn clear_fill(&mut self) {
        self.fill.iter_mut().for_each(|f| *f = None);
    }

    /// Cells with no letter at all, in canonical order.
    pub fn unlettered_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.cells().filter(move |c| self.letter(*c).is_none())
    }

    /// Returns `true` if every cell shows a letter.
    pub fn is_fully_lettered(&self) -> bool {
        self.unlettered_cells().next().is_none()
    }

    /// One string per row, `'.'` for cells without a letter.
    pub fn letter_rows(&self) -> Vec<String> {
        (0..self.grid.rows() as i32)
            .map(|r| {
                (0..self.grid.cols() as i32)
                    .map(|c| self.letter(Cell::new(r, c)).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }

    /// Check whether `word` could be committed as-is.
    pub fn validate(&self, word: &PlacedWord) -> Result<(), BoardError> {
        self.check(word, None)
    }

    /// Commit `word`, returning its index.
    ///
    /// Fill letters on the newly covered cells are discarded.
    pub fn place(&mut self, word: PlacedWord) -> Result<usize, BoardError> {
        if let Err(e) = self.check(&word, None) {
            log::debug!("rejected placement of '{}': {e}", word.word);
            return Err(e);
        }
        self.words.push(word);
        self.rebuild();
        Ok(self.words.len() - 1)
    }

    /// Remove and return the word at `index`. Later indices shift down.
    pub fn remove(&mut self, index: usize) -> Result<PlacedWord, BoardError> {
        if index >= self.words.len() {
            return Err(BoardError::WordIndexOutOfRange {
                index,
                len: self.words.len(),
            });
        }
        let word = self.words.remove(index);
        self.rebuild();
        Ok(word)
    }

    /// Move letter `letter_index` of word `word_index` to `target`.
    ///
    /// The moved path must still satisfy every board invariant, and all
    /// connectors are recomputed afterwards.
    pub fn relocate(
        &mut self,
        word_index: usize,
        letter_index: usize,
        target: Cell,
    ) -> Result<(), BoardError> {
        let word = self
            .words
            .get(word_index)
            .ok_or(BoardError::WordIndexOutOfRange {
                index: word_index,
                len: self.words.len(),
            })?;
        if letter_index >= word.path.len() {
            return Err(BoardError::LetterIndexOutOfRange {
                index: letter_index,
                len: word.path.len(),
            });
        }
        let mut moved = word.clone();
        moved.path[letter_index] = target;
        if let Err(e) = self.check(&moved, Some(word_index)) {
            log::debug!(
                "rejected move of '{}'[{letter_index}] to {target}: {e}",
                moved.word
            );
            return Err(e);
        }
        self.words[word_index] = moved;
        self.rebuild();
        Ok(())
    }

    /// Clear the `locked` flag on every word.
    pub fn unlock_all(&mut self) {
        self.words.iter_mut().for_each(|w| w.locked = false);
    }

    /// Remove all words and fill letters.
    pub fn clear(&mut self) {
        self.words.clear();
        self.clear_fill();
        self.rebuild();
    }

    fn rank_of(&self, cell: Cell) -> usize {
        (cell.row as usize) * (self.grid.cols() as usize) + cell.col as usize
    }

    fn committed_segments(&self, ignore: Option<usize>) -> impl Iterator<Item = Segment> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != ignore)
            .flat_map(|(_, w)| w.segments())
    }

    /// Validate `word` against every committed word except `ignore`.
    fn check(&self, word: &PlacedWord, ignore: Option<usize>) -> Result<(), BoardError> {
        let letters = word.letter_count();
        if letters == 0 {
            return Err(BoardError::EmptyWord);
        }
        if word.path.len() != letters {
            return Err(BoardError::LengthMismatch {
                word: word.word.clone(),
                letters,
                cells: word.path.len(),
            });
        }

        for (i, &cell) in word.path.iter().enumerate() {
            self.grid.check(cell)?;
            if word.path[..i].contains(&cell) {
                return Err(BoardError::DuplicateCell { cell });
            }
            if let Some(owner) = self.owner(cell) {
                if Some(owner) != ignore {
                    return Err(BoardError::CellOccupied {
                        cell,
                        owner: self.words[owner].word.clone(),
                    });
                }
            }
        }

        for pair in word.path.windows(2) {
            if !pair[0].is_adjacent(pair[1]) {
                return Err(BoardError::NotAdjacent {
                    from: pair[0],
                    to: pair[1],
                });
            }
        }

        let own: Vec<Segment> = word.segments().collect();
        for (i, segment) in own.iter().enumerate() {
            let clash = own[..i]
                .iter()
                .copied()
                .chain(self.committed_segments(ignore))
                .find(|other| segments_intersect(segment, other));
            if let Some(other) = clash {
                return Err(BoardError::SegmentsCross {
                    segment: *segment,
                    other,
                });
            }
        }

        if word.is_spangram {
            if let Some(existing) = self.spangram_index() {
                if Some(existing) != ignore {
                    return Err(BoardError::SpangramExists {
                        existing: self.words[existing].word.clone(),
                    });
                }
            }
            for cell in [word.first(), word.last()].into_iter().flatten() {
                if !self.grid.is_border(cell) {
                    return Err(BoardError::SpangramOffBorder { cell });
                }
            }
        }

        Ok(())
    }

    /// Recompute ownership, word letters and segments from `words`.
    fn rebuild(&mut self) {
        self.owners.iter_mut().for_each(|o| *o = None);
        self.letters.iter_mut().for_each(|l| *l = None);
        self.segments.clear();
        for (index, word) in self.words.iter().enumerate() {
            for (cell, letter) in word.letters() {
                if let Some(rank) = self.grid.rank(cell) {
                    self.owners[rank] = Some(index);
                    self.letters[rank] = Some(letter);
                    self.fill[rank] = None;
                }
            }
            self.segments.extend(word.segments());
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.letter_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letragrama_core::KING_DELTAS;
    use proptest::prelude::*;

    fn c(r: i32, col: i32) -> Cell {
        Cell::new(r, col)
    }

    fn board(rows: u32, cols: u32) -> Board {
        Board::new(Grid::new(rows, cols).unwrap())
    }

    // ── Placement ───────────────────────────────────────────────

    #[test]
    fn place_derives_ownership_letters_and_segments() {
        let mut b = board(4, 4);
        let idx = b
            .place(PlacedWord::clue("CAT", vec![c(0, 0), c(1, 1), c(1, 2)]))
            .unwrap();
        assert_eq!(idx, 0);
        assert_eq!(b.owner(c(1, 1)), Some(0));
        assert_eq!(b.letter(c(1, 2)), Some('T'));
        assert_eq!(b.segments().len(), 2);
        assert_eq!(b.occupied_count(), 3);
        assert_eq!(b.free_count(), 13);
        assert!(!b.is_occupied(c(3, 3)));
    }

    #[test]
    fn overlapping_word_is_rejected() {
        let mut b = board(4, 4);
        b.place(PlacedWord::clue("AB", vec![c(0, 0), c(0, 1)]))
            .unwrap();
        let err = b
            .place(PlacedWord::clue("CD", vec![c(0, 1), c(0, 2)]))
            .unwrap_err();
        assert_eq!(
            err,
            BoardError::CellOccupied {
                cell: c(0, 1),
                owner: "AB".into()
            }
        );
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn crossing_diagonals_are_rejected() {
        let mut b = board(2, 2);
        b.place(PlacedWord::clue("AB", vec![c(0, 0), c(1, 1)]))
            .unwrap();
        let before = b.clone();
        let err = b
            .place(PlacedWord::clue("CD", vec![c(0, 1), c(1, 0)]))
            .unwrap_err();
        assert!(matches!(err, BoardError::SegmentsCross { .. }));
        assert_eq!(b, before);
    }

    #[test]
    fn self_crossing_path_is_rejected() {
        let b = board(3, 3);
        let w = PlacedWord::clue("ABCD", vec![c(0, 0), c(1, 1), c(1, 0), c(0, 1)]);
        assert!(matches!(
            b.validate(&w),
            Err(BoardError::SegmentsCross { .. })
        ));
    }

    #[test]
    fn shape_errors() {
        let b = board(4, 4);
        assert_eq!(
            b.validate(&PlacedWord::clue("", vec![])),
            Err(BoardError::EmptyWord)
        );
        assert!(matches!(
            b.validate(&PlacedWord::clue("ABC", vec![c(0, 0), c(0, 1)])),
            Err(BoardError::LengthMismatch { letters: 3, cells: 2, .. })
        ));
        assert_eq!(
            b.validate(&PlacedWord::clue("ABA", vec![c(0, 0), c(0, 1), c(0, 0)])),
            Err(BoardError::DuplicateCell { cell: c(0, 0) })
        );
        assert_eq!(
            b.validate(&PlacedWord::clue("AB", vec![c(0, 0), c(0, 2)])),
            Err(BoardError::NotAdjacent {
                from: c(0, 0),
                to: c(0, 2)
            })
        );
        assert!(matches!(
            b.validate(&PlacedWord::clue("AB", vec![c(3, 3), c(4, 4)])),
            Err(BoardError::Grid(_))
        ));
    }

    #[test]
    fn second_spangram_is_rejected() {
        let mut b = board(3, 3);
        b.place(PlacedWord::spangram("ABC", vec![c(0, 0), c(1, 0), c(2, 0)]))
            .unwrap();
        let err = b
            .place(PlacedWord::spangram("DEF", vec![c(0, 2), c(1, 2), c(2, 2)]))
            .unwrap_err();
        assert_eq!(
            err,
            BoardError::SpangramExists {
                existing: "ABC".into()
            }
        );
        assert!(b.spangram_spans());
    }

    #[test]
    fn spangram_endpoint_must_touch_border() {
        let b = board(5, 5);
        let w = PlacedWord::spangram("ABC", vec![c(0, 2), c(1, 2), c(2, 2)]);
        assert_eq!(
            b.validate(&w),
            Err(BoardError::SpangramOffBorder { cell: c(2, 2) })
        );
    }

    #[test]
    fn non_spanning_spangram_is_reported() {
        let mut b = board(5, 5);
        b.place(PlacedWord::spangram("AB", vec![c(0, 1), c(0, 2)]))
            .unwrap();
        assert!(!b.spangram_spans());
    }

    // ── Removal and relocation ──────────────────────────────────

    #[test]
    fn remove_frees_cells_and_segments() {
        let mut b = board(3, 3);
        b.place(PlacedWord::clue("AB", vec![c(0, 0), c(1, 1)]))
            .unwrap();
        b.place(PlacedWord::clue("CD", vec![c(2, 0), c(2, 1)]))
            .unwrap();
        let removed = b.remove(0).unwrap();
        assert_eq!(removed.word, "AB");
        assert!(!b.is_occupied(c(0, 0)));
        assert_eq!(b.owner(c(2, 1)), Some(0));
        assert_eq!(b.segments().len(), 1);
        // The diagonal is free again.
        b.place(PlacedWord::clue("EF", vec![c(0, 1), c(1, 0)]))
            .unwrap();
        assert_eq!(
            b.remove(5),
            Err(BoardError::WordIndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn relocate_moves_letter_and_recomputes_segments() {
        let mut b = board(3, 3);
        b.place(PlacedWord::clue("ABC", vec![c(0, 0), c(0, 1), c(0, 2)]))
            .unwrap();
        b.relocate(0, 2, c(1, 2)).unwrap();
        assert_eq!(b.letter(c(1, 2)), Some('C'));
        assert!(!b.is_occupied(c(0, 2)));
        assert!(b
            .segments()
            .contains(&Segment::new(c(0, 1), c(1, 2))));
    }

    #[test]
    fn relocate_rejects_broken_paths() {
        let mut b = board(3, 3);
        b.place(PlacedWord::clue("ABC", vec![c(0, 0), c(0, 1), c(0, 2)]))
            .unwrap();
        b.place(PlacedWord::clue("DE", vec![c(2, 0), c(2, 1)]))
            .unwrap();
        let before = b.clone();
        assert!(matches!(
            b.relocate(0, 2, c(2, 1)),
            Err(BoardError::CellOccupied { .. })
        ));
        assert!(matches!(
            b.relocate(0, 2, c(2, 2)),
            Err(BoardError::NotAdjacent { .. })
        ));
        assert_eq!(
            b.relocate(0, 7, c(1, 1)),
            Err(BoardError::LetterIndexOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(
            b.relocate(9, 0, c(1, 1)),
            Err(BoardError::WordIndexOutOfRange { index: 9, len: 2 })
        );
        assert_eq!(b, before);
    }

    #[test]
    fn relocate_keeps_spangram_on_border() {
        let mut b = board(3, 3);
        b.place(PlacedWord::spangram("ABC", vec![c(0, 0), c(1, 0), c(2, 0)]))
            .unwrap();
        assert_eq!(
            b.relocate(0, 2, c(2, 1)),
            Ok(())
        );
        assert!(matches!(
            b.relocate(0, 0, c(1, 1)),
            Err(BoardError::SpangramOffBorder { .. }) | Err(BoardError::SegmentsCross { .. })
        ));
    }

    // ── Letters ─────────────────────────────────────────────────

    #[test]
    fn fill_letters_only_on_free_cells() {
        let mut b = board(2, 2);
        b.place(PlacedWord::clue("AB", vec![c(0, 0), c(0, 1)]))
            .unwrap();
        assert_eq!(b.set_fill_letter(c(0, 0), 'Z'), Ok(false));
        assert_eq!(b.set_fill_letter(c(1, 0), 'Z'), Ok(true));
        assert_eq!(b.set_fill_letter(c(1, 0), 'Q'), Ok(false));
        assert_eq!(b.letter(c(1, 0)), Some('Z'));
        assert!(b.set_fill_letter(c(5, 5), 'Q').is_err());
        assert!(!b.is_fully_lettered());
        assert_eq!(b.unlettered_cells().collect::<Vec<_>>(), vec![c(1, 1)]);
    }

    #[test]
    fn placing_over_fill_discards_it() {
        let mut b = board(2, 2);
        b.set_fill_letter(c(1, 1), 'X').unwrap();
        b.place(PlacedWord::clue("OK", vec![c(1, 0), c(1, 1)]))
            .unwrap();
        assert_eq!(b.fill_letter(c(1, 1)), None);
        assert_eq!(b.letter(c(1, 1)), Some('K'));
    }

    #[test]
    fn letter_rows_and_display() {
        let mut b = board(2, 3);
        b.place(PlacedWord::clue("SOL", vec![c(0, 0), c(0, 1), c(0, 2)]))
            .unwrap();
        b.set_fill_letter(c(1, 1), 'E').unwrap();
        assert_eq!(b.letter_rows(), vec!["SOL".to_string(), ".E.".to_string()]);
        assert_eq!(b.to_string(), "SOL\n.E.");
    }

    #[test]
    fn clear_and_unlock() {
        let mut b = board(2, 2);
        b.place(PlacedWord::manual("AB", vec![c(0, 0), c(0, 1)]))
            .unwrap();
        assert_eq!(b.locked_words().count(), 1);
        b.unlock_all();
        assert_eq!(b.locked_words().count(), 0);
        b.set_fill_letter(c(1, 1), 'X').unwrap();
        b.clear();
        assert!(b.is_empty());
        assert!(b.segments().is_empty());
        assert_eq!(b.letter(c(1, 1)), None);
    }

    // ── Property tests ──────────────────────────────────────────

    fn walk(start: (i32, i32), steps: &[usize]) -> Vec<Cell> {
        let mut path = vec![Cell::new(start.0, start.1)];
        for &d in steps {
            let (dr, dc) = KING_DELTAS[d];
            let next = path[path.len() - 1].offset(dr, dc);
            path.push(next);
        }
        path
    }

    proptest! {
        #[test]
        fn accepted_words_keep_invariants(
            attempts in prop::collection::vec(
                ((0i32..5, 0i32..5), prop::collection::vec(0usize..8, 0..5)),
                1..12,
            ),
        ) {
            let mut b = board(5, 5);
            for (start, steps) in attempts {
                let path = walk(start, &steps);
                let word: String = "ABCDEFGH".chars().take(path.len()).collect();
                let before = b.clone();
                if b.place(PlacedWord::clue(word, path)).is_err() {
                    prop_assert_eq!(&b, &before);
                }
            }
            let mut seen = std::collections::HashSet::new();
            for w in b.words() {
                for cell in &w.path {
                    prop_assert!(seen.insert(*cell), "cell {} used twice", cell);
                }
            }
            let segs = b.segments();
            for (i, s) in segs.iter().enumerate() {
                for o in &segs[i + 1..] {
                    prop_assert!(!segments_intersect(s, o), "{} crosses {}", s, o);
                }
            }
        }
    }
}
