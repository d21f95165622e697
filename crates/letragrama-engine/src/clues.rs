//! Placement of ordinary clue words.

use crate::error::PlacementError;
use crate::search::find_path;
use indexmap::IndexSet;
use letragrama_board::Board;
use letragrama_core::{normalize_word, PlacedWord};
use rand::seq::SliceRandom;
use rand::Rng;

/// Outcome of [`place_clues`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClueReport {
    /// Words committed to the board, in placement order.
    pub placed: Vec<PlacedWord>,
    /// Words for which no start cell produced a path, including malformed
    /// ones, trimmed and uppercased.
    pub unplaced: Vec<String>,
}

impl ClueReport {
    /// Returns `true` if every clue found a path.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Place one clue anywhere on the board and commit it.
///
/// Start cells are tried in random order; occupied ones are skipped.
///
/// # Errors
///
/// Returns [`PlacementError::WordUnplaceable`] if no start succeeds, and
/// [`PlacementError::Word`] for blank input. The board is unchanged on
/// error.
pub fn place_clue<R: Rng + ?Sized>(
    board: &mut Board,
    word: &str,
    rng: &mut R,
) -> Result<PlacedWord, PlacementError> {
    let word = normalize_word(word)?;
    let len = word.chars().count();

    if len <= board.free_count() {
        let mut starts: Vec<_> = board.grid().cells().collect();
        starts.shuffle(rng);
        for start in starts {
            if board.is_occupied(start) {
                continue;
            }
            match find_path(board, start, len, rng) {
                Ok(path) => {
                    let placed = PlacedWord::clue(word, path);
                    board.place(placed.clone())?;
                    return Ok(placed);
                }
                Err(PlacementError::PathNotFound) => continue,
                Err(e) => return Err(e),
            }
        }
    }

    Err(PlacementError::WordUnplaceable { word })
}

/// Place every clue in order, collecting the ones that do not fit.
///
/// Words are trimmed and uppercased first. Blank entries are dropped, as
/// are repeats of an earlier word. Every other word ends up in exactly one
/// of `placed` and `unplaced`; a malformed word such as one with inner
/// whitespace is reported unplaced. A word that fails does not stop the
/// ones after it.
pub fn place_clues<I, S, R>(board: &mut Board, words: I, rng: &mut R) -> ClueReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let words: IndexSet<String> = words
        .into_iter()
        .map(|w| w.as_ref().trim().to_uppercase())
        .filter(|w| !w.is_empty())
        .collect();

    let mut report = ClueReport::default();
    for word in words {
        match place_clue(board, &word, rng) {
            Ok(placed) => report.placed.push(placed),
            Err(e) => {
                log::warn!("clue '{word}' left unplaced: {e}");
                report.unplaced.push(word);
            }
        }
    }
    report
}
