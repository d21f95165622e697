//! Edge-to-edge placement of the spangram.

use crate::error::PlacementError;
use crate::search::{find_path, find_path_to};
use letragrama_board::Board;
use letragrama_core::{normalize_word, PlacedWord};
use rand::seq::SliceRandom;
use rand::Rng;

/// How each border start is searched when placing a spangram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpangramSearch {
    /// Run a plain [`find_path`] and keep the path only if its last cell
    /// lies on a border facing the start.
    #[default]
    Checked,
    /// Run [`find_path_to`] toward the facing borders, cutting branches
    /// that can no longer reach one. Finds a spanning path from starts where
    /// the first plain path happens to end elsewhere.
    Targeted,
}

/// Place `word` as the board's spangram and commit it, using
/// [`SpangramSearch::Checked`].
///
/// Every free border cell is tried as a start, in random order. From a
/// start `s` the path must end on a border facing one of the borders `s`
/// touches (top against bottom, left against right); a corner start may
/// finish on either facing edge. The first start that succeeds wins.
///
/// # Errors
///
/// - [`PlacementError::SpangramTooShort`] if `word` has fewer than
///   `min_len` letters
/// - [`PlacementError::SpangramExists`] if the board already has one
/// - [`PlacementError::SpangramUnplaceable`] once every start fails
///
/// The board is unchanged on error.
pub fn place_spangram<R: Rng + ?Sized>(
    board: &mut Board,
    word: &str,
    min_len: usize,
    rng: &mut R,
) -> Result<PlacedWord, PlacementError> {
    place_spangram_with(board, word, min_len, SpangramSearch::Checked, rng)
}

/// [`place_spangram`] with an explicit search mode.
pub fn place_spangram_with<R: Rng + ?Sized>(
    board: &mut Board,
    word: &str,
    min_len: usize,
    search: SpangramSearch,
    rng: &mut R,
) -> Result<PlacedWord, PlacementError> {
    let word = normalize_word(word)?;
    let len = word.chars().count();
    if len < min_len {
        return Err(PlacementError::SpangramTooShort {
            word,
            len,
            min: min_len,
        });
    }
    if let Some(existing) = board.spangram() {
        return Err(PlacementError::SpangramExists {
            existing: existing.word.clone(),
        });
    }

    let grid = *board.grid();
    let mut starts: Vec<_> = grid
        .border_cells()
        .into_iter()
        .filter(|c| !board.is_occupied(*c))
        .collect();
    starts.shuffle(rng);

    for start in starts {
        let attempt = match search {
            SpangramSearch::Checked => find_path(board, start, len, rng),
            SpangramSearch::Targeted => {
                find_path_to(board, start, len, grid.borders(start).opposites(), rng)
            }
        };
        match attempt {
            Ok(path) if path.last().is_some_and(|&end| grid.spans_opposite(start, end)) => {
                let placed = PlacedWord::spangram(word, path);
                board.place(placed.clone())?;
                log::debug!(
                    "spangram '{}' placed from {start} to {}",
                    placed.word,
                    placed.path[len - 1]
                );
                return Ok(placed);
            }
            Ok(_) | Err(PlacementError::PathNotFound) => continue,
            Err(e) => return Err(e),
        }
    }

    log::warn!("spangram '{word}' has no edge-to-edge path");
    Err(PlacementError::SpangramUnplaceable { word })
}
