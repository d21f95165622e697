//! Committed words and word normalization.

use crate::cell::Cell;
use crate::error::WordError;
use crate::geometry::Segment;

/// Trim and uppercase a user-supplied word.
///
/// Length is measured in `char`s everywhere in the workspace, so words with
/// letters such as `Ñ` occupy one cell per letter.
///
/// # Errors
///
/// Returns [`WordError::Empty`] for blank input and
/// [`WordError::ContainsWhitespace`] if whitespace remains inside the word.
pub fn normalize_word(raw: &str) -> Result<String, WordError> {
    let word = raw.trim().to_uppercase();
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    if word.chars().any(char::is_whitespace) {
        return Err(WordError::ContainsWhitespace { word });
    }
    Ok(word)
}

/// A word committed to the board along a path of cells.
///
/// `path[i]` holds the `i`-th letter of `word`. Board state validates the
/// path on commit; a `PlacedWord` on its own carries no guarantees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWord {
    /// The normalized word.
    pub word: String,
    /// One cell per letter, in reading order.
    pub path: Vec<Cell>,
    /// Whether this is the board's spangram.
    pub is_spangram: bool,
    /// Whether the word was authored by hand and must keep its path
    /// across regenerations.
    pub locked: bool,
}

impl PlacedWord {
    /// A generated clue word.
    pub fn clue(word: impl Into<String>, path: Vec<Cell>) -> Self {
        Self {
            word: word.into(),
            path,
            is_spangram: false,
            locked: false,
        }
    }

    /// A generated spangram.
    pub fn spangram(word: impl Into<String>, path: Vec<Cell>) -> Self {
        Self {
            word: word.into(),
            path,
            is_spangram: true,
            locked: false,
        }
    }

    /// A hand-placed clue word that survives regeneration.
    pub fn manual(word: impl Into<String>, path: Vec<Cell>) -> Self {
        Self {
            word: word.into(),
            path,
            is_spangram: false,
            locked: true,
        }
    }

    /// Number of letters (not bytes).
    pub fn letter_count(&self) -> usize {
        self.word.chars().count()
    }

    /// Iterate `(cell, letter)` pairs in reading order.
    pub fn letters(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.path.iter().copied().zip(self.word.chars())
    }

    /// Connectors between consecutive cells of the path.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.path.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// First cell of the path, if any.
    pub fn first(&self) -> Option<Cell> {
        self.path.first().copied()
    }

    /// Last cell of the path, if any.
    pub fn last(&self) -> Option<Cell> {
        self.path.last().copied()
    }
}
