//! Error types for path search and word placement.

use letragrama_board::BoardError;
use letragrama_core::{Cell, WordError};
use std::error::Error;
use std::fmt;

/// Errors from the placement engine and the strategies built on it.
///
/// [`PathNotFound`](Self::PathNotFound) is recoverable: strategies catch it
/// and move on to the next start cell. The other variants are surfaced to
/// the caller and leave the board unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The search exhausted every branch from its start cell.
    PathNotFound,
    /// A path length of zero was requested.
    InvalidLength,
    /// The start cell lies outside the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
    },
    /// The start cell is already covered by a word.
    StartOccupied {
        /// The occupied start cell.
        cell: Cell,
    },
    /// The spangram is shorter than the configured minimum.
    SpangramTooShort {
        /// The rejected spangram.
        word: String,
        /// Its length in letters.
        len: usize,
        /// The configured minimum.
        min: usize,
    },
    /// The board already has a spangram.
    SpangramExists {
        /// The existing spangram.
        existing: String,
    },
    /// No border start produced an edge-to-edge path.
    SpangramUnplaceable {
        /// The spangram that could not be placed.
        word: String,
    },
    /// No start cell produced a path for this clue.
    WordUnplaceable {
        /// The clue that could not be placed.
        word: String,
    },
    /// The word is blank or malformed.
    Word(WordError),
    /// Committing the word would break a board invariant.
    Board(BoardError),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotFound => write!(f, "no path found"),
            Self::InvalidLength => write!(f, "path length must be at least 1"),
            Self::CellOutOfBounds { cell } => write!(f, "start cell {cell} is out of bounds"),
            Self::StartOccupied { cell } => write!(f, "start cell {cell} is occupied"),
            Self::SpangramTooShort { word, len, min } => write!(
                f,
                "spangram '{word}' has {len} letters, minimum is {min}"
            ),
            Self::SpangramExists { existing } => {
                write!(f, "board already has spangram '{existing}'")
            }
            Self::SpangramUnplaceable { word } => {
                write!(f, "spangram '{word}' cannot be placed edge to edge")
            }
            Self::WordUnplaceable { word } => write!(f, "word '{word}' cannot be placed"),
            Self::Word(e) => write!(f, "word: {e}"),
            Self::Board(e) => write!(f, "board: {e}"),
        }
    }
}

impl Error for PlacementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for PlacementError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<BoardError> for PlacementError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}
