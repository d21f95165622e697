//! Error types for board mutation and export.

use letragrama_core::{Cell, Segment};
use letragrama_grid::GridError;
use std::error::Error;
use std::fmt;

/// A board mutation would violate a board invariant.
///
/// The board is left unchanged whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A path cell is outside the grid.
    Grid(GridError),
    /// The word has no letters.
    EmptyWord,
    /// The path does not have one cell per letter.
    LengthMismatch {
        /// The word being placed.
        word: String,
        /// Number of letters in the word.
        letters: usize,
        /// Number of cells in the path.
        cells: usize,
    },
    /// The same cell appears twice in one path.
    DuplicateCell {
        /// The repeated cell.
        cell: Cell,
    },
    /// Two consecutive path cells are not a king move apart.
    NotAdjacent {
        /// Earlier cell.
        from: Cell,
        /// Later cell.
        to: Cell,
    },
    /// A path cell already belongs to another word.
    CellOccupied {
        /// The contested cell.
        cell: Cell,
        /// The word that owns it.
        owner: String,
    },
    /// A connector of the new path crosses an existing connector.
    SegmentsCross {
        /// Connector of the path being placed.
        segment: Segment,
        /// Connector it crosses.
        other: Segment,
    },
    /// The board already has a spangram.
    SpangramExists {
        /// The existing spangram.
        existing: String,
    },
    /// A spangram endpoint is not on the board border.
    SpangramOffBorder {
        /// The interior endpoint.
        cell: Cell,
    },
    /// No word at this index.
    WordIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of placed words.
        len: usize,
    },
    /// No letter at this index within the word.
    LetterIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of letters in the word.
        len: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::EmptyWord => write!(f, "word has no letters"),
            Self::LengthMismatch {
                word,
                letters,
                cells,
            } => write!(
                f,
                "word '{word}' has {letters} letters but its path has {cells} cells"
            ),
            Self::DuplicateCell { cell } => write!(f, "cell {cell} appears twice in the path"),
            Self::NotAdjacent { from, to } => {
                write!(f, "cells {from} and {to} are not adjacent")
            }
            Self::CellOccupied { cell, owner } => {
                write!(f, "cell {cell} is already used by '{owner}'")
            }
            Self::SegmentsCross { segment, other } => {
                write!(f, "connector {segment} crosses connector {other}")
            }
            Self::SpangramExists { existing } => {
                write!(f, "board already has spangram '{existing}'")
            }
            Self::SpangramOffBorder { cell } => {
                write!(f, "spangram endpoint {cell} is not on the border")
            }
            Self::WordIndexOutOfRange { index, len } => {
                write!(f, "word index {index} out of range (board has {len} words)")
            }
            Self::LetterIndexOutOfRange { index, len } => {
                write!(f, "letter index {index} out of range (word has {len} letters)")
            }
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for BoardError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors from building, serializing or restoring an [`ExportedBoard`](crate::ExportedBoard).
#[derive(Debug)]
pub enum ExportError {
    /// The board has no placed words.
    NoWords,
    /// The theme is blank.
    MissingTheme,
    /// The author is blank.
    MissingAuthor,
    /// A cell has neither a word letter nor a fill letter.
    Unlettered {
        /// The empty cell.
        cell: Cell,
    },
    /// The document is structurally inconsistent.
    Malformed {
        /// What went wrong.
        reason: String,
    },
    /// The letter rows describe an invalid grid.
    Grid(GridError),
    /// A bond could not be committed to the restored board.
    Board(BoardError),
    /// JSON encoding or decoding failed.
    Json(serde_json::Error),
    /// The timestamp is not RFC 3339.
    Timestamp(chrono::ParseError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWords => write!(f, "board has no placed words"),
            Self::MissingTheme => write!(f, "theme is required"),
            Self::MissingAuthor => write!(f, "author is required"),
            Self::Unlettered { cell } => write!(f, "cell {cell} has no letter"),
            Self::Malformed { reason } => write!(f, "malformed board: {reason}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Board(e) => write!(f, "board: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Timestamp(e) => write!(f, "timestamp: {e}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Board(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Timestamp(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ExportError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<BoardError> for ExportError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<chrono::ParseError> for ExportError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Timestamp(e)
    }
}
