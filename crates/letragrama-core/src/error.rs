//! Error types for word normalization.

use std::error::Error;
use std::fmt;

/// Errors from [`normalize_word`](crate::normalize_word).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordError {
    /// The word is empty after trimming.
    Empty,
    /// The word contains interior whitespace; each cell holds one letter.
    ContainsWhitespace {
        /// The offending word, trimmed and uppercased.
        word: String,
    },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "word is empty"),
            Self::ContainsWhitespace { word } => {
                write!(f, "word '{word}' contains whitespace")
            }
        }
    }
}

impl Error for WordError {}
