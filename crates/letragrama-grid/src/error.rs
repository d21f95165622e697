//! Error types for grid construction and coordinate checks.

use letragrama_core::Cell;
use std::fmt;

/// Errors arising from grid construction or bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A cell is outside the bounds of the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the maximum supported value.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The value that was provided.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} out of bounds: {bounds}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
