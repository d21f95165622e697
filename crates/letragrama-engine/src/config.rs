//! Generator configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use crate::spangram::SpangramSearch;
use letragrama_grid::{Grid, GridError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GeneratorConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Grid(GridError),
    /// `min_spangram_len` is zero.
    SpangramLenZero,
    /// `min_spangram_len` exceeds the number of cells.
    SpangramLenExceedsGrid {
        /// The configured minimum.
        len: usize,
        /// Cells available on the grid.
        cells: usize,
    },
    /// `vowel_weight` is zero.
    VowelWeightZero,
    /// `history_limit` is zero.
    HistoryLimitZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::SpangramLenZero => write!(f, "min_spangram_len must be at least 1"),
            Self::SpangramLenExceedsGrid { len, cells } => write!(
                f,
                "min_spangram_len {len} exceeds the {cells} cells of the grid"
            ),
            Self::VowelWeightZero => write!(f, "vowel_weight must be at least 1"),
            Self::HistoryLimitZero => write!(f, "history_limit must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── GeneratorConfig ────────────────────────────────────────────────

/// Settings for a [`Generator`](crate::Generator) session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Grid rows. Default: 8.
    pub rows: u32,
    /// Grid columns. Default: 6.
    pub cols: u32,
    /// Minimum spangram length in letters. Default: 6.
    pub min_spangram_len: usize,
    /// How many times each vowel appears in the fill pool. Default: 2.
    pub vowel_weight: usize,
    /// RNG seed for deterministic generation. Default: 0.
    pub seed: u64,
    /// Snapshots retained for undo, baseline included. Default: 64.
    pub history_limit: usize,
    /// How border starts are searched for the spangram.
    /// Default: [`SpangramSearch::Checked`].
    pub spangram_search: SpangramSearch,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 6,
            min_spangram_len: 6,
            vowel_weight: 2,
            seed: 0,
            history_limit: 64,
            spangram_search: SpangramSearch::Checked,
        }
    }
}

impl GeneratorConfig {
    /// Validate all settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = self.grid()?;
        if self.min_spangram_len == 0 {
            return Err(ConfigError::SpangramLenZero);
        }
        if self.min_spangram_len > grid.cell_count() {
            return Err(ConfigError::SpangramLenExceedsGrid {
                len: self.min_spangram_len,
                cells: grid.cell_count(),
            });
        }
        if self.vowel_weight == 0 {
            return Err(ConfigError::VowelWeightZero);
        }
        if self.history_limit == 0 {
            return Err(ConfigError::HistoryLimitZero);
        }
        Ok(())
    }

    /// The configured grid.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.rows, self.cols)?)
    }
}
