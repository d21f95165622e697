//! The exported puzzle format.
//!
//! ```json
//! {
//!   "theme": "Juegos",
//!   "author": "Ana",
//!   "letters": ["PUZZLE", "..."],
//!   "bonds": [["PUZZLES", ["0,7", "1,7"], true]],
//!   "timestamp": "2026-10-19T12:00:00.000Z"
//! }
//! ```
//!
//! Bond cells are `"col,flippedRow"` with `flippedRow = rows - 1 - row`,
//! i.e. rows are counted bottom-up in the file.

use crate::board::Board;
use crate::error::ExportError;
use chrono::{DateTime, SecondsFormat, Utc};
use letragrama_core::{Cell, PlacedWord};
use letragrama_grid::Grid;
use serde::{Deserialize, Serialize};

/// One placed word: `[word, ["col,flippedRow", ...], isSpangram]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond(pub String, pub Vec<String>, pub bool);

impl Bond {
    /// The word.
    pub fn word(&self) -> &str {
        &self.0
    }

    /// Encoded path cells.
    pub fn cells(&self) -> &[String] {
        &self.1
    }

    /// Whether this bond is the spangram.
    pub fn is_spangram(&self) -> bool {
        self.2
    }
}

/// A finished puzzle as handed to players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedBoard {
    /// Puzzle theme.
    pub theme: String,
    /// Puzzle author.
    pub author: String,
    /// One uppercase string per row, top to bottom.
    pub letters: Vec<String>,
    /// Placed words in placement order.
    pub bonds: Vec<Bond>,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
}

impl ExportedBoard {
    /// Build the export of a finished board.
    ///
    /// # Errors
    ///
    /// - [`ExportError::NoWords`] if nothing is placed
    /// - [`ExportError::MissingTheme`] / [`ExportError::MissingAuthor`] if
    ///   either is blank after trimming
    /// - [`ExportError::Unlettered`] if any cell shows no letter
    pub fn from_board(
        board: &Board,
        theme: &str,
        author: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ExportError> {
        if board.is_empty() {
            return Err(ExportError::NoWords);
        }
        let theme = theme.trim();
        let author = author.trim();
        if theme.is_empty() {
            return Err(ExportError::MissingTheme);
        }
        if author.is_empty() {
            return Err(ExportError::MissingAuthor);
        }
        if let Some(cell) = board.unlettered_cells().next() {
            return Err(ExportError::Unlettered { cell });
        }

        let rows = board.grid().rows();
        let letters = board
            .letter_rows()
            .into_iter()
            .map(|row| row.to_uppercase())
            .collect();
        let bonds = board
            .words()
            .iter()
            .map(|w| {
                Bond(
                    w.word.to_uppercase(),
                    w.path.iter().map(|&c| encode_cell(c, rows)).collect(),
                    w.is_spangram,
                )
            })
            .collect();

        Ok(Self {
            theme: theme.to_string(),
            author: author.to_string(),
            letters,
            bonds,
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the timestamp.
    pub fn parsed_timestamp(&self) -> Result<DateTime<Utc>, ExportError> {
        Ok(DateTime::parse_from_rfc3339(&self.timestamp)?.with_timezone(&Utc))
    }

    /// Rebuild an editable board.
    ///
    /// Grid dimensions come from `letters`. Clue bonds are committed as
    /// locked words, so a later regeneration keeps them in place; the
    /// spangram stays unlocked. Letters of uncovered cells become fill
    /// letters.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Malformed`] for ragged rows, undecodable
    /// cells or letters that disagree with their bond, and
    /// [`ExportError::Board`] if the bonds break a board invariant.
    pub fn restore(&self) -> Result<Board, ExportError> {
        let rows = self.letters.len();
        let cols = self.letters.first().map_or(0, |r| r.chars().count());
        if let Some((i, row)) = self
            .letters
            .iter()
            .enumerate()
            .find(|(_, r)| r.chars().count() != cols)
        {
            return Err(ExportError::Malformed {
                reason: format!(
                    "row {i} has {} letters, expected {cols}",
                    row.chars().count()
                ),
            });
        }
        let rows = u32::try_from(rows).map_err(|_| ExportError::Malformed {
            reason: format!("{rows} rows exceeds u32::MAX"),
        })?;
        let cols = u32::try_from(cols).map_err(|_| ExportError::Malformed {
            reason: format!("{cols} columns exceeds u32::MAX"),
        })?;
        let grid = Grid::new(rows, cols)?;
        let mut board = Board::new(grid);

        for bond in &self.bonds {
            let path = bond
                .cells()
                .iter()
                .map(|s| decode_cell(s, rows))
                .collect::<Result<Vec<_>, _>>()?;
            let word = PlacedWord {
                word: bond.word().to_uppercase(),
                path,
                is_spangram: bond.is_spangram(),
                locked: !bond.is_spangram(),
            };
            board.place(word)?;
        }

        for (r, row) in self.letters.iter().enumerate() {
            for (c, letter) in row.chars().enumerate() {
                let cell = Cell::new(r as i32, c as i32);
                let letter = letter.to_uppercase().next().unwrap_or(letter);
                match board.letter(cell) {
                    Some(existing) if existing != letter => {
                        return Err(ExportError::Malformed {
                            reason: format!(
                                "cell {cell} shows '{letter}' but its bond spells '{existing}'"
                            ),
                        });
                    }
                    Some(_) => {}
                    None => {
                        board.set_fill_letter(cell, letter)?;
                    }
                }
            }
        }

        Ok(board)
    }
}

fn encode_cell(cell: Cell, rows: u32) -> String {
    format!("{},{}", cell.col, rows as i32 - 1 - cell.row)
}

fn decode_cell(encoded: &str, rows: u32) -> Result<Cell, ExportError> {
    let malformed = || ExportError::Malformed {
        reason: format!("bad cell '{encoded}', expected \"col,row\""),
    };
    let (col, flipped) = encoded.split_once(',').ok_or_else(malformed)?;
    let col: i32 = col.trim().parse().map_err(|_| malformed())?;
    let flipped: i32 = flipped.trim().parse().map_err(|_| malformed())?;
    Ok(Cell::new(rows as i32 - 1 - flipped, col))
}
