//! Letragrama: a generator and editor core for strands-style word puzzles.
//!
//! A puzzle is a rectangular grid of letters. Each hidden word occupies a
//! self-avoiding path of king-move-adjacent cells, no two paths cross, and
//! one word, the spangram, runs between two opposite edges of the board.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Letragrama sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use letragrama::prelude::*;
//!
//! let mut generator = Generator::new(GeneratorConfig {
//!     seed: 42,
//!     spangram_search: SpangramSearch::Targeted,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let report = generator
//!     .locate_all("PUZZLES", ["SOL", "LUNA", "MAR"])
//!     .unwrap();
//! assert_eq!(report.spangram.path.len(), 7);
//! assert!(generator.board().spangram_spans());
//!
//! // Every cell shows a letter once generation finishes.
//! let exported = generator.export("Cielo", "Ana").unwrap();
//! assert_eq!(exported.letters.len(), 8);
//! let json = exported.to_json().unwrap();
//! assert_eq!(ExportedBoard::from_json(&json).unwrap(), exported);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `letragrama-core` | Cells, borders, segments, placed words |
//! | [`grid`] | `letragrama-grid` | Grid topology and border queries |
//! | [`board`] | `letragrama-board` | Board state, undo history, export format |
//! | [`engine`] | `letragrama-engine` | Path search, placement strategies, generator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`letragrama-core`).
///
/// [`types::Cell`], [`types::Segment`] with the crossing predicate
/// [`types::segments_intersect`], and [`types::PlacedWord`].
pub use letragrama_core as types;

/// Grid topology (`letragrama-grid`).
pub use letragrama_grid as grid;

/// Board state, history and export (`letragrama-board`).
///
/// [`board::Board`] enforces the placement invariants on every mutation;
/// [`board::ExportedBoard`] is the JSON format handed to players.
pub use letragrama_board as board;

/// Placement engine and generation session (`letragrama-engine`).
pub use letragrama_engine as engine;

/// Common imports for typical Letragrama usage.
///
/// ```rust
/// use letragrama::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use letragrama_core::{segments_intersect, Border, BorderSet, Cell, PlacedWord, Segment};

    // Grid
    pub use letragrama_grid::Grid;

    // Board
    pub use letragrama_board::{Board, ExportedBoard, History};

    // Errors
    pub use letragrama_board::{BoardError, ExportError};
    pub use letragrama_engine::{ConfigError, PlacementError};

    // Engine
    pub use letragrama_engine::{
        fill, find_path, place_clues, place_spangram, place_spangram_with, ClueReport,
        GenerationReport, Generator, GeneratorConfig, LetterPool, SpangramSearch,
    };
}
