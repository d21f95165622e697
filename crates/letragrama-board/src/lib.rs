//! Board state for Letragrama puzzles.
//!
//! [`Board`] owns the committed words of one puzzle and everything derived
//! from them: which word covers each cell, the set of connector segments,
//! and the per-cell letters. Every mutation validates the board invariants
//! before touching state, so a rejected edit leaves the board unchanged.
//!
//! Also here:
//!
//! - [`History`]: bounded undo/redo stack of board snapshots
//! - [`ExportedBoard`]: the serialized puzzle format consumed by players

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod error;
pub mod export;
pub mod history;

pub use board::Board;
pub use error::{BoardError, ExportError};
pub use export::{Bond, ExportedBoard};
pub use history::History;
