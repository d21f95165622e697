//! Word placement and puzzle generation for Letragrama boards.
//!
//! The placement engine is a randomized depth-first search over the
//! king-move graph ([`find_path`]). Three strategies build on it:
//!
//! - [`place_spangram`]: one edge-to-edge word starting on the border
//! - [`place_clues`]: ordinary words anywhere they fit
//! - [`fill`]: weighted random letters for the cells left over
//!
//! [`Generator`] ties them into an editing session with manual words,
//! letter relocation, undo/redo and export. All randomness comes from an
//! injected [`rand::Rng`]; the generator seeds a `ChaCha8Rng` from its
//! config, so equal seeds produce equal boards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clues;
pub mod config;
pub mod error;
pub mod fill;
pub mod generator;
pub mod search;
pub mod spangram;

pub use clues::{place_clue, place_clues, ClueReport};
pub use config::{ConfigError, GeneratorConfig};
pub use error::PlacementError;
pub use fill::{fill, LetterPool};
pub use generator::{GenerationReport, Generator};
pub use search::{find_path, find_path_to};
pub use spangram::{place_spangram, place_spangram_with, SpangramSearch};
