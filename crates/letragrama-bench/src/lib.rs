//! Benchmark profiles for the Letragrama puzzle engine.
//!
//! Provides pre-built [`GeneratorConfig`] profiles and word lists:
//!
//! - [`reference_profile`]: the 8×6 editor board
//! - [`stress_profile`]: a 20×20 board for long searches
//! - [`reference_clues`] / [`stress_clues`]: clue lists sized for each

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use letragrama_engine::{GeneratorConfig, SpangramSearch};

/// Spangram for the reference board.
pub const SPANGRAM: &str = "LETRAGRAMA";

/// Spangram for the stress board, long enough to cross 20 columns.
pub const STRESS_SPANGRAM: &str = "ASTRONOMIAOBSERVACIONAL";

/// The 8×6 board with default settings and a targeted spangram search,
/// so every iteration produces a board.
pub fn reference_profile(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        seed,
        spangram_search: SpangramSearch::Targeted,
        ..Default::default()
    }
}

/// A 20×20 board (400 cells).
pub fn stress_profile(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        rows: 20,
        cols: 20,
        seed,
        spangram_search: SpangramSearch::Targeted,
        ..Default::default()
    }
}

/// Clues that cover most of the reference board.
pub fn reference_clues() -> Vec<&'static str> {
    vec!["SOL", "LUNA", "MAR", "ESTRELLA", "NUBE", "RAYO"]
}

/// Clues for the stress board: the reference list plus longer words.
pub fn stress_clues() -> Vec<&'static str> {
    let mut clues = reference_clues();
    clues.extend([
        "CONSTELACION",
        "ATARDECER",
        "HORIZONTE",
        "TORMENTA",
        "RELAMPAGO",
        "ARCOIRIS",
        "GALAXIA",
        "COMETA",
    ]);
    clues
}
