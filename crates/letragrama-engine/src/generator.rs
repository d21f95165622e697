//! A puzzle editing session: generation, manual edits, undo/redo, export.

use crate::clues::place_clues;
use crate::config::{ConfigError, GeneratorConfig};
use crate::error::PlacementError;
use crate::fill::{fill, LetterPool};
use crate::spangram::place_spangram_with;
use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use letragrama_board::{Board, BoardError, ExportError, ExportedBoard, History};
use letragrama_core::{normalize_word, Cell, PlacedWord};
use letragrama_grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Outcome of a successful [`Generator::locate_all`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// The committed spangram.
    pub spangram: PlacedWord,
    /// Clues placed by this run. Locked words carried over are not listed.
    pub placed: Vec<PlacedWord>,
    /// Clues that found no path.
    pub unplaced: Vec<String>,
    /// Number of cells given a random letter.
    pub filled: usize,
}

impl GenerationReport {
    /// Returns `true` if every clue was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// One editing session over a single board.
///
/// Every successful edit records a snapshot in the session [`History`];
/// failed edits leave both the board and the history untouched.
///
/// # Examples
///
/// ```
/// use letragrama_engine::{Generator, GeneratorConfig, SpangramSearch};
///
/// let mut generator = Generator::new(GeneratorConfig {
///     seed: 7,
///     spangram_search: SpangramSearch::Targeted,
///     ..Default::default()
/// })
/// .unwrap();
/// let report = generator.locate_all("PUZZLES", ["SOL", "MAR"]).unwrap();
/// assert!(report.is_complete());
/// assert!(generator.board().is_fully_lettered());
/// assert!(generator.board().spangram_spans());
/// ```
pub struct Generator<R = ChaCha8Rng> {
    config: GeneratorConfig,
    grid: Grid,
    board: Board,
    history: History<Board>,
    pool: LetterPool,
    rng: R,
}

impl Generator<ChaCha8Rng> {
    /// A session whose RNG is seeded from `config.seed`.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Generator<R> {
    /// A session drawing randomness from `rng`.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;
        let board = Board::new(grid);
        Ok(Self {
            history: History::new(board.clone(), config.history_limit),
            pool: LetterPool::new(config.vowel_weight),
            config,
            grid,
            board,
            rng,
        })
    }

    /// The session configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The fill alphabet.
    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    /// Returns `true` if [`undo`](Self::undo) would change the board.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if [`redo`](Self::redo) would change the board.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Build a complete puzzle on a fresh board.
    ///
    /// Locked words of the current board keep their paths. The spangram
    /// is placed next, then the clues (blank lines, repeats and words
    /// already present are skipped), and finally every remaining cell is
    /// filled. The new board replaces the current one only on success.
    ///
    /// # Errors
    ///
    /// Fails with [`PlacementError::SpangramTooShort`],
    /// [`PlacementError::SpangramUnplaceable`] or
    /// [`PlacementError::Word`] without touching the current board. Clues
    /// that do not fit are reported in [`GenerationReport::unplaced`].
    pub fn locate_all<I, S>(
        &mut self,
        spangram: &str,
        clues: I,
    ) -> Result<GenerationReport, PlacementError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.generate(spangram, clues, true)
    }

    /// Drop every lock, then [`locate_all`](Self::locate_all).
    pub fn regenerate<I, S>(
        &mut self,
        spangram: &str,
        clues: I,
    ) -> Result<GenerationReport, PlacementError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.generate(spangram, clues, false)
    }

    fn generate<I, S>(
        &mut self,
        spangram: &str,
        clues: I,
        keep_locked: bool,
    ) -> Result<GenerationReport, PlacementError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let spangram = normalize_word(spangram)?;
        let len = spangram.chars().count();
        if len < self.config.min_spangram_len {
            log::warn!(
                "spangram '{spangram}' is shorter than {} letters",
                self.config.min_spangram_len
            );
            return Err(PlacementError::SpangramTooShort {
                word: spangram,
                len,
                min: self.config.min_spangram_len,
            });
        }

        let mut board = Board::new(self.grid);
        let mut present: IndexSet<String> = IndexSet::new();
        present.insert(spangram.clone());
        if keep_locked {
            for word in self.board.locked_words().filter(|w| !w.is_spangram) {
                board.place(word.clone())?;
                present.insert(word.word.clone());
            }
        }

        let spangram = place_spangram_with(
            &mut board,
            &spangram,
            self.config.min_spangram_len,
            self.config.spangram_search,
            &mut self.rng,
        )?;

        let clues: Vec<String> = clues
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !present.contains(w))
            .collect();
        let report = place_clues(&mut board, clues, &mut self.rng);
        let filled = fill(&mut board, &self.pool, &mut self.rng).len();

        log::info!(
            "generated board: spangram '{}', {} clues placed, {} unplaced, {} cells filled",
            spangram.word,
            report.placed.len(),
            report.unplaced.len(),
            filled
        );
        self.commit(board);
        Ok(GenerationReport {
            spangram,
            placed: report.placed,
            unplaced: report.unplaced,
            filled,
        })
    }

    /// Commit a hand-placed clue on `path` and lock it.
    ///
    /// Fill letters under the path are replaced by the word's letters.
    /// Returns the new word's index.
    pub fn add_manual_word(
        &mut self,
        word: &str,
        path: Vec<Cell>,
    ) -> Result<usize, PlacementError> {
        let word = normalize_word(word)?;
        let mut board = self.board.clone();
        match board.place(PlacedWord::manual(word, path)) {
            Ok(index) => {
                self.commit(board);
                Ok(index)
            }
            Err(e) => {
                log::warn!("manual word rejected: {e}");
                Err(e.into())
            }
        }
    }

    /// Move one letter of a placed word to `target`.
    pub fn relocate_letter(
        &mut self,
        word_index: usize,
        letter_index: usize,
        target: Cell,
    ) -> Result<(), BoardError> {
        let mut board = self.board.clone();
        if let Err(e) = board.relocate(word_index, letter_index, target) {
            log::warn!("letter move rejected: {e}");
            return Err(e);
        }
        self.commit(board);
        Ok(())
    }

    /// Remove the word at `index`.
    pub fn remove_word(&mut self, index: usize) -> Result<PlacedWord, BoardError> {
        let mut board = self.board.clone();
        let removed = board.remove(index)?;
        self.commit(board);
        Ok(removed)
    }

    /// Give every unlettered cell a random letter.
    pub fn fill_empty(&mut self) -> Vec<(Cell, char)> {
        let mut board = self.board.clone();
        let filled = fill(&mut board, &self.pool, &mut self.rng);
        if !filled.is_empty() {
            self.commit(board);
        }
        filled
    }

    /// Step back one edit. Returns `false` at the baseline.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(board) => {
                self.board = board.clone();
                true
            }
            None => false,
        }
    }

    /// Re-apply an undone edit. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(board) => {
                self.board = board.clone();
                true
            }
            None => false,
        }
    }

    /// Remove every word and letter. Undoable.
    pub fn clear(&mut self) {
        let mut board = self.board.clone();
        board.clear();
        self.commit(board);
    }

    /// Start over with an empty board and an empty history.
    pub fn reset(&mut self) {
        self.board = Board::new(self.grid);
        self.history.reset(self.board.clone());
    }

    /// Export the current board, stamped with the current time.
    pub fn export(&self, theme: &str, author: &str) -> Result<ExportedBoard, ExportError> {
        self.export_at(theme, author, Utc::now())
    }

    /// Export the current board with an explicit timestamp.
    pub fn export_at(
        &self,
        theme: &str,
        author: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<ExportedBoard, ExportError> {
        ExportedBoard::from_board(&self.board, theme, author, timestamp)
    }

    /// Replace the current board with a restored export. Undoable.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`ExportedBoard::restore`], fails with
    /// [`ExportError::Malformed`] if the export was made on a grid of a
    /// different size.
    pub fn load(&mut self, exported: &ExportedBoard) -> Result<(), ExportError> {
        let board = exported.restore()?;
        if *board.grid() != self.grid {
            return Err(ExportError::Malformed {
                reason: format!(
                    "board is {}x{}, session grid is {}x{}",
                    board.grid().rows(),
                    board.grid().cols(),
                    self.grid.rows(),
                    self.grid.cols()
                ),
            });
        }
        self.commit(board);
        Ok(())
    }

    fn commit(&mut self, board: Board) {
        self.board = board;
        self.history.record(self.board.clone());
    }
}
