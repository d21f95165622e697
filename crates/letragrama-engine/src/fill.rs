//! Random letters for the cells no word covers.

use letragrama_board::Board;
use letragrama_core::Cell;
use rand::Rng;

/// Weighted alphabet used to fill empty cells.
///
/// Every consonant appears once and every vowel `vowel_weight` times, so a
/// uniform draw from the pool favours vowels by that factor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Vowels, weighted by `vowel_weight`.
    pub const VOWELS: &'static str = "AEIOU";
    /// Consonants, weight 1.
    pub const CONSONANTS: &'static str = "BCDFGHJKLMNPQRSTVWXYZ";

    /// Build the pool with each vowel repeated `vowel_weight` times.
    ///
    /// A weight of 0 leaves only consonants.
    pub fn new(vowel_weight: usize) -> Self {
        let letters = Self::VOWELS
            .chars()
            .flat_map(|v| std::iter::repeat_n(v, vowel_weight))
            .chain(Self::CONSONANTS.chars())
            .collect();
        Self { letters }
    }

    /// The pool contents, vowels first.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of occurrences of `letter` in the pool.
    pub fn weight(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// One uniform draw.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.letters[rng.random_range(0..self.letters.len())]
    }
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Give every unlettered cell one letter drawn from `pool`.
///
/// Returns the newly lettered cells in canonical order. Cells covered by a
/// word or already filled are left alone, so a second call on the same
/// board returns an empty list.
pub fn fill<R: Rng + ?Sized>(
    board: &mut Board,
    pool: &LetterPool,
    rng: &mut R,
) -> Vec<(Cell, char)> {
    let empty: Vec<Cell> = board.unlettered_cells().collect();
    let mut filled = Vec::with_capacity(empty.len());
    for cell in empty {
        let letter = pool.draw(rng);
        match board.set_fill_letter(cell, letter) {
            Ok(true) => filled.push((cell, letter)),
            Ok(false) => {}
            Err(e) => log::debug!("cannot fill {cell}: {e}"),
        }
    }
    log::debug!("filled {} cells", filled.len());
    filled
}
