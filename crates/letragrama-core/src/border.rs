//! Board edges and border sets.
//!
//! A cell on the rim of the grid touches one border, a corner touches two.
//! The spangram rule needs to ask "which borders face the ones this cell
//! touches?", so the set type supports mapping through [`Border::opposite`].

use std::fmt;

/// One of the four edges of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Border {
    /// Row 0.
    Top,
    /// Row `rows - 1`.
    Bottom,
    /// Column 0.
    Left,
    /// Column `cols - 1`.
    Right,
}

impl Border {
    /// All borders in declaration order.
    pub const ALL: [Border; 4] = [Border::Top, Border::Bottom, Border::Left, Border::Right];

    /// The facing border: top↔bottom, left↔right.
    pub const fn opposite(self) -> Border {
        match self {
            Border::Top => Border::Bottom,
            Border::Bottom => Border::Top,
            Border::Left => Border::Right,
            Border::Right => Border::Left,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Border::Top => 0b0001,
            Border::Bottom => 0b0010,
            Border::Left => 0b0100,
            Border::Right => 0b1000,
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Border::Top => "top",
            Border::Bottom => "bottom",
            Border::Left => "left",
            Border::Right => "right",
        };
        f.write_str(name)
    }
}

/// A small set of [`Border`]s, stored as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BorderSet(u8);

impl BorderSet {
    /// The empty set (an interior cell).
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns `true` if no border is in the set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of borders in the set (0, 1 or 2 for a real grid cell).
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Add a border.
    pub fn insert(&mut self, border: Border) {
        self.0 |= border.bit();
    }

    /// Returns `true` if `border` is in the set.
    pub const fn contains(self, border: Border) -> bool {
        self.0 & border.bit() != 0
    }

    /// Returns `true` if the sets share at least one border.
    pub const fn intersects(self, other: BorderSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Map every member through [`Border::opposite`].
    ///
    /// A top-left corner maps to `{bottom, right}`.
    pub fn opposites(self) -> BorderSet {
        self.iter().map(Border::opposite).collect()
    }

    /// Iterate members in [`Border::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Border> {
        Border::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Border> for BorderSet {
    fn from_iter<I: IntoIterator<Item = Border>>(iter: I) -> Self {
        let mut set = BorderSet::empty();
        for b in iter {
            set.insert(b);
        }
        set
    }
}

impl<const N: usize> From<[Border; N]> for BorderSet {
    fn from(borders: [Border; N]) -> Self {
        borders.into_iter().collect()
    }
}

impl fmt::Display for BorderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, b) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{b}")?;
        }
        f.write_str("}")
    }
}
