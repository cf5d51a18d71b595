//! Player colors and cell states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the color of a player and of the discs they place.
///
/// The `Disc` enum has two variants:
///
/// * `First` - The player who moves first.
/// * `Second` - The player who moves second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Disc {
    First,
    Second,
}

impl Disc {
    /// Both colors in seating order.
    pub const ALL: [Disc; 2] = [Disc::First, Disc::Second];

    /// Returns the opposite color.
    pub fn opposite(self) -> Disc {
        match self {
            Disc::First => Disc::Second,
            Disc::Second => Disc::First,
        }
    }

    /// Returns the seat index of this color (`0` for `First`, `1` for `Second`).
    pub fn index(self) -> usize {
        match self {
            Disc::First => 0,
            Disc::Second => 1,
        }
    }

    /// Converts the disc to its character representation.
    ///
    /// # Returns
    ///
    /// * `'X'` for `Disc::First`
    /// * `'O'` for `Disc::Second`
    pub fn to_char(self) -> char {
        Cell::from(self).to_char()
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disc::First => write!(f, "First"),
            Disc::Second => write!(f, "Second"),
        }
    }
}

/// State of a single cell on the board.
///
/// Every coordinate in a board's domain holds exactly one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    First,
    Second,
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Cell::Empty`
    /// * `'X'` for `Cell::First`
    /// * `'O'` for `Cell::Second`
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::First => 'X',
            Cell::Second => 'O',
        }
    }

    /// Returns the color occupying this cell, or `None` when empty.
    pub fn disc(self) -> Option<Disc> {
        match self {
            Cell::Empty => None,
            Cell::First => Some(Disc::First),
            Cell::Second => Some(Disc::Second),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Disc> for Cell {
    fn from(disc: Disc) -> Self {
        match disc {
            Disc::First => Cell::First,
            Disc::Second => Cell::Second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Disc::First.opposite(), Disc::Second);
        assert_eq!(Disc::Second.opposite(), Disc::First);
    }

    #[test]
    fn test_cell_roundtrip_through_disc() {
        for disc in Disc::ALL {
            assert_eq!(Cell::from(disc).disc(), Some(disc));
        }
        assert_eq!(Cell::Empty.disc(), None);
    }

    #[test]
    fn test_chars() {
        assert_eq!(Cell::Empty.to_char(), '-');
        assert_eq!(Disc::First.to_char(), 'X');
        assert_eq!(Disc::Second.to_char(), 'O');
    }

    #[test]
    fn test_index_matches_seating_order() {
        assert_eq!(Disc::ALL[Disc::First.index()], Disc::First);
        assert_eq!(Disc::ALL[Disc::Second.index()], Disc::Second);
    }
}
