//! Stone colors and cell contents.

use std::fmt;
use std::str::FromStr;

/// The color of a stone.
///
/// The `Disc` enum has two variants:
///
/// * `Black` - The side that moves first.
/// * `White` - The side that moves second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its compact board-string character.
    ///
    /// # Returns
    ///
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Returns the opposite disc.
    ///
    /// # Returns
    ///
    /// * `Disc::White` for `Disc::Black`
    /// * `Disc::Black` for `Disc::White`
    pub fn opposite(self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disc::Black => write!(f, "Black"),
            Disc::White => write!(f, "White"),
        }
    }
}

/// Error returned when a color name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color '{0}': must be black or white")]
pub struct ParseDiscError(pub String);

impl FromStr for Disc {
    type Err = ParseDiscError;

    /// Parses "black"/"white" (or "b"/"w"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Disc::Black),
            "white" | "w" => Ok(Disc::White),
            _ => Err(ParseDiscError(s.to_string())),
        }
    }
}

/// The contents of a single board cell.
///
/// Every cell always holds exactly one of these three states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Returns `true` if no stone is on the cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the color of the stone on the cell, if any.
    #[inline]
    pub fn disc(self) -> Option<Disc> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Disc::Black),
            Cell::White => Some(Disc::White),
        }
    }

    /// Converts the cell to its compact board-string character.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Cell::Empty`
    /// * the disc character otherwise
    pub fn to_char(self) -> char {
        match self.disc() {
            Some(disc) => disc.to_char(),
            None => '-',
        }
    }
}

impl From<Disc> for Cell {
    fn from(disc: Disc) -> Self {
        match disc {
            Disc::Black => Cell::Black,
            Disc::White => Cell::White,
        }
    }
}
