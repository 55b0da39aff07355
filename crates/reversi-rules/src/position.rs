use std::fmt;
use std::str::FromStr;

/// Number of cells along one edge of the board.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

const COLUMN_LETTERS: &str = "abcdefgh";
const ROW_DIGITS: &str = "12345678";

/// One of the eight compass directions on the board.
///
/// Rows grow downward (row label 1 is the top row) and columns grow to the
/// right (column A is the leftmost), so `N` decreases the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Returns the `(Δrow, Δcol)` offset of this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }
}

/// A coordinate on the board, addressed by row and column.
///
/// A `Position` may lie outside the board: parsing never fails and stepping
/// never clamps, so callers check [`Position::is_valid`] before reading a cell.
///
/// ```text
///   A B C D E F G H
/// 1 (0,0) ...   (0,7)
/// ...
/// 8 (7,0) ...   (7,7)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// A recognizably invalid position, produced by malformed cell references.
    pub const INVALID: Position = Position { row: -1, col: -1 };

    /// Creates a position from raw coordinates. The result may be off the board.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    /// Resolves a cell reference such as `"d3"` into a position.
    ///
    /// Malformed references yield [`Position::INVALID`] instead of an error.
    /// Use [`str::parse`] when the reason for a rejection matters.
    pub fn from_cell_ref(cell_ref: &str) -> Position {
        cell_ref.parse().unwrap_or(Position::INVALID)
    }

    /// Returns `true` iff both coordinates lie in `0..8`.
    #[inline]
    pub fn is_valid(self) -> bool {
        (0..BOARD_SIZE as i8).contains(&self.row) && (0..BOARD_SIZE as i8).contains(&self.col)
    }

    /// Returns `true` iff the position is off the board.
    #[inline]
    pub fn is_out_of_board(self) -> bool {
        !self.is_valid()
    }

    /// Returns the position one step away in `direction`, without bounds clamping.
    #[inline]
    pub fn step(self, direction: Direction) -> Position {
        let (d_row, d_col) = direction.delta();
        Position {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Converts the position back into a cell reference (`"d3"`).
    ///
    /// # Returns
    ///
    /// `None` if the position is off the board.
    pub fn to_cell_ref(self) -> Option<String> {
        self.is_valid().then(|| self.to_string())
    }

    /// Returns the row-major index (0-63) of a valid position.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    #[inline]
    pub fn index(self) -> usize {
        assert!(self.is_valid(), "Position::index called on {self:?}");
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Returns an iterator over all 64 cells in row-major order (a1, b1, ..., h8).
    pub fn iter() -> impl Iterator<Item = Position> {
        (0..TOTAL_CELLS).map(|i| Position::new((i / BOARD_SIZE) as i8, (i % BOARD_SIZE) as i8))
    }
}

/// Error type for cell reference parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    /// The reference is not exactly two characters long.
    #[error("Invalid cell reference: must be 2 characters (e.g., 'd3')")]
    InvalidFormat,
    /// The column letter is outside A-H.
    #[error("Invalid column '{0}': must be a-h or A-H")]
    InvalidColumn(char),
    /// The row digit is outside 1-8.
    #[error("Invalid row '{0}': must be 1-8")]
    InvalidRow(char),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses a cell reference of the form `<letter A-H><digit 1-8>`.
    ///
    /// The letter is case-insensitive and surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(col_char), Some(row_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParsePositionError::InvalidFormat);
        };

        let col = COLUMN_LETTERS
            .find(col_char.to_ascii_lowercase())
            .ok_or(ParsePositionError::InvalidColumn(col_char))?;
        let row = ROW_DIGITS
            .find(row_char)
            .ok_or(ParsePositionError::InvalidRow(row_char))?;

        Ok(Position::new(row as i8, col as i8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_out_of_board() {
            return write!(f, "none");
        }

        let col = (self.col as u8 + b'a') as char;
        let row = (self.row as u8 + b'1') as char;
        write!(f, "{col}{row}")
    }
}
