//! Error types for the rules engine.

use crate::position::Position;

/// A rejected (non-dry-run) stone placement.
///
/// Both kinds are raised strictly before the board is touched. A placement on a
/// valid empty cell that flips nothing is not an error; it is reported as
/// `Ok(false)` by [`crate::board::Board::place_stone`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    /// The cell reference does not resolve to a cell on the board.
    #[error("Invalid position: '{cell_ref}'")]
    InvalidPosition { cell_ref: String },

    /// The target cell already holds a stone.
    #[error("A stone is already placed at {position}")]
    CellOccupied { position: Position },
}

/// Error type for compact board strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// The string does not describe exactly 64 cells.
    #[error("Invalid board length: expected 64 cells, got {0}")]
    InvalidLength(usize),

    /// A character other than 'X', 'O' or '-'.
    #[error("Invalid board character '{0}'")]
    InvalidChar(char),
}
