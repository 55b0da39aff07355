//! Reversi board representation and move resolution.

use std::fmt;

use log::{debug, trace};

use crate::disc::{Cell, Disc};
use crate::error::{ParseBoardError, PlaceError};
use crate::position::{BOARD_SIZE, Direction, Position, TOTAL_CELLS};

/// Represents an 8x8 Reversi board.
///
/// `Board` is a plain `Copy` value, so a speculative move is made on a copy
/// and committed by assigning the copy back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    /// Creates a board with the standard Reversi starting position.
    ///
    /// The initial position has:
    /// - White discs on D4 and E5
    /// - Black discs on E4 and D5
    fn default() -> Self {
        let mut board = Board::empty();
        board.cells[3][3] = Cell::White; // d4
        board.cells[4][4] = Cell::White; // e5
        board.cells[3][4] = Cell::Black; // e4
        board.cells[4][3] = Cell::Black; // d5
        board
    }
}

impl Board {
    /// Creates a new `Board` with the initial Reversi setup.
    ///
    /// # Returns
    /// A new `Board` instance.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with every cell empty.
    pub fn empty() -> Board {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a `Board` from a compact string representation.
    ///
    /// The string should contain 64 characters describing the cells from A1 to H8
    /// in row-major order. Whitespace is ignored. Characters are interpreted as:
    /// - 'X' for Black discs
    /// - 'O' for White discs
    /// - '-' for empty cells
    ///
    /// # Arguments
    /// * `board_string` - A string representing the board.
    ///
    /// # Returns
    /// The parsed board, or a [`ParseBoardError`] describing the first problem found.
    pub fn from_string(board_string: &str) -> Result<Board, ParseBoardError> {
        let chars: Vec<char> = board_string
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if chars.len() != TOTAL_CELLS {
            return Err(ParseBoardError::InvalidLength(chars.len()));
        }

        let mut board = Board::empty();
        for (pos, c) in Position::iter().zip(chars) {
            let cell = match c.to_ascii_uppercase() {
                'X' => Cell::Black,
                'O' => Cell::White,
                '-' => Cell::Empty,
                _ => return Err(ParseBoardError::InvalidChar(c)),
            };
            board.set_cell(pos, cell);
        }
        Ok(board)
    }

    /// Converts the board to the compact string accepted by [`Board::from_string`].
    pub fn to_compact_string(&self) -> String {
        Position::iter().map(|pos| self.cell_at(pos).to_char()).collect()
    }

    /// Gets the contents of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    #[inline]
    pub fn cell_at(&self, pos: Position) -> Cell {
        assert!(pos.is_valid(), "Board::cell_at called on {pos:?}");
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Overwrites the contents of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    #[inline]
    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        assert!(pos.is_valid(), "Board::set_cell called on {pos:?}");
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Places a stone at a cell reference and flips the captured stones.
    ///
    /// The move is resolved on a copy of the board in all eight directions and
    /// committed only if at least one direction flips something.
    ///
    /// # Arguments
    /// * `cell_ref` - The target cell, e.g. `"d3"`.
    /// * `disc` - The color being placed.
    /// * `dry_run` - When set, the board is never modified and rejections
    ///   degrade to `Ok(false)`.
    ///
    /// # Returns
    /// `Ok(true)` if the move is legal (and was committed unless `dry_run`),
    /// `Ok(false)` if it is not, in which case the board is unchanged.
    ///
    /// # Errors
    /// [`PlaceError::InvalidPosition`] or [`PlaceError::CellOccupied`] when not `dry_run`.
    pub fn place_stone(
        &mut self,
        cell_ref: &str,
        disc: Disc,
        dry_run: bool,
    ) -> Result<bool, PlaceError> {
        let pos = Position::from_cell_ref(cell_ref);
        if pos.is_out_of_board() {
            if dry_run {
                return Ok(false);
            }
            return Err(PlaceError::InvalidPosition {
                cell_ref: cell_ref.to_string(),
            });
        }
        self.place_stone_at(pos, disc, dry_run)
    }

    /// Same as [`Board::place_stone`], addressed by position.
    pub fn place_stone_at(
        &mut self,
        pos: Position,
        disc: Disc,
        dry_run: bool,
    ) -> Result<bool, PlaceError> {
        if pos.is_out_of_board() {
            if dry_run {
                return Ok(false);
            }
            return Err(PlaceError::InvalidPosition {
                cell_ref: format!("({}, {})", pos.row, pos.col),
            });
        }

        if !self.cell_at(pos).is_empty() {
            if dry_run {
                return Ok(false);
            }
            return Err(PlaceError::CellOccupied { position: pos });
        }

        let (next, flipped) = self.resolve(pos, disc);
        if flipped.is_empty() {
            return Ok(false);
        }

        if !dry_run {
            debug!("{disc} placed at {pos}, flipped {}", flipped.len());
            *self = next;
        }
        Ok(true)
    }

    /// Resolves a placement at an empty cell on a copy of the board.
    ///
    /// Returns the resulting board and the flipped positions, grouped by
    /// direction in [`Direction::ALL`] order.
    fn resolve(&self, pos: Position, disc: Disc) -> (Board, Vec<Position>) {
        let mut copied = *self;
        copied.set_cell(pos, disc.into());

        let flipped = Direction::ALL
            .iter()
            .flat_map(|&direction| copied.turn(pos.step(direction), disc, direction))
            .collect();
        (copied, flipped)
    }

    /// Resolves the flips of one direction.
    ///
    /// Walks from `start` in `direction`. The scan succeeds when it meets an
    /// `attacker` stone after at least one opponent stone; those opponent stones
    /// are turned to `attacker` on this board. An empty cell, the board edge, or
    /// an immediately adjacent `attacker` stone ends the scan with nothing flipped.
    ///
    /// # Returns
    /// The flipped positions in visit order (empty if the direction failed).
    pub fn turn(
        &mut self,
        start: Position,
        attacker: Disc,
        direction: Direction,
    ) -> Vec<Position> {
        let mut stones_to_flip = Vec::new();
        let mut pos = start;
        loop {
            if pos.is_out_of_board() {
                trace!("{direction:?} from {start}: reached the edge");
                return Vec::new();
            }
            match self.cell_at(pos).disc() {
                None => {
                    trace!("{direction:?} from {start}: reached an empty cell at {pos}");
                    return Vec::new();
                }
                Some(disc) if disc == attacker => break,
                Some(_) => {
                    stones_to_flip.push(pos);
                    pos = pos.step(direction);
                }
            }
        }

        for &flip in &stones_to_flip {
            self.set_cell(flip, attacker.into());
        }
        stones_to_flip
    }

    /// Lists the stones a placement would flip, without modifying the board.
    ///
    /// # Returns
    /// An empty list if `pos` is off the board, occupied, or not a legal move.
    pub fn flips_for(&self, pos: Position, disc: Disc) -> Vec<Position> {
        if pos.is_out_of_board() || !self.cell_at(pos).is_empty() {
            return Vec::new();
        }
        self.resolve(pos, disc).1
    }

    /// Checks if placing `disc` at `pos` is legal.
    ///
    /// This is the dry-run form of [`Board::place_stone_at`]: off-board and
    /// occupied cells simply report `false`.
    #[inline]
    pub fn is_legal_move(&self, pos: Position, disc: Disc) -> bool {
        !self.flips_for(pos, disc).is_empty()
    }

    /// Returns every legal cell for `disc` in row-major order.
    pub fn legal_moves(&self, disc: Disc) -> Vec<Position> {
        Position::iter()
            .filter(|&pos| self.is_legal_move(pos, disc))
            .collect()
    }

    /// Checks if `disc` has at least one legal placement.
    ///
    /// Scans the cells in row-major order and stops at the first legal one.
    pub fn is_placeable(&self, disc: Disc) -> bool {
        Position::iter().any(|pos| self.cell_at(pos).is_empty() && self.is_legal_move(pos, disc))
    }

    /// Checks if the game is over (neither color can place a stone).
    ///
    /// A full board is covered by the same condition.
    pub fn is_finished(&self) -> bool {
        !self.is_placeable(Disc::White) && !self.is_placeable(Disc::Black)
    }

    /// Returns the number of `disc` stones on the board.
    pub fn count_stones(&self, disc: Disc) -> u32 {
        let target = Cell::from(disc);
        self.cells.iter().flatten().filter(|&&c| c == target).count() as u32
    }

    /// Returns the number of empty cells on the board.
    pub fn count_empty(&self) -> u32 {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count() as u32
    }

    /// Returns the color with more stones, or `None` on a tie.
    pub fn winner(&self) -> Option<Disc> {
        let black = self.count_stones(Disc::Black);
        let white = self.count_stones(Disc::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Board {
    /// Renders a column header followed by one labelled line per row.
    ///
    /// White is drawn as '●', Black as '○' and empty cells as '-'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{}", i + 1)?;
            for cell in row {
                let marker = match cell {
                    Cell::White => '●',
                    Cell::Black => '○',
                    Cell::Empty => '-',
                };
                write!(f, " {marker}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
