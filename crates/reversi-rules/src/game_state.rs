//! Game state management for Reversi.
//!
//! This module provides the `GameState` struct which drives a board through a
//! game: alternating colors, skipping a side that cannot move, detecting the
//! end of the game and keeping an in-memory history for undo.

use log::debug;

use crate::board::Board;
use crate::disc::Disc;
use crate::error::PlaceError;
use crate::position::Position;

/// Result of a placement attempt that was not rejected outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The stone was placed.
    Played {
        /// Stones turned to the mover's color, in row-major order.
        flipped: Vec<Position>,
        /// Set when the opponent had no legal move and the turn came back to the mover.
        skipped: bool,
    },
    /// The cell is empty and on the board but the placement flips nothing.
    /// The side to move is unchanged.
    Illegal,
}

/// Represents the state of a Reversi game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Disc,
    /// Move history: (move, board_before_move, side_to_move_before).
    /// None for move indicates a skipped turn.
    history: Vec<(Option<Position>, Board, Disc)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Disc::Black)
    }

    /// Creates a new game state from an existing board position.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which player moves next
    pub fn from_board(board: Board, side_to_move: Disc) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Places a stone for the side to move.
    ///
    /// On success the turn passes to the opponent, or stays with the mover when
    /// the opponent has no legal placement but the mover still has one.
    ///
    /// # Arguments
    ///
    /// * `cell_ref` - The target cell, e.g. `"d3"`
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError`] if the cell is off the board or occupied. The
    /// state is unchanged in that case, as it is for [`MoveOutcome::Illegal`].
    pub fn play(&mut self, cell_ref: &str) -> Result<MoveOutcome, PlaceError> {
        let before = self.board;
        let mover = self.side_to_move;

        if !self.board.place_stone(cell_ref, mover, false)? {
            return Ok(MoveOutcome::Illegal);
        }

        let pos = Position::from_cell_ref(cell_ref);
        let flipped = Position::iter()
            .filter(|&p| p != pos && before.cell_at(p) != self.board.cell_at(p))
            .collect();

        self.history.push((Some(pos), before, mover));
        self.side_to_move = mover.opposite();

        let skipped = !self.board.is_placeable(self.side_to_move)
            && self.board.is_placeable(mover);
        if skipped {
            debug!("{} has no legal move, turn returns to {mover}", self.side_to_move);
            self.record_pass();
        }

        Ok(MoveOutcome::Played { flipped, skipped })
    }

    /// Skips the turn of the side to move.
    ///
    /// # Returns
    ///
    /// `false` (and no change) if the side to move has a legal placement.
    pub fn pass(&mut self) -> bool {
        if self.board.is_placeable(self.side_to_move) {
            return false;
        }
        self.record_pass();
        true
    }

    fn record_pass(&mut self) {
        self.history.push((None, self.board, self.side_to_move));
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Returns the legal cells for the side to move.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.side_to_move)
    }

    /// Checks if the game has ended (neither side can place a stone).
    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    /// Returns the stone count for both players as `(black, white)`.
    pub fn score(&self) -> (u32, u32) {
        (
            self.board.count_stones(Disc::Black),
            self.board.count_stones(Disc::White),
        )
    }

    /// Returns the player with more stones, or `None` on a tie.
    pub fn winner(&self) -> Option<Disc> {
        self.board.winner()
    }

    /// Returns the most recent placement, ignoring skipped turns.
    pub fn last_move(&self) -> Option<Position> {
        self.history.iter().rev().find_map(|(pos, _, _)| *pos)
    }

    /// Returns the move history.
    ///
    /// Each entry is (move, board_before_move, side_to_move_before), with
    /// `None` for the move of a skipped turn.
    pub fn move_history(&self) -> &[(Option<Position>, Board, Disc)] {
        &self.history
    }

    /// Undoes the last placement together with any skipped turns recorded after it.
    ///
    /// # Returns
    ///
    /// `true` if anything was undone, `false` if the history is empty.
    pub fn undo(&mut self) -> bool {
        let mut undone = false;
        while let Some((pos, prev_board, prev_side)) = self.history.pop() {
            self.board = prev_board;
            self.side_to_move = prev_side;
            undone = true;
            if pos.is_some() {
                break;
            }
        }
        undone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(cell_ref: &str) -> Position {
        cell_ref.parse().unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Disc::Black);
        assert!(!game.is_finished());
        assert_eq!(game.score(), (2, 2));
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn test_play() {
        let mut game = GameState::new();
        let outcome = game.play("d3").unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Played {
                flipped: vec![pos("d4")],
                skipped: false
            }
        );
        assert_eq!(game.side_to_move(), Disc::White);
    }

    #[test]
    fn test_illegal_move_keeps_side() {
        let mut game = GameState::new();
        assert_eq!(game.play("a1").unwrap(), MoveOutcome::Illegal);
        assert_eq!(game.side_to_move(), Disc::Black);
        assert_eq!(*game.board(), Board::new());
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_rejected_moves_keep_state() {
        let mut game = GameState::new();
        assert!(matches!(
            game.play("d4"),
            Err(PlaceError::CellOccupied { .. })
        ));
        assert!(matches!(
            game.play("j4"),
            Err(PlaceError::InvalidPosition { .. })
        ));
        assert_eq!(game.side_to_move(), Disc::Black);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_side_to_move_alternates() {
        let mut game = GameState::new();
        game.play("d3").unwrap();
        assert_eq!(game.side_to_move(), Disc::White);
        game.play("c3").unwrap();
        assert_eq!(game.side_to_move(), Disc::Black);
    }

    #[test]
    fn test_score_tracking() {
        let mut game = GameState::new();
        game.play("d3").unwrap();
        assert_eq!(game.score(), (4, 1));
    }

    #[test]
    fn test_no_skip_when_game_ends() {
        // Black takes h8, after which neither side can use a1.
        let board = Board::from_string(&format!("-{}O-", "X".repeat(61))).unwrap();
        let mut game = GameState::from_board(board, Disc::Black);

        let outcome = game.play("h8").unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Played {
                flipped: vec![pos("g8")],
                skipped: false
            }
        );
        // Neither side can use a1, so the game is over.
        assert!(game.is_finished());
    }

    #[test]
    fn test_skip_turn_returns_to_mover() {
        // a1 and h8 are both Black moves; after Black takes a1, White still
        // has no move and Black keeps the turn.
        let board = Board::from_string(
            "-OXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXO-",
        )
        .unwrap();
        let mut game = GameState::from_board(board, Disc::Black);
        assert!(!game.board().is_placeable(Disc::White));

        let outcome = game.play("a1").unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Played {
                flipped: vec![pos("b1")],
                skipped: true
            }
        );
        assert_eq!(game.side_to_move(), Disc::Black);
        assert_eq!(game.move_history().len(), 2);
        assert_eq!(game.move_history()[1].0, None);
        assert_eq!(game.last_move(), Some(pos("a1")));

        game.play("h8").unwrap();
        assert!(game.is_finished());
        assert_eq!(game.score(), (64, 0));
        assert_eq!(game.winner(), Some(Disc::Black));
    }

    #[test]
    fn test_pass() {
        let mut game = GameState::new();
        assert!(!game.pass());
        assert_eq!(game.side_to_move(), Disc::Black);

        let board = Board::from_string(&format!("X{}", "-".repeat(63))).unwrap();
        let mut game = GameState::from_board(board, Disc::White);
        assert!(game.pass());
        assert_eq!(game.side_to_move(), Disc::Black);
    }

    #[test]
    fn test_undo() {
        let mut game = GameState::new();
        let original_board = *game.board();

        game.play("d3").unwrap();
        assert_ne!(*game.board(), original_board);

        assert!(game.undo());
        assert_eq!(*game.board(), original_board);
        assert_eq!(game.side_to_move(), Disc::Black);
        assert!(!game.undo());
    }

    #[test]
    fn test_undo_removes_skipped_turn() {
        let board = Board::from_string(
            "-OXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXO-",
        )
        .unwrap();
        let mut game = GameState::from_board(board, Disc::Black);
        game.play("a1").unwrap();

        assert!(game.undo());
        assert_eq!(*game.board(), board);
        assert_eq!(game.side_to_move(), Disc::Black);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_history_complete_record() {
        let mut game = GameState::new();
        game.play("d3").unwrap();
        game.play("c3").unwrap();
        game.play("c4").unwrap();

        let history = game.move_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].0, Some(pos("d3")));
        assert_eq!(history[0].2, Disc::Black);
        assert_eq!(history[1].0, Some(pos("c3")));
        assert_eq!(history[1].2, Disc::White);
        assert_eq!(history[2].0, Some(pos("c4")));
        assert_eq!(history[2].2, Disc::Black);
        assert_eq!(game.last_move(), Some(pos("c4")));
    }

    #[test]
    fn test_game_record_black_57_white_7() {
        let mut game = GameState::new();
        let moves_str = "e6f4c3c4d3d6e3d2f3f5c1c2b4b3a3e2c5c6f6g5g4a2a1a4f2h5g3f7h6h3f8f1e1d1h4h7a5g7h8g6g1g8b6e8b5g2d8b7a6h2e7d7c8a8a7b8c7h1b2b1";

        let moves: Vec<&str> = moves_str
            .as_bytes()
            .chunks(2)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect();
        assert_eq!(moves.len(), 60);

        for (i, cell_ref) in moves.iter().enumerate() {
            let outcome = game
                .play(cell_ref)
                .unwrap_or_else(|e| panic!("Move #{} ({cell_ref}) rejected: {e}", i + 1));
            assert!(
                matches!(outcome, MoveOutcome::Played { .. }),
                "Move #{} ({cell_ref}) was illegal",
                i + 1
            );
        }

        assert!(game.is_finished());
        assert_eq!(game.score(), (57, 7));
        assert_eq!(game.winner(), Some(Disc::Black));
        assert_eq!(game.last_move(), Some(pos("b1")));

        let actual: Vec<Position> = game
            .move_history()
            .iter()
            .filter_map(|(p, _, _)| *p)
            .collect();
        let expected: Vec<Position> = moves.iter().map(|s| pos(s)).collect();
        assert_eq!(actual, expected);
    }
}
