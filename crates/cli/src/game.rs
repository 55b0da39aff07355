//! Game state for the Reversi CLI.
//!
//! This module wraps the core game state and adds colored terminal output.

use colored::Colorize;
use reversi_rules::disc::{Cell, Disc};
use reversi_rules::error::PlaceError;
use reversi_rules::game_state::{self, MoveOutcome};
use reversi_rules::position::Position;

/// A thin wrapper around the core `GameState` that adds colored display.
pub struct GameState {
    core: game_state::GameState,
    first: Disc,
}

impl GameState {
    /// Creates a new game in the initial position.
    ///
    /// # Arguments
    /// * `first` - The color that moves first
    pub fn new(first: Disc) -> Self {
        Self {
            core: game_state::GameState::from_board(Default::default(), first),
            first,
        }
    }

    /// Restarts from the initial position with the same first player.
    pub fn reset(&mut self) {
        *self = Self::new(self.first);
    }

    /// Places a stone for the side to move.
    pub fn play(&mut self, cell_ref: &str) -> Result<MoveOutcome, PlaceError> {
        self.core.play(cell_ref)
    }

    /// Undoes the last placement.
    ///
    /// # Returns
    /// `true` if a move was undone, `false` if no moves to undo
    pub fn undo(&mut self) -> bool {
        self.core.undo()
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.core.side_to_move()
    }

    /// Returns the legal cells for the side to move.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.core.legal_moves()
    }

    /// Checks if the game has ended.
    pub fn is_finished(&self) -> bool {
        self.core.is_finished()
    }

    /// Prints a colored representation of the board to the terminal.
    ///
    /// Legal cells for the side to move are marked with '·' and the last
    /// placement is highlighted.
    pub fn print(&self) {
        let board = self.core.board();
        let side_to_move = self.core.side_to_move();
        let last_move = self.core.last_move();
        let legal = self.core.legal_moves();
        let (black_count, white_count) = self.core.score();

        println!("  A B C D E F G H");
        for row in 0..8 {
            print!("{}", row + 1);
            for col in 0..8 {
                let pos = Position::new(row, col);
                let is_last_move = Some(pos) == last_move;
                let symbol = match board.cell_at(pos) {
                    Cell::Black if is_last_move => "○".on_bright_black().bright_green(),
                    Cell::White if is_last_move => "●".on_bright_black().bright_yellow(),
                    Cell::Black => "○".bright_green(),
                    Cell::White => "●".bright_yellow(),
                    Cell::Empty if legal.contains(&pos) => "·".bright_cyan(),
                    Cell::Empty => "-".normal(),
                };
                print!(" {symbol}");
            }

            match row {
                2 if !self.core.is_finished() => {
                    let player_info = match side_to_move {
                        Disc::Black => "Black's turn (○)".bright_green(),
                        Disc::White => "White's turn (●)".bright_yellow(),
                    };
                    print!("   {player_info}");
                }
                3 => print!("   Black: {}", format!("{black_count:2}").bright_green()),
                4 => print!("   White: {}", format!("{white_count:2}").bright_yellow()),
                _ => {}
            }
            println!();
        }
    }

    /// Prints the final score and the winner.
    pub fn print_result(&self) {
        let (black_count, white_count) = self.core.score();
        println!("{}", "*** Game Over ***".bright_red());
        println!("Black: {black_count}  White: {white_count}");
        match self.core.winner() {
            Some(Disc::Black) => println!("{}", "Black wins!".bright_green()),
            Some(Disc::White) => println!("{}", "White wins!".bright_yellow()),
            None => println!("{}", "Draw".bright_cyan()),
        }
    }
}
