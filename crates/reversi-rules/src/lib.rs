//! Rules engine for Reversi/Othello.
//!
//! The engine works on a plain 8x8 [`board::Board`] value. Moves are addressed
//! with cell references such as `"d3"` (column letter A-H, row digit 1-8) and
//! are resolved on a copy of the board, so a rejected or dry-run placement
//! never leaves a trace.

pub mod board;
pub mod disc;
pub mod error;
pub mod game_state;
pub mod perft;
pub mod position;
