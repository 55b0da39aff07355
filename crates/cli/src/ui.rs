//! Interactive turn loop for two human players.

use anyhow::{Context, Result};
use log::debug;
use reversi_rules::disc::Disc;
use reversi_rules::game_state::MoveOutcome;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::game::GameState;
use crate::parse::parse_move_string;

const HELP: &str = "\
Commands:
  <cell>       place a stone, e.g. d3
  play <seq>   place several stones, e.g. play d3c5f6
  moves, m     list legal moves
  undo, u      take back the last move
  new, n       start a new game
  help, h      show this help
  quit, q      exit";

/// Runs the interactive loop until the game ends or the user quits.
///
/// # Arguments
/// * `first` - The color that moves first
/// * `moves` - Optional move sequence to replay before the first prompt
pub fn ui_loop(first: Disc, moves: Option<&str>) -> Result<()> {
    let mut rl = DefaultEditor::new().context("failed to initialize the line editor")?;
    let mut game = GameState::new(first);

    if let Some(moves) = moves {
        play_sequence(&mut game, moves).context("failed to replay --moves")?;
    }

    loop {
        game.print();
        println!();

        if game.is_finished() {
            game.print_result();
            break;
        }

        let prompt = format!("{} > ", game.side_to_move());
        match rl.readline(&prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let mut parts = line.split_whitespace();
                let Some(cmd) = parts.next() else {
                    continue;
                };
                println!();

                match cmd {
                    "quit" | "q" => break,
                    "new" | "n" => game.reset(),
                    "undo" | "u" => {
                        if !game.undo() {
                            println!("Cannot undo.\n");
                        }
                    }
                    "moves" | "m" => {
                        let legal: Vec<String> =
                            game.legal_moves().iter().map(|p| p.to_string()).collect();
                        println!("Legal moves: {}\n", legal.join(" "));
                    }
                    "help" | "h" => println!("{HELP}\n"),
                    "play" => match parts.next() {
                        Some(seq) => {
                            if let Err(e) = play_sequence(&mut game, seq) {
                                println!("{e:#}\n");
                            }
                        }
                        None => println!("Usage: play <moves>\n"),
                    },
                    cell_ref => {
                        play_one(&mut game, cell_ref);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        }
    }
    Ok(())
}

/// Attempts a single placement and reports the result.
///
/// # Returns
/// `true` if the stone was placed.
fn play_one(game: &mut GameState, cell_ref: &str) -> bool {
    let mover = game.side_to_move();
    match game.play(cell_ref) {
        Ok(MoveOutcome::Played { flipped, skipped }) => {
            debug!("{mover} {cell_ref} flipped {flipped:?}");
            println!("{mover} plays {cell_ref}, flipping {}.\n", flipped.len());
            if skipped {
                println!("{} has no legal move and passes.\n", mover.opposite());
            }
            true
        }
        Ok(MoveOutcome::Illegal) => {
            let legal: Vec<String> = game.legal_moves().iter().map(|p| p.to_string()).collect();
            println!("Illegal move: {cell_ref}. Legal moves: {}\n", legal.join(" "));
            false
        }
        Err(e) => {
            println!("{e}\n");
            false
        }
    }
}

/// Replays a concatenated move sequence, stopping at the first rejected move.
fn play_sequence(game: &mut GameState, seq: &str) -> Result<()> {
    for pos in parse_move_string(seq)? {
        if !play_one(game, &pos.to_string()) {
            anyhow::bail!("Stopped at {pos}");
        }
    }
    Ok(())
}
