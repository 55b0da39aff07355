//! Parsing helpers for move sequences.

use anyhow::{Result, anyhow, bail};
use reversi_rules::position::Position;

/// Parses a concatenated move string like "f5d6c3" into a list of positions.
///
/// Reads two characters at a time, interpreting each pair as a cell reference.
pub fn parse_move_string(input: &str) -> Result<Vec<Position>> {
    let chars: Vec<char> = input.trim().chars().collect();
    if chars.is_empty() {
        bail!("Empty input");
    }
    if !chars.len().is_multiple_of(2) {
        bail!("Input length must be even (each move is 2 characters)");
    }

    chars
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let move_str: String = pair.iter().collect();
            move_str
                .parse::<Position>()
                .map_err(|e| anyhow!("Invalid cell at position {}: '{move_str}' ({e})", i + 1))
        })
        .collect()
}
