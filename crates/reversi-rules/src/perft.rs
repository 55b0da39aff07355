use crate::board::Board;
use crate::disc::Disc;

/// Executes a perft run starting from the standard initial position.
///
/// Legality and flips come from the regular placement rules, so the node
/// counts double as a check of the rules themselves.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Disc::Black, depth)
}

fn perft(board: &Board, side_to_move: Disc, depth: u32) -> u64 {
    let moves = board.legal_moves(side_to_move);

    if moves.is_empty() {
        let opponent = side_to_move.opposite();
        if board.is_placeable(opponent) {
            return perft(board, opponent, depth);
        }
        return 1;
    }

    if depth <= 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for pos in moves {
        let mut next = *board;
        let placed = next.place_stone_at(pos, side_to_move, false);
        debug_assert_eq!(placed, Ok(true));
        nodes += perft(&next, side_to_move.opposite(), depth - 1);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_shallow() {
        assert_eq!(perft_root(1), 4);
        assert_eq!(perft_root(2), 12);
        assert_eq!(perft_root(3), 56);
    }
}
