use itertools::Itertools;

use crate::board::Board;
use crate::coord::Coord;
use crate::force::Force;


const ALL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PieceMoves {
    /// Single diagonal steps onto an empty square.
    pub normal: Vec<Coord>,
    /// Two-square diagonal jumps over an adjacent opponent piece.
    pub jumps: Vec<Coord>,
}

// Kings move in all four diagonals; men only toward the far row. The same
// direction set governs jumps, so a man cannot jump backwards.
fn directions(board: &Board, force: Force, piece: Coord) -> Vec<(i8, i8)> {
    if board.is_king(force, piece) {
        ALL_DIRECTIONS.to_vec()
    } else {
        let d = force.forward();
        vec![(d, 1), (d, -1)]
    }
}

/// All legal moves for one piece of `force`, one hop at a time. Jump chains
/// are the turn engine's job: it re-invokes this after every hop.
pub fn piece_moves(board: &Board, force: Force, piece: Coord) -> PieceMoves {
    let mut moves = PieceMoves::default();
    for dir in directions(board, force, piece) {
        if let Some(step) = piece.shifted(dir) {
            if !board.is_occupied(step) {
                moves.normal.push(step);
            } else if board.occupant(step) == Some(force.opponent()) {
                if let Some(landing) = step.shifted(dir) {
                    if !board.is_occupied(landing) {
                        moves.jumps.push(landing);
                    }
                }
            }
        }
    }
    moves.normal.sort();
    moves.jumps.sort();
    moves
}

/// Pieces of `force` that have at least one jump available. Non-empty means
/// the forced-jump rule is in effect and normal moves must not be offered.
pub fn jump_candidates(board: &Board, force: Force) -> Vec<Coord> {
    board
        .piece_coords(force)
        .into_iter()
        .filter(|&piece| !piece_moves(board, force, piece).jumps.is_empty())
        .sorted()
        .collect()
}

/// Whether a step captures, i.e. spans two diagonal squares.
pub fn is_jump(from: Coord, to: Coord) -> bool {
    (from.row as i8 - to.row as i8).abs() == 2 && (from.col as i8 - to.col as i8).abs() == 2
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn man_moves_forward_only() {
        let mut board = Board::empty();
        board.add_piece(Force::Red, Coord::new(3, 3));
        let moves = piece_moves(&board, Force::Red, Coord::new(3, 3));
        assert_eq!(moves.normal, vec![Coord::new(4, 2), Coord::new(4, 4)]);
        assert!(moves.jumps.is_empty());
    }

    #[test]
    fn king_moves_all_diagonals() {
        let mut board = Board::empty();
        board.add_king(Force::Black, Coord::new(3, 3));
        let moves = piece_moves(&board, Force::Black, Coord::new(3, 3));
        assert_eq!(
            moves.normal,
            vec![Coord::new(2, 2), Coord::new(2, 4), Coord::new(4, 2), Coord::new(4, 4)]
        );
    }

    #[test]
    fn blocked_edges_yield_no_moves() {
        let mut board = Board::empty();
        board.add_piece(Force::Black, Coord::new(0, 0));
        let moves = piece_moves(&board, Force::Black, Coord::new(0, 0));
        assert!(moves.normal.is_empty() && moves.jumps.is_empty());
    }
}
