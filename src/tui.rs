use console::Style;
use itertools::Itertools;

use crate::board::Board;
use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::force::Force;


const MAN_CHAR: char = '●';
const KING_CHAR: char = '♥';
const DARK_SQUARE: char = '■';
const LIGHT_SQUARE: char = '□';

fn force_style(force: Force) -> Style {
    match force {
        Force::Red => Style::new().red(),
        Force::Black => Style::new().blue(),
    }
}

fn render_square(board: &Board, coord: Coord) -> String {
    match board.occupant(coord) {
        Some(force) => {
            let ch = if board.is_king(force, coord) { KING_CHAR } else { MAN_CHAR };
            force_style(force).apply_to(ch).to_string()
        }
        None => {
            let ch = if coord.is_dark() { DARK_SQUARE } else { LIGHT_SQUARE };
            ch.to_string()
        }
    }
}

/// Renders the board with row and column indices. Pure presentation:
/// game semantics never depend on it.
pub fn render_board(board: &Board) -> String {
    let header = format!("    {}", (0..NUM_COLS).map(|col| col.to_string()).join(" "));
    let bar = format!("   {}", "--".repeat(NUM_COLS as usize));
    let rows = (0..NUM_ROWS).map(|row| {
        let squares =
            (0..NUM_COLS).map(|col| render_square(board, Coord::new(row, col))).join(" ");
        format!("{row} | {squares}")
    });
    [header, bar].into_iter().chain(rows).join("\n")
}
