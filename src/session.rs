use std::io;

use itertools::Itertools;

use crate::coord::Coord;
use crate::game::{Game, GameStatus, TurnError, TurnPrompt, TurnRecord, TurnState};
use crate::input;
use crate::tui;


const COORD_PROMPT: &str = "Input a coordinate in \"row,col\" format";

fn format_coords(coords: &[Coord]) -> String {
    coords.iter().map(|c| format!("({c})")).join(", ")
}

fn explain(err: TurnError) -> &'static str {
    match err {
        TurnError::NotPlayersPiece => "Invalid piece. Please try again.",
        TurnError::NoMovesForPiece => "Piece has no valid moves. Please try again.",
        TurnError::IllegalDestination => "Invalid move. Please try again.",
    }
}

/// Runs one interactive turn for the local player: prints the legal choices
/// at each decision point, feeds coordinates from the terminal into the turn
/// engine and re-renders the board after every applied step.
pub fn play_local_turn(game: &mut Game) -> io::Result<TurnRecord> {
    let mut turn = TurnState::new(game);
    let mut announced_jump = false;
    loop {
        if let Some(record) = turn.outcome() {
            return Ok(record.clone());
        }
        let prompt = turn.prompt();
        let coord = match &prompt {
            TurnPrompt::ChooseJumpPiece { candidates } => {
                println!("A jump exists for multiple pieces. Pick one: {}!", format_coords(candidates));
                input::read_coordinate(COORD_PROMPT)?
            }
            TurnPrompt::ChooseJump { piece, targets } => {
                if !announced_jump {
                    println!("A jump exists for ({piece})!");
                    announced_jump = true;
                }
                println!("Current possible jumps: {}", format_coords(targets));
                input::read_coordinate(COORD_PROMPT)?
            }
            TurnPrompt::ChoosePiece => {
                println!("Please pick a piece to move, Player {}", game.active_force().name());
                input::read_coordinate(COORD_PROMPT)?
            }
            TurnPrompt::ChooseMove { piece, targets } => {
                println!("Please pick a move for ({piece}): {}", format_coords(targets));
                input::read_coordinate(COORD_PROMPT)?
            }
        };
        match turn.choose(game, coord) {
            Ok(()) => {
                // Jumps and moves mutate the board as soon as they are
                // chosen; show the result right away.
                if !matches!(prompt, TurnPrompt::ChooseJumpPiece { .. } | TurnPrompt::ChoosePiece) {
                    println!("{}", tui::render_board(game.board()));
                }
            }
            Err(err) => println!("{}", explain(err)),
        }
    }
}

/// Applies a turn received from the peer against the opponent's pieces.
/// The record is trusted as-is; both peers run the same rules engine.
pub fn apply_remote_turn(game: &mut Game, record: &TurnRecord) {
    let opponent = game.active_force().opponent();
    game.run_moves(opponent, record.piece, &record.moves);
    println!("{}", tui::render_board(game.board()));
}

pub fn announce_result(game: &Game) {
    if let GameStatus::Victory(force) = game.status() {
        println!("{} wins!", force.name());
    }
}
