use std::mem;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::board::Board;
use crate::coord::Coord;
use crate::force::Force;
use crate::rules;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Active,
    Victory(Force),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnError {
    NotPlayersPiece,
    NoMovesForPiece,
    IllegalDestination,
}

/// A completed turn as it travels over the wire: the piece that moved and
/// the ordered landing squares (two or more entries encode a jump chain).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TurnRecord {
    pub piece: Coord,
    pub moves: Vec<Coord>,
}

/// The per-peer game aggregate. `active_force` is the side this peer plays;
/// it never changes, since turn alternation is the message loop's doing.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    active_force: Force,
}

impl Game {
    pub fn new(active_force: Force) -> Self {
        Self { board: Board::new(), active_force }
    }

    pub fn with_board(board: Board, active_force: Force) -> Self {
        Self { board, active_force }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn active_force(&self) -> Force { self.active_force }

    /// Applies a move list for `force`, step by step. Used both for locally
    /// chosen turns and for turns received from the peer; remote moves are
    /// applied as-is, with no re-derivation against the local rules.
    pub fn run_moves(&mut self, force: Force, piece: Coord, moves: &[Coord]) {
        let mut piece = piece;
        for &step in moves {
            self.board.relocate(force, piece, step);
            if rules::is_jump(piece, step) {
                self.board.capture(force.opponent(), piece.midpoint(step));
            }
            if step.row == force.far_row() {
                self.board.promote(force, step);
            }
            piece = step;
        }
    }

    /// The sole termination condition: a side with no pieces has lost.
    pub fn status(&self) -> GameStatus {
        for force in Force::iter() {
            if self.board.side(force).is_empty() {
                return GameStatus::Victory(force.opponent());
            }
        }
        GameStatus::Active
    }

    pub fn is_over(&self) -> bool { self.status() != GameStatus::Active }
}


/// What the turn engine needs from the acting party at the current decision
/// point. Carries every legal choice, so the caller can present them through
/// any frontend (terminal, network, AI) and feed the pick back via
/// [`TurnState::choose`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TurnPrompt {
    /// Several pieces can jump; the forced-jump rule demands one of them.
    ChooseJumpPiece { candidates: Vec<Coord> },
    /// Mid-chain: pick the next jump for the piece at its current square.
    ChooseJump { piece: Coord, targets: Vec<Coord> },
    /// No jumps anywhere: pick any own piece with at least one normal move.
    ChoosePiece,
    /// Pick a single-step destination for the selected piece.
    ChooseMove { piece: Coord, targets: Vec<Coord> },
}

enum Stage {
    ChooseJumpPiece { candidates: Vec<Coord> },
    ChooseJump { origin: Coord, piece: Coord, targets: Vec<Coord>, taken: Vec<Coord> },
    ChoosePiece,
    ChooseMove { piece: Coord, targets: Vec<Coord> },
    Complete(TurnRecord),
}

/// Resumable state machine for one local turn:
/// select piece -> select move -> (jump chain)* -> complete.
///
/// Jumps are applied to the game immediately as they are chosen, and further
/// jumps are recomputed from the landing square, so a promotion mid-chain
/// takes effect for the rest of the chain.
pub struct TurnState {
    stage: Stage,
}

impl TurnState {
    pub fn new(game: &Game) -> Self {
        let candidates = rules::jump_candidates(game.board(), game.active_force());
        let stage = match candidates.len() {
            0 => Stage::ChoosePiece,
            // A lone jump candidate is selected automatically.
            1 => Self::begin_jump(game, candidates[0]),
            _ => Stage::ChooseJumpPiece { candidates },
        };
        Self { stage }
    }

    fn begin_jump(game: &Game, piece: Coord) -> Stage {
        let targets = rules::piece_moves(game.board(), game.active_force(), piece).jumps;
        Stage::ChooseJump { origin: piece, piece, targets, taken: Vec::new() }
    }

    pub fn prompt(&self) -> TurnPrompt {
        match &self.stage {
            Stage::ChooseJumpPiece { candidates } => {
                TurnPrompt::ChooseJumpPiece { candidates: candidates.clone() }
            }
            Stage::ChooseJump { piece, targets, .. } => {
                TurnPrompt::ChooseJump { piece: *piece, targets: targets.clone() }
            }
            Stage::ChoosePiece => TurnPrompt::ChoosePiece,
            Stage::ChooseMove { piece, targets } => {
                TurnPrompt::ChooseMove { piece: *piece, targets: targets.clone() }
            }
            Stage::Complete(_) => panic!("turn already complete"),
        }
    }

    /// Feeds one chosen coordinate into the machine. On error the stage is
    /// unchanged and the caller is expected to reprompt.
    pub fn choose(&mut self, game: &mut Game, coord: Coord) -> Result<(), TurnError> {
        let force = game.active_force();
        self.stage = match mem::replace(&mut self.stage, Stage::ChoosePiece) {
            Stage::ChooseJumpPiece { candidates } => {
                if !candidates.contains(&coord) {
                    self.stage = Stage::ChooseJumpPiece { candidates };
                    return Err(TurnError::NotPlayersPiece);
                }
                Self::begin_jump(game, coord)
            }
            Stage::ChooseJump { origin, piece, targets, mut taken } => {
                if !targets.contains(&coord) {
                    self.stage = Stage::ChooseJump { origin, piece, targets, taken };
                    return Err(TurnError::IllegalDestination);
                }
                game.run_moves(force, piece, &[coord]);
                taken.push(coord);
                let next = rules::piece_moves(game.board(), force, coord).jumps;
                if next.is_empty() {
                    Stage::Complete(TurnRecord { piece: origin, moves: taken })
                } else {
                    Stage::ChooseJump { origin, piece: coord, targets: next, taken }
                }
            }
            Stage::ChoosePiece => {
                if !game.board().side(force).pieces().contains(&coord) {
                    self.stage = Stage::ChoosePiece;
                    return Err(TurnError::NotPlayersPiece);
                }
                let targets = rules::piece_moves(game.board(), force, coord).normal;
                if targets.is_empty() {
                    self.stage = Stage::ChoosePiece;
                    return Err(TurnError::NoMovesForPiece);
                }
                Stage::ChooseMove { piece: coord, targets }
            }
            Stage::ChooseMove { piece, targets } => {
                if !targets.contains(&coord) {
                    self.stage = Stage::ChooseMove { piece, targets };
                    return Err(TurnError::IllegalDestination);
                }
                game.run_moves(force, piece, &[coord]);
                Stage::Complete(TurnRecord { piece, moves: vec![coord] })
            }
            Stage::Complete(record) => Stage::Complete(record),
        };
        Ok(())
    }

    pub fn outcome(&self) -> Option<&TurnRecord> {
        match &self.stage {
            Stage::Complete(record) => Some(record),
            _ => None,
        }
    }
}
