use std::collections::HashSet;

use enum_map::{enum_map, EnumMap};
use itertools::Itertools;

use crate::coord::{Coord, NUM_ROWS};
use crate::force::Force;


/// One side's material: every piece the side owns, plus the promoted subset.
/// Pieces have no identity beyond their square; moving is remove + insert.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SideState {
    pieces: HashSet<Coord>,
    kings: HashSet<Coord>,
}

impl SideState {
    pub fn pieces(&self) -> &HashSet<Coord> { &self.pieces }
    pub fn kings(&self) -> &HashSet<Coord> { &self.kings }
    pub fn is_empty(&self) -> bool { self.pieces.is_empty() }
}

/// Piece storage plus trusting mutation primitives. Legality is the move
/// generator's business; nothing here re-validates.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    sides: EnumMap<Force, SideState>,
}

impl Board {
    /// Standard starting position: three back rows of dark squares per side.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for coord in Coord::all().filter(|c| c.is_dark()) {
            if coord.row < 3 {
                board.add_piece(Force::Red, coord);
            } else if coord.row >= NUM_ROWS - 3 {
                board.add_piece(Force::Black, coord);
            }
        }
        board
    }

    pub fn empty() -> Self {
        Self { sides: enum_map! { _ => SideState::default() } }
    }

    pub fn side(&self, force: Force) -> &SideState { &self.sides[force] }

    pub fn occupant(&self, coord: Coord) -> Option<Force> {
        self.sides
            .iter()
            .find(|(_, side)| side.pieces.contains(&coord))
            .map(|(force, _)| force)
    }

    pub fn is_occupied(&self, coord: Coord) -> bool { self.occupant(coord).is_some() }

    pub fn is_king(&self, force: Force, coord: Coord) -> bool {
        self.sides[force].kings.contains(&coord)
    }

    pub fn add_piece(&mut self, force: Force, coord: Coord) {
        assert!(coord.is_dark());
        self.sides[force].pieces.insert(coord);
    }

    pub fn add_king(&mut self, force: Force, coord: Coord) {
        self.add_piece(force, coord);
        self.sides[force].kings.insert(coord);
    }

    /// Moves a piece within its owner's sets, mirroring the relocation in
    /// the kings set when the piece is promoted.
    pub fn relocate(&mut self, force: Force, from: Coord, to: Coord) {
        let side = &mut self.sides[force];
        side.pieces.remove(&from);
        side.pieces.insert(to);
        if side.kings.remove(&from) {
            side.kings.insert(to);
        }
    }

    /// Removes a captured piece from both of its owner's sets.
    pub fn capture(&mut self, force: Force, coord: Coord) {
        let side = &mut self.sides[force];
        side.pieces.remove(&coord);
        side.kings.remove(&coord);
    }

    /// Idempotent: promoting an existing king changes nothing.
    pub fn promote(&mut self, force: Force, coord: Coord) {
        self.sides[force].kings.insert(coord);
    }

    /// All coordinates of `force`'s pieces, in a stable order.
    pub fn piece_coords(&self, force: Force) -> Vec<Coord> {
        self.sides[force].pieces.iter().copied().sorted().collect()
    }
}
