use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;

/// A square on the board. Pieces only ever occupy dark squares,
/// where `(row + col) % 2 == 0`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < NUM_ROWS && col < NUM_COLS);
        Self { row, col }
    }

    pub fn is_dark(self) -> bool { (self.row + self.col) % 2 == 0 }

    /// Steps by a diagonal offset; `None` when the result leaves the board.
    pub fn shifted(self, (d_row, d_col): (i8, i8)) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..NUM_ROWS as i8).contains(&row) && (0..NUM_COLS as i8).contains(&col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// The square halfway between `self` and `other`. Only meaningful for
    /// two-square diagonal (jump) steps.
    pub fn midpoint(self, other: Self) -> Self {
        Self { row: (self.row + other.row) / 2, col: (self.col + other.col) / 2 }
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        (0..NUM_ROWS).cartesian_product(0..NUM_COLS).map(|(row, col)| Coord { row, col })
    }
}

// Matches the terminal input format ("row,col").
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({},{})", self.row, self.col)
    }
}
