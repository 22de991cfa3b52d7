use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::coord::NUM_ROWS;


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Force {
    Red,
    Black,
}

impl Force {
    pub fn opponent(self) -> Force {
        match self {
            Force::Red => Force::Black,
            Force::Black => Force::Red,
        }
    }

    // Row direction a man advances in: Red starts at row 0 and moves down
    // the indices, Black starts at row 7 and moves up.
    pub fn forward(self) -> i8 {
        match self {
            Force::Red => 1,
            Force::Black => -1,
        }
    }

    /// The promotion row for this force.
    pub fn far_row(self) -> u8 {
        match self {
            Force::Red => NUM_ROWS - 1,
            Force::Black => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Force::Red => "Red",
            Force::Black => "Black",
        }
    }
}
