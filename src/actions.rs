use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Orientation, WallSegment};

/// The single action returned for a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Move the pawn to this cell.
    Move(Cell),
    /// Place a wall.
    Wall(WallSegment),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(cell) => write!(f, "MOVE {}", cell),
            Action::Wall(WallSegment {
                orientation: Orientation::Horizontal,
                anchor,
            }) => write!(f, "PLACE_WALL horizontal {}", anchor),
            Action::Wall(WallSegment {
                orientation: Orientation::Vertical,
                anchor,
            }) => write!(f, "PLACE_WALL vertical {}", anchor),
        }
    }
}
