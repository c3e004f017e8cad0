//! Blocking predicates for walls and pawns around a cell.
//!
//! None of these functions check bounds. Callers filter derived cells with
//! [`BoardState::is_in_bounds`] before offering them as moves.

use crate::board::{BoardState, Cell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Cardinal enumeration order shared by every move family.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// `(d_row, d_col)` for one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    /// The two perpendicular directions, in enumeration order.
    pub fn laterals(self) -> [Direction; 2] {
        match self {
            Direction::Right | Direction::Left => [Direction::Up, Direction::Down],
            Direction::Up | Direction::Down => [Direction::Right, Direction::Left],
        }
    }
}

/// True if a wall sits on the boundary between `cell` and its neighbour in `direction`.
pub fn wall_blocks(board: &BoardState, cell: Cell, direction: Direction) -> bool {
    let Cell { row, col } = cell;
    match direction {
        Direction::Right => {
            let walls = board.vertical_walls();
            walls.contains(&Cell::new(row, col)) || walls.contains(&Cell::new(row - 1, col))
        }
        Direction::Left => {
            let walls = board.vertical_walls();
            walls.contains(&Cell::new(row, col - 1)) || walls.contains(&Cell::new(row - 1, col - 1))
        }
        Direction::Up => {
            let walls = board.horizontal_walls();
            walls.contains(&Cell::new(row - 1, col)) || walls.contains(&Cell::new(row - 1, col - 1))
        }
        Direction::Down => {
            let walls = board.horizontal_walls();
            walls.contains(&Cell::new(row, col)) || walls.contains(&Cell::new(row, col - 1))
        }
    }
}

/// Wall check for the boundary one cell further out, i.e. behind the neighbour
/// in `direction`. Used to decide whether a straight jump is obstructed.
pub fn wall_blocks_jump(board: &BoardState, cell: Cell, direction: Direction) -> bool {
    wall_blocks(board, cell.step(direction), direction)
}

pub fn pawn_at(board: &BoardState, cell: Cell) -> bool {
    board.pawns().contains(&cell)
}

/// True if a pawn stands right next to `cell` in `direction`.
pub fn pawn_adjacent(board: &BoardState, cell: Cell, direction: Direction) -> bool {
    pawn_at(board, cell.step(direction))
}

/// For a jump in `direction` that a wall stops behind the adjacent pawn, whether
/// the sidestep from that pawn towards `lateral` is ruled out by a perpendicular
/// wall or by another pawn.
pub fn diagonal_blocked(
    board: &BoardState,
    cell: Cell,
    direction: Direction,
    lateral: Direction,
) -> bool {
    let pivot = cell.step(direction);
    wall_blocks(board, pivot, lateral) || pawn_at(board, pivot.step(lateral))
}
