//! Candidate pawn moves from a cell: simple steps, straight jumps and diagonal
//! sidesteps around a pawn whose jump is walled off.
//!
//! Every family enumerates directions in [`Direction::ALL`] order so results are
//! reproducible.

use crate::adjacency::{
    diagonal_blocked, pawn_adjacent, pawn_at, wall_blocks, wall_blocks_jump, Direction,
};
use crate::board::{BoardState, Cell};

/// One-step moves to the four neighbours.
///
/// With `check_occupancy` off, other pawns are ignored and only walls matter.
pub fn simple_moves(board: &BoardState, cell: Cell, check_occupancy: bool) -> Vec<Cell> {
    Direction::ALL
        .iter()
        .filter(|&&direction| !wall_blocks(board, cell, direction))
        .map(|&direction| cell.step(direction))
        .filter(|&next| !check_occupancy || !pawn_at(board, next))
        .filter(|&next| board.is_in_bounds(next))
        .collect()
}

/// Straight two-cell jumps over an adjacent pawn.
pub fn jump_moves(board: &BoardState, cell: Cell) -> Vec<Cell> {
    Direction::ALL
        .iter()
        .filter(|&&direction| {
            !wall_blocks(board, cell, direction)
                && pawn_adjacent(board, cell, direction)
                && !wall_blocks_jump(board, cell, direction)
                && !pawn_at(board, cell.step(direction).step(direction))
        })
        .map(|&direction| cell.step(direction).step(direction))
        .filter(|&landing| board.is_in_bounds(landing))
        .collect()
}

/// Sidesteps next to an adjacent pawn when a wall behind it stops the straight jump.
pub fn diagonal_moves(board: &BoardState, cell: Cell) -> Vec<Cell> {
    let mut moves = Vec::new();
    for direction in Direction::ALL {
        if wall_blocks(board, cell, direction)
            || !pawn_adjacent(board, cell, direction)
            || !wall_blocks_jump(board, cell, direction)
        {
            continue;
        }
        let pivot = cell.step(direction);
        for lateral in direction.laterals() {
            if !diagonal_blocked(board, cell, direction, lateral) {
                moves.push(pivot.step(lateral));
            }
        }
    }
    moves.retain(|&target| board.is_in_bounds(target));
    moves
}

/// Every move available from the pawn's real position.
pub fn legal_moves(board: &BoardState, cell: Cell) -> Vec<Cell> {
    let mut moves = simple_moves(board, cell, true);
    moves.extend(diagonal_moves(board, cell));
    moves.extend(jump_moves(board, cell));
    moves
}
