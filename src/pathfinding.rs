use std::collections::VecDeque;

use anyhow::{bail, ensure, Context, Result};
use log::trace;
use ndarray::Array2;

use crate::board::{BoardState, Cell, Goal};
use crate::moves::{diagonal_moves, jump_moves, simple_moves};

/// Entry in the search arena. `parent` indexes the entry this cell was generated from.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    cell: Cell,
    parent: Option<usize>,
}

/// Pick the next cell for a pawn at `start` heading for `goal`.
///
/// The frontier is a stack, so the search runs depth first. Only the first
/// expansion uses the pawn's real options: simple moves with the goal-ward step
/// placed ahead of sideways ones, then diagonal sidesteps, then jumps. Deeper
/// expansions use simple moves that ignore other pawns. The returned cell is the
/// first step on the path to the first goal cell popped, which is not
/// necessarily a shortest path.
///
/// # Errors
/// Fails if `start` already lies on the goal line or if no goal cell is reachable.
pub fn next_step(board: &BoardState, start: Cell, goal: Goal) -> Result<Cell> {
    ensure!(board.is_in_bounds(start), "search start {} is off the board", start);

    let size = board.size() as usize;
    let mut visited = Array2::<bool>::from_elem((size, size), false);
    let mut arena = vec![SearchNode {
        cell: start,
        parent: None,
    }];
    let mut frontier = vec![0usize];
    let mut first_ply = true;
    let mut expanded = 0usize;
    let mut destination = None;

    while let Some(index) = frontier.pop() {
        let cell = arena[index].cell;
        let seen = &mut visited[[cell.row as usize, cell.col as usize]];
        if *seen {
            continue;
        }
        *seen = true;

        if goal.is_reached_by(cell) {
            destination = Some(index);
            break;
        }

        let candidates = if first_ply {
            first_ply = false;
            first_ply_moves(board, cell, goal)
        } else {
            simple_moves(board, cell, false)
        };
        expanded += 1;

        // Reverse so the first candidate is popped first.
        for next in candidates.into_iter().rev() {
            arena.push(SearchNode {
                cell: next,
                parent: Some(index),
            });
            frontier.push(arena.len() - 1);
        }
    }
    trace!(
        "goal search from {} towards {:?}: {} expansions, {} arena entries",
        start,
        goal,
        expanded,
        arena.len()
    );

    let mut current = destination
        .with_context(|| format!("no path from {} to goal {:?}", start, goal))?;
    loop {
        match arena[current].parent {
            None => bail!("pawn at {} already satisfies goal {:?}", start, goal),
            Some(parent) if arena[parent].cell == start => return Ok(arena[current].cell),
            Some(parent) => current = parent,
        }
    }
}

/// Real moves from the pawn's position, goal-ward steps first.
fn first_ply_moves(board: &BoardState, cell: Cell, goal: Goal) -> Vec<Cell> {
    let mut moves = simple_moves(board, cell, true);
    // Stable sort keeps enumeration order within each group.
    moves.sort_by_key(|&next| goal.remaining(next) >= goal.remaining(cell));
    moves.extend(diagonal_moves(board, cell));
    moves.extend(jump_moves(board, cell));
    moves
}

/// Breadth-first distance, in simple steps, from `start` to the goal line.
///
/// Pawns are ignored; only walls constrain movement. Returns `None` if the goal
/// line cannot be reached.
pub fn distance_to_goal(board: &BoardState, start: Cell, goal: Goal) -> Option<usize> {
    if !board.is_in_bounds(start) {
        return None;
    }
    if goal.is_reached_by(start) {
        return Some(0);
    }

    let size = board.size() as usize;
    let mut visited = Array2::<bool>::from_elem((size, size), false);
    visited[[start.row as usize, start.col as usize]] = true;

    let mut queue = VecDeque::from([(start, 0usize)]);
    while let Some((cell, steps)) = queue.pop_front() {
        for next in simple_moves(board, cell, false) {
            let seen = &mut visited[[next.row as usize, next.col as usize]];
            if *seen {
                continue;
            }
            *seen = true;
            if goal.is_reached_by(next) {
                return Some(steps + 1);
            }
            queue.push_back((next, steps + 1));
        }
    }

    None
}
