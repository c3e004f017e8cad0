//! Decision makers for one pawn.
//!
//! All agents implement the [`ActionSelector`] trait.

use crate::actions::Action;
use crate::board::BoardState;

pub mod heuristic_agent;

/// Trait for agents that pick one action for `player` on a board snapshot.
pub trait ActionSelector {
    /// Select the action for `player`.
    ///
    /// Fails if the board gives the player no way to reach its goal or the
    /// player index is unknown; the caller forfeits the turn in that case.
    fn select_action(&mut self, board: &BoardState, player: usize) -> anyhow::Result<Action>;
}
