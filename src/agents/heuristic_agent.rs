//! Goal-seeking agent with the two-player wall heuristic.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::actions::Action;
use crate::agents::ActionSelector;
use crate::board::BoardState;
use crate::config::{BotConfig, StrategyConfig};
use crate::pathfinding::next_step;
use crate::walls::choose_wall;

/// Moves towards the goal; in two-player games it may wall off a leading opponent.
#[derive(Clone, Debug, Default)]
pub struct HeuristicAgent {
    config: StrategyConfig,
}

impl HeuristicAgent {
    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(config.strategy.clone())
    }
}

impl ActionSelector for HeuristicAgent {
    fn select_action(&mut self, board: &BoardState, player: usize) -> Result<Action> {
        decide(board, player, &self.config)
    }
}

/// Pick the action for `player`.
///
/// Two-pawn games consult the wall heuristic first; every other game only moves.
pub fn decide(board: &BoardState, player: usize, config: &StrategyConfig) -> Result<Action> {
    let cell = board.pawn(player)?;
    let goal = board.goal(player)?;

    if board.num_players() == 2 {
        if let Some(wall) = choose_wall(board, player, config)? {
            let action = Action::Wall(wall);
            info!("player {}: {}", player, action);
            return Ok(action);
        }
        debug!("player {}: no wall worth placing, moving instead", player);
    }

    let next = next_step(board, cell, goal)
        .with_context(|| format!("player {} has no move towards {:?}", player, goal))?;
    let action = Action::Move(next);
    info!("player {}: {}", player, action);
    Ok(action)
}
