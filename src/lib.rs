//! Move and wall selection for one pawn in a Quoridor-style game.
//!
//! Each turn the caller builds a [`BoardState`] from the server percept and asks
//! an [`ActionSelector`] for one [`Action`]:
//!
//! ```no_run
//! use quoridor_bot::{ActionSelector, BoardState, HeuristicAgent, Percept};
//!
//! # fn run(percept: Percept) -> anyhow::Result<()> {
//! let board = BoardState::from_percept(&percept)?;
//! let action = HeuristicAgent::default().select_action(&board, 0)?;
//! println!("{}", action);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod adjacency;
pub mod agents;
pub mod board;
pub mod config;
pub mod moves;
pub mod pathfinding;
pub mod walls;

pub use actions::Action;
pub use agents::heuristic_agent::{decide, HeuristicAgent};
pub use agents::ActionSelector;
pub use board::{BoardState, Cell, Goal, Orientation, Percept, WallSegment};
pub use config::{load_config, BotConfig, StrategyConfig};
