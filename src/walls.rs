//! Two-player wall heuristic: drop a wall right in front of an opponent who is
//! at least as close to winning as we are.

use anyhow::Result;
use log::debug;

use crate::adjacency::{pawn_at, wall_blocks, Direction};
use crate::board::{BoardState, Cell, Orientation, WallSegment};
use crate::config::StrategyConfig;
use crate::pathfinding::distance_to_goal;

/// Wall to place for `player`, or `None` to fall back to a move.
pub fn choose_wall(
    board: &BoardState,
    player: usize,
    config: &StrategyConfig,
) -> Result<Option<WallSegment>> {
    if !config.place_walls || board.num_players() != 2 {
        return Ok(None);
    }

    let own_cell = board.pawn(player)?;
    let own_goal = board.goal(player)?;
    let opponent = 1 - player;
    let opponent_cell = board.pawn(opponent)?;
    let opponent_goal = board.goal(opponent)?;

    let walls_left = board.walls_remaining()[player];
    if walls_left <= config.min_walls_in_reserve {
        debug!("player {} keeps its {} remaining walls", player, walls_left);
        return Ok(None);
    }

    let own_remaining = own_goal.remaining(own_cell);
    let opponent_remaining = opponent_goal.remaining(opponent_cell);
    if opponent_remaining > own_remaining {
        debug!(
            "player {} is ahead ({} to go against {}), no wall",
            player, own_remaining, opponent_remaining
        );
        return Ok(None);
    }

    let Some(forward) = opponent_goal.forward_direction(opponent_cell) else {
        return Ok(None);
    };
    if !can_step(board, opponent_cell, forward) {
        debug!("opponent at {} cannot advance anyway, no wall", opponent_cell);
        return Ok(None);
    }

    for wall in blocking_walls(opponent_cell, forward) {
        if is_wall_legal(board, wall) {
            return Ok(Some(wall));
        }
        debug!("candidate {:?} wall at {} is illegal", wall.orientation, wall.anchor);
    }
    Ok(None)
}

/// Single straight step, respecting walls and pawns.
fn can_step(board: &BoardState, cell: Cell, direction: Direction) -> bool {
    let next = cell.step(direction);
    board.is_in_bounds(next) && !wall_blocks(board, cell, direction) && !pawn_at(board, next)
}

/// The two walls that would close the boundary in front of `cell`, in priority order.
pub fn blocking_walls(cell: Cell, direction: Direction) -> [WallSegment; 2] {
    let Cell { row, col } = cell;
    match direction {
        Direction::Down => [
            WallSegment::horizontal(row, col),
            WallSegment::horizontal(row, col - 1),
        ],
        Direction::Up => [
            WallSegment::horizontal(row - 1, col),
            WallSegment::horizontal(row - 1, col - 1),
        ],
        Direction::Right => [
            WallSegment::vertical(row, col),
            WallSegment::vertical(row - 1, col),
        ],
        Direction::Left => [
            WallSegment::vertical(row, col - 1),
            WallSegment::vertical(row - 1, col - 1),
        ],
    }
}

/// Geometry check: on the board, not overlapping a parallel wall, not crossing
/// a perpendicular one.
pub fn fits_on_board(board: &BoardState, wall: WallSegment) -> bool {
    let Cell { row, col } = wall.anchor;
    let interior = 0..board.size() - 1;
    if !interior.contains(&row) || !interior.contains(&col) {
        return false;
    }

    match wall.orientation {
        Orientation::Horizontal => {
            let parallel = board.horizontal_walls();
            !parallel.contains(&Cell::new(row, col - 1))
                && !parallel.contains(&wall.anchor)
                && !parallel.contains(&Cell::new(row, col + 1))
                && !board.vertical_walls().contains(&wall.anchor)
        }
        Orientation::Vertical => {
            let parallel = board.vertical_walls();
            !parallel.contains(&Cell::new(row - 1, col))
                && !parallel.contains(&wall.anchor)
                && !parallel.contains(&Cell::new(row + 1, col))
                && !board.horizontal_walls().contains(&wall.anchor)
        }
    }
}

/// A wall may be placed if it fits and every pawn can still reach its goal.
pub fn is_wall_legal(board: &BoardState, wall: WallSegment) -> bool {
    if !fits_on_board(board, wall) {
        return false;
    }

    let walled = board.with_wall(wall);
    board
        .pawns()
        .iter()
        .zip(board.goals())
        .all(|(&pawn, &goal)| distance_to_goal(&walled, pawn, goal).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::two_player_board;
    use crate::board::Goal;

    /// Acting pawn at (8, 4) heading up, opponent at (3, 4) heading down.
    fn scenario_board(walls_left: i32, walls: Vec<WallSegment>) -> BoardState {
        BoardState::new(
            9,
            vec![Cell::new(8, 4), Cell::new(3, 4)],
            vec![Goal::Row(0), Goal::Row(8)],
            vec![walls_left, 10],
            walls,
        )
        .unwrap()
    }

    #[test]
    fn test_wall_in_front_of_leading_opponent() {
        let board = scenario_board(1, vec![]);
        let wall = choose_wall(&board, 0, &StrategyConfig::default()).unwrap();
        assert_eq!(wall, Some(WallSegment::horizontal(3, 4)));
    }

    #[test]
    fn test_second_candidate_when_first_overlaps() {
        let board = scenario_board(1, vec![WallSegment::horizontal(3, 5)]);
        let wall = choose_wall(&board, 0, &StrategyConfig::default()).unwrap();
        assert_eq!(wall, Some(WallSegment::horizontal(3, 3)));
    }

    #[test]
    fn test_no_wall_when_both_candidates_cross() {
        let board = scenario_board(
            1,
            vec![WallSegment::vertical(3, 4), WallSegment::vertical(3, 3)],
        );
        assert_eq!(choose_wall(&board, 0, &StrategyConfig::default()).unwrap(), None);
    }

    #[test]
    fn test_no_wall_without_walls_left() {
        let board = scenario_board(0, vec![]);
        assert_eq!(choose_wall(&board, 0, &StrategyConfig::default()).unwrap(), None);

        let board = scenario_board(2, vec![]);
        let config = StrategyConfig {
            place_walls: true,
            min_walls_in_reserve: 2,
        };
        assert_eq!(choose_wall(&board, 0, &config).unwrap(), None);
    }

    #[test]
    fn test_no_wall_when_disabled() {
        let board = scenario_board(5, vec![]);
        let config = StrategyConfig {
            place_walls: false,
            min_walls_in_reserve: 0,
        };
        assert_eq!(choose_wall(&board, 0, &config).unwrap(), None);
    }

    #[test]
    fn test_no_wall_when_ahead() {
        // Two rows to go against the opponent's three.
        let board = two_player_board(Cell::new(5, 4), Cell::new(2, 4), vec![]);
        assert_eq!(choose_wall(&board, 1, &StrategyConfig::default()).unwrap(), None);
        // From the other side the opponent is ahead, so a wall goes in.
        assert_eq!(
            choose_wall(&board, 0, &StrategyConfig::default()).unwrap(),
            Some(WallSegment::horizontal(1, 4))
        );
    }

    #[test]
    fn test_equal_progress_still_walls() {
        let board = two_player_board(Cell::new(4, 4), Cell::new(4, 6), vec![]);
        assert_eq!(
            choose_wall(&board, 0, &StrategyConfig::default()).unwrap(),
            Some(WallSegment::horizontal(3, 6))
        );
    }

    #[test]
    fn test_no_wall_when_opponent_is_stuck() {
        let board = scenario_board(3, vec![WallSegment::horizontal(3, 3)]);
        assert_eq!(choose_wall(&board, 0, &StrategyConfig::default()).unwrap(), None);
    }

    #[test]
    fn test_no_wall_with_four_players() {
        let board = BoardState::new(
            9,
            vec![Cell::new(8, 4), Cell::new(3, 4), Cell::new(4, 0), Cell::new(4, 8)],
            vec![Goal::Row(0), Goal::Row(8), Goal::Column(8), Goal::Column(0)],
            vec![5, 5, 5, 5],
            vec![],
        )
        .unwrap();
        assert_eq!(choose_wall(&board, 0, &StrategyConfig::default()).unwrap(), None);
    }

    #[test]
    fn test_blocking_walls_per_direction() {
        let cell = Cell::new(4, 4);
        assert_eq!(
            blocking_walls(cell, Direction::Up),
            [WallSegment::horizontal(3, 4), WallSegment::horizontal(3, 3)]
        );
        assert_eq!(
            blocking_walls(cell, Direction::Right),
            [WallSegment::vertical(4, 4), WallSegment::vertical(3, 4)]
        );
        assert_eq!(
            blocking_walls(cell, Direction::Left),
            [WallSegment::vertical(4, 3), WallSegment::vertical(3, 3)]
        );
    }

    #[test]
    fn test_horizontal_geometry() {
        let board = two_player_board(
            Cell::new(0, 4),
            Cell::new(8, 4),
            vec![WallSegment::horizontal(4, 4), WallSegment::vertical(2, 2)],
        );

        assert!(!fits_on_board(&board, WallSegment::horizontal(4, 4)));
        assert!(!fits_on_board(&board, WallSegment::horizontal(4, 3)));
        assert!(!fits_on_board(&board, WallSegment::horizontal(4, 5)));
        assert!(!fits_on_board(&board, WallSegment::horizontal(2, 2)));
        assert!(!fits_on_board(&board, WallSegment::horizontal(4, 8)));
        assert!(!fits_on_board(&board, WallSegment::horizontal(-1, 0)));
        assert!(fits_on_board(&board, WallSegment::horizontal(4, 6)));
        assert!(fits_on_board(&board, WallSegment::horizontal(5, 4)));
    }

    #[test]
    fn test_vertical_geometry() {
        let board = two_player_board(
            Cell::new(0, 4),
            Cell::new(8, 4),
            vec![WallSegment::vertical(4, 4), WallSegment::horizontal(2, 2)],
        );

        assert!(!fits_on_board(&board, WallSegment::vertical(4, 4)));
        assert!(!fits_on_board(&board, WallSegment::vertical(3, 4)));
        assert!(!fits_on_board(&board, WallSegment::vertical(5, 4)));
        assert!(!fits_on_board(&board, WallSegment::vertical(2, 2)));
        assert!(!fits_on_board(&board, WallSegment::vertical(8, 0)));
        assert!(fits_on_board(&board, WallSegment::vertical(6, 4)));
        assert!(fits_on_board(&board, WallSegment::vertical(4, 5)));
    }

    #[test]
    fn test_wall_that_seals_a_pawn_is_illegal() {
        let board = two_player_board(
            Cell::new(0, 0),
            Cell::new(8, 8),
            vec![WallSegment::horizontal(0, 0)],
        );

        let sealing = WallSegment::vertical(0, 1);
        assert!(fits_on_board(&board, sealing));
        assert!(!is_wall_legal(&board, sealing));
        assert!(is_wall_legal(&board, WallSegment::vertical(0, 2)));
    }
}
