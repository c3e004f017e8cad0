//! Immutable board snapshot built from one percept.
//!
//! Coordinates follow the game server: `row` grows downward and `col` grows to
//! the right. A wall anchored at `(row, col)` spans two cells: a horizontal wall
//! sits below `(row, col)` and `(row, col + 1)`, a vertical wall sits to the
//! right of `(row, col)` and `(row + 1, col)`.

use std::collections::HashSet;
use std::fmt;

use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::adjacency::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step away in `direction`. Not bounds-checked.
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl From<[i32; 2]> for Cell {
    fn from([row, col]: [i32; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for [i32; 2] {
    fn from(cell: Cell) -> Self {
        [cell.row, cell.col]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A pawn's target line: any cell on that row (or column) wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Goal {
    Row(i32),
    Column(i32),
}

impl Goal {
    pub fn is_reached_by(self, cell: Cell) -> bool {
        match self {
            Goal::Row(row) => cell.row == row,
            Goal::Column(col) => cell.col == col,
        }
    }

    /// Number of lines still to cross along the goal axis.
    pub fn remaining(self, cell: Cell) -> i32 {
        match self {
            Goal::Row(row) => (row - cell.row).abs(),
            Goal::Column(col) => (col - cell.col).abs(),
        }
    }

    /// Straight direction that brings `cell` closer to the goal line, if any.
    pub fn forward_direction(self, cell: Cell) -> Option<Direction> {
        match self {
            Goal::Row(row) if row > cell.row => Some(Direction::Down),
            Goal::Row(row) if row < cell.row => Some(Direction::Up),
            Goal::Column(col) if col > cell.col => Some(Direction::Right),
            Goal::Column(col) if col < cell.col => Some(Direction::Left),
            _ => None,
        }
    }
}

impl TryFrom<[Option<i32>; 2]> for Goal {
    type Error = anyhow::Error;

    fn try_from(raw: [Option<i32>; 2]) -> Result<Self> {
        match raw {
            [Some(row), None] => Ok(Goal::Row(row)),
            [None, Some(col)] => Ok(Goal::Column(col)),
            other => bail!("goal must name exactly one of row or column, got {:?}", other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallSegment {
    pub orientation: Orientation,
    pub anchor: Cell,
}

impl WallSegment {
    pub const fn horizontal(row: i32, col: i32) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            anchor: Cell::new(row, col),
        }
    }

    pub const fn vertical(row: i32, col: i32) -> Self {
        Self {
            orientation: Orientation::Vertical,
            anchor: Cell::new(row, col),
        }
    }
}

/// Raw game-server percept. Field names match the wire format.
#[derive(Clone, Debug, Deserialize)]
pub struct Percept {
    pub pawns: Vec<[i32; 2]>,
    pub goals: Vec<[Option<i32>; 2]>,
    pub nb_walls: Vec<i32>,
    #[serde(rename = "horiz_walls")]
    pub horizontal_walls: Vec<[i32; 2]>,
    #[serde(rename = "verti_walls")]
    pub vertical_walls: Vec<[i32; 2]>,
    pub rows: i32,
    pub cols: i32,
    pub size: i32,
}

/// Snapshot of everything a decision needs. Built once per turn and never mutated.
#[derive(Clone, Debug)]
pub struct BoardState {
    pawns: Vec<Cell>,
    goals: Vec<Goal>,
    walls_remaining: Vec<i32>,
    horizontal_walls: HashSet<Cell>,
    vertical_walls: HashSet<Cell>,
    rows: i32,
    cols: i32,
    size: i32,
}

impl BoardState {
    /// Build a square board from typed parts.
    pub fn new(
        size: i32,
        pawns: Vec<Cell>,
        goals: Vec<Goal>,
        walls_remaining: Vec<i32>,
        walls: impl IntoIterator<Item = WallSegment>,
    ) -> Result<Self> {
        let mut board = Self {
            pawns,
            goals,
            walls_remaining,
            horizontal_walls: HashSet::new(),
            vertical_walls: HashSet::new(),
            rows: size,
            cols: size,
            size,
        };
        for wall in walls {
            board.insert_wall(wall)?;
        }
        board.validate()?;
        Ok(board)
    }

    pub fn from_percept(percept: &Percept) -> Result<Self> {
        let goals = percept
            .goals
            .iter()
            .enumerate()
            .map(|(i, raw)| Goal::try_from(*raw).with_context(|| format!("goal of pawn {}", i)))
            .collect::<Result<Vec<_>>>()?;

        let mut board = Self {
            pawns: percept.pawns.iter().copied().map(Cell::from).collect(),
            goals,
            walls_remaining: percept.nb_walls.clone(),
            horizontal_walls: HashSet::new(),
            vertical_walls: HashSet::new(),
            rows: percept.rows,
            cols: percept.cols,
            size: percept.size,
        };
        let walls = percept
            .horizontal_walls
            .iter()
            .map(|&[row, col]| WallSegment::horizontal(row, col))
            .chain(
                percept
                    .vertical_walls
                    .iter()
                    .map(|&[row, col]| WallSegment::vertical(row, col)),
            );
        for wall in walls {
            board.insert_wall(wall)?;
        }
        board.validate().context("malformed percept")?;
        Ok(board)
    }

    fn insert_wall(&mut self, wall: WallSegment) -> Result<()> {
        let inserted = match wall.orientation {
            Orientation::Horizontal => self.horizontal_walls.insert(wall.anchor),
            Orientation::Vertical => self.vertical_walls.insert(wall.anchor),
        };
        ensure!(inserted, "duplicate {:?} wall at {}", wall.orientation, wall.anchor);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.size > 0, "board size must be positive, got {}", self.size);
        ensure!(
            self.rows > 0 && self.cols > 0,
            "board must have rows and columns, got {}x{}",
            self.rows,
            self.cols
        );
        ensure!(self.pawns.len() >= 2, "need at least two pawns, got {}", self.pawns.len());
        ensure!(
            self.goals.len() == self.pawns.len(),
            "{} goals for {} pawns",
            self.goals.len(),
            self.pawns.len()
        );
        ensure!(
            self.walls_remaining.len() == self.pawns.len(),
            "{} wall counts for {} pawns",
            self.walls_remaining.len(),
            self.pawns.len()
        );

        for (i, &pawn) in self.pawns.iter().enumerate() {
            ensure!(self.is_in_bounds(pawn), "pawn {} at {} is off the board", i, pawn);
            ensure!(
                !self.pawns[..i].contains(&pawn),
                "pawn {} shares cell {} with another pawn",
                i,
                pawn
            );
        }
        for (i, goal) in self.goals.iter().enumerate() {
            let line = match *goal {
                Goal::Row(line) | Goal::Column(line) => line,
            };
            ensure!((0..self.size).contains(&line), "goal {:?} of pawn {} is off the board", goal, i);
        }
        for (i, &count) in self.walls_remaining.iter().enumerate() {
            ensure!(count >= 0, "pawn {} has a negative wall count {}", i, count);
        }

        let interior = 0..self.size - 1;
        for &anchor in &self.horizontal_walls {
            ensure!(
                interior.contains(&anchor.row) && interior.contains(&anchor.col),
                "horizontal wall at {} is off the board",
                anchor
            );
            ensure!(
                !self.horizontal_walls.contains(&Cell::new(anchor.row, anchor.col + 1)),
                "horizontal walls at {} and its right neighbour overlap",
                anchor
            );
            ensure!(
                !self.vertical_walls.contains(&anchor),
                "horizontal and vertical walls cross at {}",
                anchor
            );
        }
        for &anchor in &self.vertical_walls {
            ensure!(
                interior.contains(&anchor.row) && interior.contains(&anchor.col),
                "vertical wall at {} is off the board",
                anchor
            );
            ensure!(
                !self.vertical_walls.contains(&Cell::new(anchor.row + 1, anchor.col)),
                "vertical walls at {} and the one below overlap",
                anchor
            );
        }
        Ok(())
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.row) && (0..self.size).contains(&cell.col)
    }

    pub fn pawns(&self) -> &[Cell] {
        &self.pawns
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn walls_remaining(&self) -> &[i32] {
        &self.walls_remaining
    }

    pub fn horizontal_walls(&self) -> &HashSet<Cell> {
        &self.horizontal_walls
    }

    pub fn vertical_walls(&self) -> &HashSet<Cell> {
        &self.vertical_walls
    }

    pub fn num_players(&self) -> usize {
        self.pawns.len()
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn pawn(&self, player: usize) -> Result<Cell> {
        self.pawns
            .get(player)
            .copied()
            .with_context(|| format!("no pawn for player {}", player))
    }

    pub fn goal(&self, player: usize) -> Result<Goal> {
        self.goals
            .get(player)
            .copied()
            .with_context(|| format!("no goal for player {}", player))
    }

    pub fn has_wall(&self, wall: WallSegment) -> bool {
        match wall.orientation {
            Orientation::Horizontal => self.horizontal_walls.contains(&wall.anchor),
            Orientation::Vertical => self.vertical_walls.contains(&wall.anchor),
        }
    }

    /// Copy of this board with one more wall. Geometry is not re-validated.
    pub(crate) fn with_wall(&self, wall: WallSegment) -> Self {
        let mut board = self.clone();
        match wall.orientation {
            Orientation::Horizontal => board.horizontal_walls.insert(wall.anchor),
            Orientation::Vertical => board.vertical_walls.insert(wall.anchor),
        };
        board
    }
}
