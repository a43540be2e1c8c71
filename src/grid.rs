use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The static part of a puzzle - walls and goals. Never changes during a search.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec2d<MapCell>,
    goals: Vec<Pos>,
}

impl Grid {
    pub(crate) fn new(cells: Vec2d<MapCell>) -> Self {
        let goals = cells
            .positions()
            .filter(|&pos| cells[pos] == MapCell::Goal)
            .collect();
        Grid { cells, goals }
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    pub fn is_within_bounds(&self, row: i32, col: i32) -> bool {
        self.cells.get(Pos::new(row, col)).is_some()
    }

    /// Anything outside the map counts as wall - nothing can ever stand there.
    pub fn is_wall(&self, row: i32, col: i32) -> bool {
        self.cell(Pos::new(row, col)) == MapCell::Wall
    }

    pub fn is_goal(&self, row: i32, col: i32) -> bool {
        self.cell(Pos::new(row, col)) == MapCell::Goal
    }

    pub fn cell(&self, pos: Pos) -> MapCell {
        self.cells.get(pos).copied().unwrap_or(MapCell::Wall)
    }

    pub(crate) fn cells(&self) -> &Vec2d<MapCell> {
        &self.cells
    }

    pub(crate) fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, Some(state))
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(self, None))
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
