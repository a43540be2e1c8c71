use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::grid::Grid;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Cells a crate can never leave once pushed there.
///
/// Only simple corners are detected - frozen crates and crates along a wall
/// with no goal are not, so a state that passes isn't necessarily solvable.
#[derive(Clone, PartialEq, Eq)]
pub struct Deadlocks(Vec2d<bool>);

impl Deadlocks {
    pub fn contains(&self, pos: Pos) -> bool {
        self.0.get(pos).cloned().unwrap_or(false)
    }

    pub fn is_deadlocked(&self, state: &State) -> bool {
        // crates on goals are checked too - goals are never marked
        state.crates().iter().any(|&c| self.contains(c))
    }

    pub fn count(&self) -> usize {
        self.0.positions().filter(|&pos| self.0[pos]).count()
    }
}

pub fn compute_deadlocks(grid: &Grid) -> Deadlocks {
    let mut dead: Vec2d<bool> = grid.cells().scratchpad();

    for pos in grid.cells().positions() {
        if grid.cell(pos) != MapCell::Floor {
            continue;
        }

        let wall = |dr, dc| grid.is_wall(pos.r + dr, pos.c + dc);
        let (up, down, left, right) = (wall(-1, 0), wall(1, 0), wall(0, -1), wall(0, 1));
        if (up || down) && (left || right) {
            dead[pos] = true;
        }
    }

    Deadlocks(dead)
}

impl Display for Deadlocks {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Deadlocks {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::puzzle::Puzzle;

    #[test]
    fn corners() {
        let level = r"
######
#   .#
# @  #
## $ #
######";
        let puzzle: Puzzle = level.parse().unwrap();
        let deadlocks = compute_deadlocks(puzzle.grid());
        let expected = r"
000000
010000
010000
001010
000000
"
        .trim_start();
        assert_eq!(deadlocks.to_string(), expected);
        assert_eq!(deadlocks.count(), 4);
        assert!(!deadlocks.is_deadlocked(puzzle.state()));

        let stuck = State::new(Pos::new(2, 2), vec![Pos::new(3, 4)]).unwrap();
        assert!(deadlocks.is_deadlocked(&stuck));
    }

    #[test]
    fn goal_corners_are_fine() {
        let level = r"
#####
#* .#
#@  #
#####";
        let puzzle: Puzzle = level.parse().unwrap();
        let deadlocks = compute_deadlocks(puzzle.grid());
        assert!(!deadlocks.contains(Pos::new(1, 1)));
        assert!(!deadlocks.contains(Pos::new(1, 3)));
        assert!(deadlocks.contains(Pos::new(2, 1)));
        assert!(deadlocks.contains(Pos::new(2, 3)));
        assert!(!deadlocks.is_deadlocked(puzzle.state()));
    }

    #[test]
    fn sound() {
        let level = r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
";
        let puzzle: Puzzle = level.parse().unwrap();
        let grid = puzzle.grid();
        let deadlocks = compute_deadlocks(grid);
        assert!(deadlocks.count() > 0);
        for pos in grid.cells().positions() {
            if !deadlocks.contains(pos) {
                continue;
            }
            assert!(!grid.is_goal(pos.r, pos.c));
            assert!(!grid.is_wall(pos.r, pos.c));
            let vertical = grid.is_wall(pos.r - 1, pos.c) || grid.is_wall(pos.r + 1, pos.c);
            let horizontal = grid.is_wall(pos.r, pos.c - 1) || grid.is_wall(pos.r, pos.c + 1);
            assert!(vertical && horizontal, "{}", pos);
        }
    }
}
