use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, MapCell};
use crate::grid::Grid;
use crate::state::State;

/// Renders a grid, optionally with crates and player, in XSB.
pub struct MapFormatter<'a> {
    grid: &'a Grid,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(grid: &'a Grid, state: Option<&'a State>) -> Self {
        Self { grid, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cells = self.grid.cells();
        let mut state_grid = cells.scratchpad_with_default(Contents::Empty);
        if let Some(state) = self.state {
            for &c in state.crates() {
                state_grid[c] = Contents::Crate;
            }
            state_grid[state.player_pos()] = Contents::Player;
        }

        let mut positions = cells.positions().peekable();
        while positions.peek().is_some() {
            for pos in positions.by_ref().take(cells.cols()) {
                Self::write_cell_xsb(cells[pos], state_grid[pos], f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell_xsb(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        match (cell, contents) {
            (MapCell::Floor, Contents::Empty) => write!(f, " "),
            (MapCell::Floor, Contents::Crate) => write!(f, "$"),
            (MapCell::Floor, Contents::Player) => write!(f, "@"),
            (MapCell::Wall, Contents::Empty) => write!(f, "#"),
            (MapCell::Wall, _) => unreachable!("Nothing can be on a wall"),
            (MapCell::Goal, Contents::Empty) => write!(f, "."),
            (MapCell::Goal, Contents::Crate) => write!(f, "*"),
            (MapCell::Goal, Contents::Player) => write!(f, "+"),
        }
    }
}

impl Display for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl Debug for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::puzzle::Puzzle;

    #[test]
    fn formatting_with_state() {
        let level = r"
#####
#@$.#
# * #
#####
"
        .trim_start_matches('\n');

        let puzzle: Puzzle = level.parse().unwrap();
        assert_eq!(
            puzzle.grid().format_with_state(puzzle.state()).to_string(),
            level
        );
        assert_eq!(puzzle.grid().to_string(), "#####\n#  .#\n# . #\n#####\n");
    }
}
