use std::fmt::{self, Debug, Display, Formatter};

use crate::grid::Grid;
use crate::moves::Moves;
use crate::rules;
use crate::state::State;

/// Prints the initial state and then the state after every push
/// (or after every move with `include_steps`).
pub struct SolutionFormatter<'a> {
    grid: &'a Grid,
    initial_state: &'a State,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        grid: &'a Grid,
        initial_state: &'a State,
        moves: &'a Moves,
        include_steps: bool,
    ) -> Self {
        Self {
            grid,
            initial_state,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.grid.format_with_state(self.initial_state))?;
        let mut last_state = self.initial_state.clone();
        for &mov in self.moves {
            // moves from a different level stop the replay
            let new_state = match rules::try_apply(self.grid, mov.dir, &last_state) {
                Some(state) => state,
                None => return Err(fmt::Error),
            };
            if mov.is_push || self.include_steps {
                writeln!(f, "{}", self.grid.format_with_state(&new_state))?;
            }
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
