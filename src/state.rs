use crate::data::Pos;
use crate::grid::Grid;
use crate::puzzle::InputErr;

/// One board configuration - the only thing that changes during a search.
///
/// Crates are kept sorted so that two states reached by moving crates in a different order
/// compare (and hash) equal. The grid is deliberately not part of the state.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    player_pos: Pos,
    crates: Vec<Pos>,
}

impl State {
    /// Crates can be in any order, they're sorted here.
    /// Two crates on one cell or the player on a crate are rejected.
    pub fn new(player_pos: Pos, mut crates: Vec<Pos>) -> Result<State, InputErr> {
        crates.sort();
        if let Some(w) = crates.windows(2).find(|w| w[0] == w[1]) {
            return Err(InputErr::OverlappingCrates(w[0]));
        }
        let state = State { player_pos, crates };
        if state.has_crate_at(player_pos) {
            return Err(InputErr::PlayerOnCrate(player_pos));
        }
        Ok(state)
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn crates(&self) -> &[Pos] {
        &self.crates
    }

    pub fn has_crate_at(&self, pos: Pos) -> bool {
        self.crates.binary_search(&pos).is_ok()
    }

    /// Player moved without touching any crate.
    pub(crate) fn with_player(&self, player_pos: Pos) -> State {
        State {
            player_pos,
            crates: self.crates.clone(),
        }
    }

    /// Player moved into `from`, pushing the crate there to `to`.
    pub(crate) fn with_push(&self, player_pos: Pos, from: Pos, to: Pos) -> State {
        let mut crates = self.crates.clone();
        if let Ok(i) = crates.binary_search(&from) {
            crates.remove(i);
        }
        // keep sorted without resorting everything
        let i = crates.binary_search(&to).unwrap_or_else(|i| i);
        crates.insert(i, to);
        State { player_pos, crates }
    }

    /// Every crate is on a goal - not the other way around, there can be more goals than crates.
    pub fn is_solved(&self, grid: &Grid) -> bool {
        self.crates.iter().all(|c| grid.is_goal(c.r, c.c))
    }
}
