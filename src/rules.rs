use crate::data::{Dir, DIRECTIONS};
use crate::grid::Grid;
use crate::moves::Move;
use crate::state::State;

/// Applies one move, returning the new state or `None` if the move is illegal.
/// The input state is never modified.
pub fn try_apply(grid: &Grid, dir: Dir, state: &State) -> Option<State> {
    apply(grid, dir, state).map(|(new_state, _)| new_state)
}

pub fn is_legal(grid: &Grid, dir: Dir, state: &State) -> bool {
    try_apply(grid, dir, state).is_some()
}

/// All legal moves in expansion order. Not used while searching.
pub fn legal_moves(grid: &Grid, state: &State) -> Vec<Dir> {
    DIRECTIONS
        .iter()
        .cloned()
        .filter(|&dir| is_legal(grid, dir, state))
        .collect()
}

/// Like `try_apply` but also tells whether a crate was pushed.
pub(crate) fn apply(grid: &Grid, dir: Dir, state: &State) -> Option<(State, Move)> {
    // order matters: bounds -> wall -> crates
    let target = state.player_pos() + dir;
    if !grid.is_within_bounds(target.r, target.c) || grid.is_wall(target.r, target.c) {
        return None;
    }

    if !state.has_crate_at(target) {
        return Some((state.with_player(target), Move::new(dir, false)));
    }

    let push_dest = target + dir;
    if !grid.is_within_bounds(push_dest.r, push_dest.c)
        || grid.is_wall(push_dest.r, push_dest.c)
        || state.has_crate_at(push_dest)
    {
        return None;
    }

    Some((
        state.with_push(target, target, push_dest),
        Move::new(dir, true),
    ))
}
