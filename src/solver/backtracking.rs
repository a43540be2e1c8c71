use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::moves::{Move, Moves};
use crate::state::State;

/// Every discovered state points to the state it was discovered from
/// and the move that got us here. The initial state has no predecessor.
pub(crate) type Prevs<'a, H> = HashMap<&'a State, Option<(&'a State, Move)>, H>;

pub(crate) fn reconstruct_moves<H: BuildHasher>(prevs: &Prevs<'_, H>, final_state: &State) -> Moves {
    let mut moves = Vec::new();
    let mut state = final_state;
    while let Some(&Some((prev, mov))) = prevs.get(state) {
        moves.push(mov);
        state = prev;
    }
    moves.reverse();
    Moves::new(moves)
}

#[cfg(test)]
mod tests {
    use fnv::FnvHashMap;

    use super::*;

    use crate::data::Dir::*;
    use crate::data::Pos;

    #[test]
    fn backtracking() {
        let s0 = State::new(Pos::new(1, 1), vec![Pos::new(1, 2)]).unwrap();
        let s1 = State::new(Pos::new(2, 1), vec![Pos::new(1, 2)]).unwrap();
        let s2 = State::new(Pos::new(2, 2), vec![Pos::new(1, 2)]).unwrap();
        let s3 = State::new(Pos::new(1, 2), vec![Pos::new(0, 2)]).unwrap();

        let mut prevs: Prevs<'_, _> = FnvHashMap::default();
        prevs.insert(&s0, None);
        prevs.insert(&s1, Some((&s0, Move::new(Down, false))));
        prevs.insert(&s2, Some((&s1, Move::new(Right, false))));
        prevs.insert(&s3, Some((&s2, Move::new(Up, true))));

        assert_eq!(reconstruct_moves(&prevs, &s3).to_string(), "drU");
        assert_eq!(reconstruct_moves(&prevs, &s1).to_string(), "d");
        assert!(reconstruct_moves(&prevs, &s0).is_empty());
    }
}
