use std::collections::VecDeque;

use fnv::FnvHashMap;

use crate::data::Pos;
use crate::grid::Grid;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Added for every crate that can't reach any goal even on an empty map.
/// Large enough to push such states to the back of the queue but still finite
/// so the ordering stays total.
pub const UNREACHABLE_PENALTY: u64 = 1_000_000;

/// Walking distances from one goal to every cell, ignoring crates.
/// Cells separated from the goal by walls have no distance at all - that's not the same as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap(Vec2d<Option<u32>>);

impl DistanceMap {
    pub fn get(&self, pos: Pos) -> Option<u32> {
        self.0.get(pos).cloned().unwrap_or(None)
    }
}

pub fn compute_goal_distances(goal: Pos, grid: &Grid) -> DistanceMap {
    let mut dists: Vec2d<Option<u32>> = grid.cells().scratchpad();
    if grid.is_wall(goal.r, goal.c) {
        return DistanceMap(dists);
    }

    dists[goal] = Some(0);
    let mut to_visit = VecDeque::new();
    to_visit.push_back((goal, 0));

    while let Some((cur, dist)) = to_visit.pop_front() {
        for &next in &cur.neighbors() {
            // is_wall is also true outside the map
            if grid.is_wall(next.r, next.c) || dists[next].is_some() {
                continue;
            }
            dists[next] = Some(dist + 1);
            to_visit.push_back((next, dist + 1));
        }
    }

    DistanceMap(dists)
}

#[derive(Debug, Clone)]
pub struct HeuristicField {
    per_goal: FnvHashMap<Pos, DistanceMap>,
    /// Min over all goals - all `estimate` ever needs
    nearest: Vec2d<Option<u32>>,
}

impl HeuristicField {
    pub fn distance(&self, goal: Pos, pos: Pos) -> Option<u32> {
        self.per_goal.get(&goal).and_then(|dists| dists.get(pos))
    }

    pub fn nearest_goal_distance(&self, pos: Pos) -> Option<u32> {
        self.nearest.get(pos).cloned().unwrap_or(None)
    }

    /// Sum of distances of crates not on a goal to their nearest goal.
    ///
    /// Each crate is considered alone so this can overestimate (several crates heading
    /// for the same goal, crates in each other's way) - the search using it is greedy,
    /// not optimal.
    pub fn estimate(&self, grid: &Grid, state: &State) -> u64 {
        state
            .crates()
            .iter()
            .filter(|c| !grid.is_goal(c.r, c.c))
            .map(|&c| match self.nearest_goal_distance(c) {
                Some(dist) => u64::from(dist),
                None => UNREACHABLE_PENALTY,
            })
            .sum()
    }
}

pub fn compute_heuristic_field(goals: &[Pos], grid: &Grid) -> HeuristicField {
    let mut per_goal = FnvHashMap::default();
    let mut nearest: Vec2d<Option<u32>> = grid.cells().scratchpad();

    for &goal in goals {
        let dists = compute_goal_distances(goal, grid);
        for pos in grid.cells().positions() {
            nearest[pos] = match (nearest[pos], dists.get(pos)) {
                (Some(best), Some(cur)) => Some(best.min(cur)),
                (best, cur) => best.or(cur),
            };
        }
        per_goal.insert(goal, dists);
    }

    HeuristicField { per_goal, nearest }
}
