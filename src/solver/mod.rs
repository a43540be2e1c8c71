pub mod a_star;
pub mod deadlocks;
pub mod heuristic;

mod backtracking;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashMap;
use log::{debug, info, warn};
use typed_arena::Arena;

use crate::config::{Config, Strategy};
use crate::data::DIRECTIONS;
use crate::moves::Moves;
use crate::puzzle::Puzzle;
use crate::rules;
use crate::state::State;
use crate::Solve;

use self::a_star::{SearchNode, Stats};
use self::backtracking::Prevs;
use self::deadlocks::compute_deadlocks;
use self::heuristic::compute_heuristic_field;

pub struct SolverOk {
    /// `None` when the state space was exhausted (or the budget ran out) without reaching a goal.
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub strategy: Strategy,
    pub budget_exhausted: bool,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, strategy: Strategy, budget_exhausted: bool) -> Self {
        Self {
            moves,
            stats,
            strategy,
            budget_exhausted,
        }
    }

    /// The `udlr` string - empty both when there's no solution and when there's nothing to do.
    pub fn commands(&self) -> String {
        self.moves
            .as_ref()
            .map(Moves::to_commands)
            .unwrap_or_default()
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None if self.budget_exhausted => writeln!(f, "No solution (budget exhausted)")?,
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {}", self.strategy, moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, config: Config) -> SolverOk {
        search(self, config)
    }
}

fn search(puzzle: &Puzzle, config: Config) -> SolverOk {
    let grid = puzzle.grid();
    let mut stats = Stats::new();

    if puzzle.state().is_solved(grid) {
        info!("Already solved");
        return SolverOk::new(Some(Moves::default()), stats, config.strategy, false);
    }

    debug!("Processing puzzle...");
    let deadlocks = compute_deadlocks(grid);
    let field = match config.strategy {
        Strategy::BestFirst => Some(compute_heuristic_field(grid.goals(), grid)),
        Strategy::BreadthFirst => None,
    };
    debug!(
        "Processed puzzle: {} goals, {} deadlock cells",
        grid.goals().len(),
        deadlocks.count()
    );
    let heuristic = |state: &State| field.as_ref().map_or(0, |f| f.estimate(grid, state));

    // states live here so the visited map and prev links can share them
    let arena = Arena::new();
    let mut prevs: Prevs<'_, _> = FnvHashMap::default();
    let mut to_visit = BinaryHeap::new();
    let mut next_seq = 0;

    let start: &State = arena.alloc(puzzle.state().clone());
    prevs.insert(start, None);
    let start_node = SearchNode::new(start, 0, heuristic(start), next_seq);
    next_seq += 1;
    stats.add_created(0);
    to_visit.push(Reverse(start_node));

    debug!("Search called with {}", config.strategy);

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        // a goal that's already popped is returned even when the budget is used up
        let solved = cur_node.state.is_solved(grid);
        if let Some(max) = config.max_expansions {
            if !solved && stats.total_expanded() >= max {
                warn!("Giving up after expanding {} states", max);
                return SolverOk::new(None, stats, config.strategy, true);
            }
        }

        if stats.add_expanded(cur_node.dist) {
            debug!("Expanded new depth: {}", cur_node.dist);
        }

        if solved {
            debug!("Solved, backtracking path");
            let moves = backtracking::reconstruct_moves(&prevs, cur_node.state);
            info!(
                "Found solution with {} moves, {} pushes",
                moves.move_cnt(),
                moves.push_cnt()
            );
            return SolverOk::new(Some(moves), stats, config.strategy, false);
        }

        let dist = cur_node.dist + 1;
        for &dir in &DIRECTIONS {
            let (new_state, mov) = match rules::apply(grid, dir, cur_node.state) {
                Some(next) => next,
                None => continue,
            };

            if prevs.contains_key(&new_state) {
                stats.add_duplicate(dist);
                continue;
            }
            if deadlocks.is_deadlocked(&new_state) {
                stats.add_deadlocked(dist);
                continue;
            }

            let new_state: &State = arena.alloc(new_state);
            prevs.insert(new_state, Some((cur_node.state, mov)));
            let next_node = SearchNode::new(new_state, dist, heuristic(new_state), next_seq);
            next_seq += 1;
            stats.add_created(dist);
            to_visit.push(Reverse(next_node));
        }
    }

    info!("No solution - state space exhausted");
    SolverOk::new(None, stats, config.strategy, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_with(level: &str, config: Config) -> SolverOk {
        let puzzle: Puzzle = level.parse().unwrap();
        puzzle.solve(config)
    }

    fn solve(level: &str) -> SolverOk {
        solve_with(level, Config::default())
    }

    /// Replays the commands and checks every crate ends up on a goal.
    fn assert_solves(level: &str, commands: &str) {
        let puzzle: Puzzle = level.parse().unwrap();
        let mut state = puzzle.state().clone();
        for command in commands.chars() {
            let dir = crate::data::Dir::from_command(command).unwrap();
            state = rules::try_apply(puzzle.grid(), dir, &state)
                .unwrap_or_else(|| panic!("illegal move {} in {}", command, commands));
        }
        assert!(state.is_solved(puzzle.grid()), "{} doesn't solve the level", commands);
    }

    #[test]
    fn single_push() {
        let solution = solve("#.@$.#");
        assert_eq!(solution.commands(), "r");
        assert_eq!(solution.moves.unwrap().to_string(), "R");
    }

    #[test]
    fn two_pushes() {
        let solution = solve("#@$ .#");
        assert_eq!(solution.commands(), "rr");
        assert_eq!(solution.moves.unwrap().push_cnt(), 2);
    }

    #[test]
    fn no_crates() {
        let solution = solve("#@  .#");
        assert_eq!(solution.moves, Some(Moves::default()));
        assert_eq!(solution.commands(), "");
        assert_eq!(solution.stats.total_expanded(), 0);
    }

    #[test]
    fn already_solved() {
        let level = r"
#####
#@ *#
# * #
#####
";
        let solution = solve(level);
        assert_eq!(solution.moves, Some(Moves::default()));
        assert_eq!(solution.commands(), "");
        assert_eq!(solution.stats.total_expanded(), 0);
        assert_eq!(solution.stats.total_created(), 0);
    }

    #[test]
    fn crate_in_corner() {
        let level = r"
#####
#$  #
#  @#
#  .#
#####
";
        let solution = solve(level);
        assert_eq!(solution.moves, None);
        assert_eq!(solution.commands(), "");
        assert!(!solution.budget_exhausted);
        // every successor keeps the crate in the corner
        assert_eq!(solution.stats.total_expanded(), 1);
        assert_eq!(solution.stats.total_deadlocked(), 3);
    }

    #[test]
    fn exhausted() {
        // crate can't be pushed right because the player can never get to its left
        // and pushing it up or down puts it into a corner
        let level = r"
######
#    #
#$@ .#
#    #
######
";
        let solution = solve(level);
        assert_eq!(solution.moves, None);
        assert!(solution.stats.total_expanded() > 1);
    }

    #[test]
    fn goal_behind_crates() {
        let level = r"
#######
#@$$ .#
#######
";
        assert_eq!(solve(level).moves, None);
    }

    #[test]
    fn equal_cost_prefers_first_discovered() {
        // going around over the top and around under the bottom are equally long,
        // up is tried before down
        let level = r"
#######
#     #
# $@ .#
#     #
#######
";
        let best_first = solve(level);
        assert_eq!(best_first.commands(), "ulldrrr");
        let breadth_first = solve_with(level, Config::new(Strategy::BreadthFirst, None));
        assert_eq!(breadth_first.commands(), "ulldrrr");

        // and it's the same every time
        for _ in 0..3 {
            assert_eq!(solve(level).commands(), "ulldrrr");
        }
    }

    #[test]
    fn budget() {
        let level = r"
#######
#     #
# $@ .#
#     #
#######
";
        let solution = solve_with(level, Config::new(Strategy::BestFirst, Some(3)));
        assert_eq!(solution.moves, None);
        assert!(solution.budget_exhausted);
        assert_eq!(solution.stats.total_expanded(), 3);
        assert_eq!(format!("{:?}", solution).lines().next(), Some("No solution (budget exhausted)"));
    }

    #[test]
    fn budget_keeps_popped_goal() {
        // start, after the first push, then the goal
        let solution = solve_with("#@$ .#", Config::new(Strategy::BestFirst, Some(2)));
        assert_eq!(solution.commands(), "rr");
        assert!(!solution.budget_exhausted);
        assert_eq!(solution.stats.total_expanded(), 3);

        let solution = solve_with("#@$ .#", Config::new(Strategy::BestFirst, Some(1)));
        assert_eq!(solution.moves, None);
        assert!(solution.budget_exhausted);
    }

    #[test]
    fn multiple_crates() {
        let level = r"
########
#      #
# $$ . #
#  @ . #
#      #
########
";
        let solution = solve(level);
        assert_solves(level, &solution.commands());
    }

    #[test]
    fn petitesse() {
        let level = r"
#####
#   #
#.$.#
# $ #
#+$ #
#####
";
        let solution = solve(level);
        assert!(solution.moves.is_some());
        assert_solves(level, &solution.commands());
    }

    #[test]
    fn breadth_first_is_move_optimal() {
        let level = r"
#######
#  .  #
# $#  #
#@    #
#######
";
        let best = solve_with(level, Config::new(Strategy::BreadthFirst, None));
        let any = solve(level);
        assert_solves(level, &best.commands());
        assert_solves(level, &any.commands());
        assert!(best.moves.unwrap().move_cnt() <= any.moves.unwrap().move_cnt());
    }
}
