use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Expands the node with the lowest moves + estimated remaining distance first.
    /// Fast but not guaranteed to find the shortest solution.
    BestFirst,
    /// Ignores the heuristic - finds a move-optimal solution but explores a lot more states.
    BreadthFirst,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::BestFirst
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::BestFirst => write!(f, "best-first"),
            Strategy::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub strategy: Strategy,
    /// Give up after expanding this many nodes. `None` means search until the state space is exhausted.
    pub max_expansions: Option<usize>,
}

impl Config {
    pub fn new(strategy: Strategy, max_expansions: Option<usize>) -> Self {
        Config {
            strategy,
            max_expansions,
        }
    }
}
