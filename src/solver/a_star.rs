use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::state::State;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<usize>,
    expanded_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    deadlocked_states: Vec<usize>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_expanded(&self) -> usize {
        self.expanded_states.iter().sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    pub fn total_deadlocked(&self) -> usize {
        self.deadlocked_states.iter().sum()
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    /// Returns true the first time a depth is expanded.
    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn add_deadlocked(&mut self, depth: u32) -> bool {
        Self::add(&mut self.deadlocked_states, depth)
    }

    fn add(counts: &mut Vec<usize>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because some depths might be skipped (best-first doesn't go depth by depth)
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "deadlocked by depth: {:?}", self.deadlocked_states)
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let expanded = self.total_expanded();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "States expanded total: {}", expanded.separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "Deadlocked total: {}",
            self.total_deadlocked().separated_string()
        )?;
        writeln!(
            f,
            "Created but not expanded total: {}",
            (created - expanded).separated_string()
        )
    }
}

/// A discovered state waiting in the frontier.
///
/// Ordered by cost first and then by discovery order - nodes with equal cost
/// are expanded first in first out.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: &'a State,
    pub(crate) dist: u32,
    pub(crate) cost: u64,
    seq: u64,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: &'a State, dist: u32, h: u64, seq: u64) -> Self {
        Self {
            state,
            dist,
            cost: u64::from(dist) + h,
            seq,
        }
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode<'_> {}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // use with Reverse in BinaryHeap
        (self.cost, self.seq).cmp(&(other.cost, other.seq))
    }
}
