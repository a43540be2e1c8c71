// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

pub mod config;
pub mod data;
pub mod grid;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod rules;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod vec2d;

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::puzzle::{InputErr, Puzzle};
use crate::solver::SolverOk;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Puzzle, Box<dyn Error>>;
}

impl<P: AsRef<Path>> LoadLevel for P {
    fn load_level(&self) -> Result<Puzzle, Box<dyn Error>> {
        let level = fs::read_to_string(self)?;
        Ok(level.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, config: Config) -> SolverOk;
}

/// Solves a level given as two layers of the same size - a map (`#`, `.`, ` `)
/// and items (`@`, `$`, ` `).
///
/// Returns the moves as a string of `udlr`. An empty string means either there's
/// nothing to do or there's no solution - check the level first to tell them apart.
pub fn solve_puzzle<R: AsRef<[char]>>(
    width: usize,
    height: usize,
    map_data: &[R],
    items_data: &[R],
) -> Result<String, InputErr> {
    let puzzle = Puzzle::new(width, height, map_data, items_data)?;
    Ok(puzzle.solve(Config::default()).commands())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|row| row.chars().collect()).collect()
    }

    #[test]
    fn solving_layers() {
        let map = chars(&["######", "#    #", "# .  #", "######"]);
        let items = chars(&["      ", " @    ", "   $  ", "      "]);
        let commands = solve_puzzle(6, 4, &map, &items).unwrap();

        let puzzle = Puzzle::new(6, 4, &map, &items).unwrap();
        let mut state = puzzle.state().clone();
        for command in commands.chars() {
            let dir = data::Dir::from_command(command).unwrap();
            state = rules::try_apply(puzzle.grid(), dir, &state).unwrap();
        }
        assert!(state.is_solved(puzzle.grid()));
    }

    #[test]
    fn invalid_layers() {
        let map = chars(&["####"]);
        let items = chars(&["    "]);
        assert_eq!(solve_puzzle(4, 1, &map, &items), Err(InputErr::NoPlayer));
    }

    #[test]
    fn loading_missing_file() {
        assert!("levels/does-not-exist.txt".load_level().is_err());
    }

    #[test]
    fn loading_and_solving() {
        let puzzle = "levels/simple/corridor.txt".load_level().unwrap();
        let solution = puzzle.solve(Config::default());
        assert_eq!(solution.commands(), "rr");
    }
}
