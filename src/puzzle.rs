use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::data::{MapCell, Pos};
use crate::grid::Grid;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::parser::{self, ParserErr};
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Map,
    Items,
}

impl Display for Layer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Layer::Map => write!(f, "map"),
            Layer::Items => write!(f, "items"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErr {
    TooLarge,
    RowCount { layer: Layer, found: usize },
    RowLength { layer: Layer, row: usize, found: usize },
    MapSymbol { r: usize, c: usize, symbol: char },
    ItemSymbol { r: usize, c: usize, symbol: char },
    NoPlayer,
    MultiplePlayers,
    PlayerOnWall,
    CrateOnWall { r: usize, c: usize },
    OverlappingCrates(Pos),
    PlayerOnCrate(Pos),
}

impl Display for InputErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            InputErr::TooLarge => write!(f, "Map dimensions don't fit into coordinates"),
            InputErr::RowCount { layer, found } => {
                write!(f, "The {} has {} rows, expected height", layer, found)
            }
            InputErr::RowLength { layer, row, found } => write!(
                f,
                "Row {} of the {} has {} columns, expected width",
                row, layer, found
            ),
            InputErr::MapSymbol { r, c, symbol } => {
                write!(f, "Invalid map symbol '{}' at pos: [{}, {}]", symbol, r, c)
            }
            InputErr::ItemSymbol { r, c, symbol } => {
                write!(f, "Invalid item symbol '{}' at pos: [{}, {}]", symbol, r, c)
            }
            InputErr::NoPlayer => write!(f, "No player"),
            InputErr::MultiplePlayers => write!(f, "More than one player"),
            InputErr::PlayerOnWall => write!(f, "Player on a wall"),
            InputErr::CrateOnWall { r, c } => write!(f, "Crate on a wall at pos: [{}, {}]", r, c),
            InputErr::OverlappingCrates(pos) => write!(f, "More than one crate at pos: {}", pos),
            InputErr::PlayerOnCrate(pos) => write!(f, "Player on a crate at pos: {}", pos),
        }
    }
}

impl Error for InputErr {}

/// A grid together with the initial state - everything needed to start solving.
#[derive(Clone)]
pub struct Puzzle {
    grid: Grid,
    state: State,
}

impl Puzzle {
    /// Validates the two layers of a level.
    ///
    /// Map symbols: `#` wall, `.` goal, ` ` floor (`-` and `_` are floor too).
    /// Item symbols: `@` player, `$` crate, ` ` nothing (`-` and `_` too).
    pub fn new<R: AsRef<[char]>>(
        width: usize,
        height: usize,
        map_data: &[R],
        items_data: &[R],
    ) -> Result<Self, InputErr> {
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(InputErr::TooLarge);
        }
        check_dimensions(Layer::Map, width, height, map_data)?;
        check_dimensions(Layer::Items, width, height, items_data)?;

        let mut cells = Vec2d::new(height, width, MapCell::Floor);
        let mut player_pos = None;
        let mut crates = Vec::new();

        for (r, (map_row, items_row)) in map_data.iter().zip(items_data).enumerate() {
            let map_row = map_row.as_ref();
            let items_row = items_row.as_ref();
            for c in 0..width {
                let pos = Pos::new(r as i32, c as i32);

                let cell = match map_row[c] {
                    '#' => MapCell::Wall,
                    '.' => MapCell::Goal,
                    ' ' | '-' | '_' => MapCell::Floor,
                    symbol => return Err(InputErr::MapSymbol { r, c, symbol }),
                };
                cells[pos] = cell;

                match items_row[c] {
                    '@' => {
                        if player_pos.is_some() {
                            return Err(InputErr::MultiplePlayers);
                        }
                        if cell == MapCell::Wall {
                            return Err(InputErr::PlayerOnWall);
                        }
                        player_pos = Some(pos);
                    }
                    '$' => {
                        if cell == MapCell::Wall {
                            return Err(InputErr::CrateOnWall { r, c });
                        }
                        crates.push(pos);
                    }
                    ' ' | '-' | '_' => {}
                    symbol => return Err(InputErr::ItemSymbol { r, c, symbol }),
                }
            }
        }

        let player_pos = player_pos.ok_or(InputErr::NoPlayer)?;
        Ok(Puzzle {
            grid: Grid::new(cells),
            state: State::new(player_pos, crates)?,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.grid.format_with_state(&self.state)
    }

    pub fn solution<'a>(&'a self, moves: &'a Moves, include_steps: bool) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.grid, &self.state, moves, include_steps)
    }
}

fn check_dimensions<R: AsRef<[char]>>(
    layer: Layer,
    width: usize,
    height: usize,
    data: &[R],
) -> Result<(), InputErr> {
    if data.len() != height {
        return Err(InputErr::RowCount {
            layer,
            found: data.len(),
        });
    }
    for (row, line) in data.iter().enumerate() {
        let found = line.as_ref().len();
        if found != width {
            return Err(InputErr::RowLength { layer, row, found });
        }
    }
    Ok(())
}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let layers = parser::parse_xsb(s)?;
        let puzzle = Puzzle::new(
            layers.width,
            layers.height,
            &layers.map_data,
            &layers.items_data,
        )?;
        Ok(puzzle)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|row| row.chars().collect()).collect()
    }

    #[test]
    fn layers() {
        let map = chars(&["#####", "#  .#", "#####"]);
        let items = chars(&["     ", " @$  ", "     "]);
        let puzzle = Puzzle::new(5, 3, &map, &items).unwrap();
        assert_eq!(puzzle.state().player_pos(), Pos::new(1, 1));
        assert_eq!(puzzle.state().crates(), &[Pos::new(1, 2)]);
        assert_eq!(puzzle.grid().goals(), &[Pos::new(1, 3)]);
        assert_eq!(puzzle.to_string(), "#####\n#@$.#\n#####\n");
    }

    #[test]
    fn no_player() {
        let map = chars(&["###", "#.#", "###"]);
        let items = chars(&["   ", " $ ", "   "]);
        let err = Puzzle::new(3, 3, &map, &items).unwrap_err();
        assert_eq!(err, InputErr::NoPlayer);
        assert_eq!(err.to_string(), "No player");
    }

    #[test]
    fn multiple_players() {
        let map = chars(&["    "]);
        let items = chars(&["@ @ "]);
        assert_eq!(
            Puzzle::new(4, 1, &map, &items).unwrap_err(),
            InputErr::MultiplePlayers
        );
    }

    #[test]
    fn things_on_walls() {
        let map = chars(&["#  "]);
        assert_eq!(
            Puzzle::new(3, 1, &map, &chars(&["@  "])).unwrap_err(),
            InputErr::PlayerOnWall
        );
        assert_eq!(
            Puzzle::new(3, 1, &map, &chars(&["$ @"])).unwrap_err(),
            InputErr::CrateOnWall { r: 0, c: 0 }
        );
    }

    #[test]
    fn dimensions() {
        let map = chars(&["    ", "    "]);
        let items = chars(&["@   ", "    "]);
        assert_eq!(
            Puzzle::new(4, 3, &map, &items).unwrap_err(),
            InputErr::RowCount {
                layer: Layer::Map,
                found: 2
            }
        );
        assert_eq!(
            Puzzle::new(4, 2, &map, &chars(&["@   ", "   "])).unwrap_err(),
            InputErr::RowLength {
                layer: Layer::Items,
                row: 1,
                found: 3
            }
        );
    }

    #[test]
    fn symbols() {
        assert_eq!(
            Puzzle::new(3, 1, &chars(&[" x "]), &chars(&["@  "])).unwrap_err(),
            InputErr::MapSymbol {
                r: 0,
                c: 1,
                symbol: 'x'
            }
        );
        assert_eq!(
            Puzzle::new(3, 1, &chars(&["   "]), &chars(&["@ *"])).unwrap_err(),
            InputErr::ItemSymbol {
                r: 0,
                c: 2,
                symbol: '*'
            }
        );
    }
}
