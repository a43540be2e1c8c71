use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::puzzle::InputErr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    Empty,
    Input(InputErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::Empty => write!(f, "Empty level"),
            ParserErr::Input(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<InputErr> for ParserErr {
    fn from(err: InputErr) -> Self {
        ParserErr::Input(err)
    }
}

/// The two grids the solver takes as input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layers {
    pub width: usize,
    pub height: usize,
    pub map_data: Vec<Vec<char>>,
    pub items_data: Vec<Vec<char>>,
}

/// Splits (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
/// into a map layer and an items layer. Shorter lines are padded with floor.
pub fn parse_xsb(level: &str) -> Result<Layers, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    // (only newlines - trailing spaces can be floor)
    let level = level.trim_matches(|c: char| c == '\n' || c == '\r');
    if level.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut map_data = Vec::new();
    let mut items_data = Vec::new();

    for (r, line) in level.lines().enumerate() {
        let mut map_row = Vec::new();
        let mut items_row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let (cell, item) = match cur_char {
                '#' => ('#', ' '),
                ' ' | '-' | '_' => (' ', ' '),
                '.' => ('.', ' '),
                '@' | 'p' => (' ', '@'),
                '+' | 'P' => ('.', '@'),
                '$' | 'b' => (' ', '$'),
                '*' | 'B' => ('.', '$'),
                _ => return Err(ParserErr::Pos(r, c)),
            };
            map_row.push(cell);
            items_row.push(item);
        }
        map_data.push(map_row);
        items_data.push(items_row);
    }

    let width = map_data.iter().map(Vec::len).max().unwrap_or(0);
    for row in map_data.iter_mut().chain(items_data.iter_mut()) {
        row.resize(width, ' ');
    }

    Ok(Layers {
        width,
        height: map_data.len(),
        map_data,
        items_data,
    })
}
