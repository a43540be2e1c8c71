use std::fmt::{self, Display, Formatter};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapCell {
    Wall,
    Floor,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Crate,
    Player,
}

/// Signed so that stepping off the edge of the map is representable
/// and can be rejected by a bounds check instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> i32 {
        (self.r - other.r).abs() + (self.c - other.c).abs()
    }

    pub fn neighbors(self) -> [Pos; 4] {
        [self + Up, self + Down, self + Left, self + Right]
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

use self::Dir::*;

/// Expansion order - changing it changes which of several equally good solutions is found.
pub const DIRECTIONS: [Dir; 4] = [Up, Down, Left, Right];

impl Dir {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub fn to_command(self) -> char {
        match self {
            Up => 'u',
            Down => 'd',
            Left => 'l',
            Right => 'r',
        }
    }

    pub fn from_command(command: char) -> Option<Dir> {
        match command.to_ascii_lowercase() {
            'u' => Some(Up),
            'd' => Some(Down),
            'l' => Some(Left),
            'r' => Some(Right),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_command())
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.delta();
        Pos {
            r: self.r.saturating_add(dr),
            c: self.c.saturating_add(dc),
        }
    }
}
