use std::slice::Iter;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 2] = [Direction::Across, Direction::Down];
        DIRS.iter()
    }

    pub fn flip(&self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Slot used for per-direction bookkeeping in the grid
    pub fn as_index(&self) -> usize {
        match self {
            Self::Across => 0,
            Self::Down => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the next position in the given direction. Positions are not bounded
    /// here, the grid decides whether the result is on the board
    pub fn next(&self, dir: Direction) -> Position {
        let mut p = *self;
        p[dir] += 1;
        p
    }

    /// Returns the previous position in the given direction, or None when we would
    /// step off the top/left edge
    pub fn prev(&self, dir: Direction) -> Option<Position> {
        let mut p = *self;
        p[dir] = p[dir].checked_sub(1)?;
        Some(p)
    }

    /// Moves the position forward a fixed number of steps
    pub fn step_n(&self, n: usize, dir: Direction) -> Position {
        let mut p = *self;
        p[dir] += n;
        p
    }

    /// Walks forward from (but not including) this position
    pub fn iter_next(&self, dir: Direction) -> impl Iterator<Item = Position> {
        std::iter::successors(Some(self.next(dir)), move |p| Some(p.next(dir)))
    }

    /// Walks backward from (but not including) this position until the edge of the board
    pub fn iter_prev(&self, dir: Direction) -> impl Iterator<Item = Position> {
        std::iter::successors(self.prev(dir), move |p| p.prev(dir))
    }
}

impl std::ops::Index<Direction> for Position {
    type Output = usize;

    fn index(&self, index: Direction) -> &Self::Output {
        match index {
            Direction::Across => &self.col,
            Direction::Down => &self.row,
        }
    }
}

impl std::ops::IndexMut<Direction> for Position {
    fn index_mut(&mut self, index: Direction) -> &mut Self::Output {
        match index {
            Direction::Across => &mut self.col,
            Direction::Down => &mut self.row,
        }
    }
}

/// Start cell and orientation of a single word on the grid. Which word it belongs
/// to is implied by its index in the placement order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub pos: Position,
    pub dir: Direction,
}

impl Placement {
    pub fn new(pos: Position, dir: Direction) -> Self {
        Self { pos, dir }
    }

    /// Pairs every letter of `word` with the cell it lands on
    pub fn iter<'a>(&self, word: &'a str) -> IterPlacement<'a> {
        IterPlacement {
            placement: *self,
            chars: word.chars(),
            curr: 0,
        }
    }
}

pub struct IterPlacement<'a> {
    placement: Placement,
    chars: std::str::Chars<'a>,
    curr: usize,
}

impl<'a> Iterator for IterPlacement<'a> {
    type Item = (Position, char);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        let p = self.placement.pos.step_n(self.curr, self.placement.dir);
        self.curr += 1;
        Some((p, c))
    }
}
