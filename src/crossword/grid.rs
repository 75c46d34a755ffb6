use std::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::util::{Direction, Placement, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Letter(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Actual letters on the board
    state: Array2<Tile>,
    /// Whether a committed word already runs through the cell, per direction
    covered: Array2<[bool; 2]>,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            state: Array2::from_elem((height, width), Tile::Empty),
            covered: Array2::from_elem((height, width), [false; 2]),
        }
    }

    pub fn height(&self) -> usize {
        self.state.nrows()
    }

    pub fn width(&self) -> usize {
        self.state.ncols()
    }

    /// Number of cells along the given direction
    pub fn extent(&self, dir: Direction) -> usize {
        match dir {
            Direction::Across => self.width(),
            Direction::Down => self.height(),
        }
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width()
    }

    /// Letter at the given cell. Off-grid cells read as empty
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        match self.state.get((row, col)) {
            Some(Tile::Letter(l)) => Some(*l),
            _ => None,
        }
    }

    /// Writes a single letter. Panics when the cell is off the grid
    pub fn set(&mut self, row: usize, col: usize, letter: char) {
        self.state[[row, col]] = Tile::Letter(letter);
    }

    pub fn letter(&self, pos: Position) -> Option<char> {
        self.get(pos.row, pos.col)
    }

    /// Checks if the tile at the given position holds a letter
    pub fn is_letter(&self, pos: Position) -> bool {
        self.letter(pos).is_some()
    }

    /// Checks if a word running in `dir` has already been committed through this cell
    pub fn is_covered(&self, pos: Position, dir: Direction) -> bool {
        match self.covered.get((pos.row, pos.col)) {
            Some(slots) => slots[dir.as_index()],
            None => false,
        }
    }

    /// Places the word on the board. Assumes the placement has already been validated,
    /// so the only letters it may meet are identical ones
    pub fn place_word(&mut self, word: &str, placement: Placement) {
        for (pos, c) in placement.iter(word) {
            if let Some(l) = self.letter(pos) {
                assert!(l == c, "Placement would overwrite the current letter");
            }
            self.set(pos.row, pos.col, c);
            self.covered[[pos.row, pos.col]][placement.dir.as_index()] = true;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state.iter().all(|t| *t == Tile::Empty)
    }

    /// Each row as text, blanks for empty cells
    pub fn rows(&self) -> Vec<String> {
        self.state
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|t| match t {
                        Tile::Letter(l) => *l,
                        Tile::Empty => ' ',
                    })
                    .collect::<String>()
            })
            .collect()
    }

    /// Every maximal run of two or more letters, along both directions
    pub fn runs(&self) -> Vec<(Placement, String)> {
        let mut runs = Vec::new();
        for &dir in Direction::iter() {
            for line in 0..self.extent(dir.flip()) {
                let mut start = Position::new(0, 0);
                start[dir.flip()] = line;

                // One step past the end so a run touching the edge is flushed too
                let mut head: Option<Position> = None;
                let mut text = String::new();
                for k in 0..=self.extent(dir) {
                    let pos = start.step_n(k, dir);
                    match self.letter(pos) {
                        Some(l) => {
                            head.get_or_insert(pos);
                            text.push(l);
                        }
                        None => {
                            let run = std::mem::take(&mut text);
                            if let Some(h) = head.take() {
                                if run.chars().count() > 1 {
                                    runs.push((Placement::new(h, dir), run));
                                }
                            }
                        }
                    }
                }
            }
        }
        runs
    }

    /// Counts letter cells that sit on both a horizontal and a vertical run
    pub fn count_crossings(&self) -> usize {
        let mut crossings = 0;
        for row in 0..self.height() {
            for col in 0..self.width() {
                let pos = Position::new(row, col);
                if !self.is_letter(pos) {
                    continue;
                }

                let in_run = |dir: Direction| {
                    self.is_letter(pos.next(dir))
                        || pos.prev(dir).map_or(false, |p| self.is_letter(p))
                };
                if in_run(Direction::Across) && in_run(Direction::Down) {
                    crossings += 1;
                }
            }
        }
        crossings
    }
}

impl std::ops::Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, index: Position) -> &Self::Output {
        &self.state[[index.row, index.col]]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "|")?;
            for c in row.chars() {
                write!(f, "{}|", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, Tile};
    use crate::crossword::util::{Direction, Placement, Position};

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert!(grid.is_empty());
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.get(5, 5), None);
        assert!(!grid.in_bounds(2, 0));
        assert!(grid.in_bounds(1, 2));
    }

    #[test]
    fn test_place_word() {
        let mut grid = Grid::new(3, 3);
        grid.place_word("cat", Placement::new(Position::new(0, 0), Direction::Down));
        grid.place_word("car", Placement::new(Position::new(0, 0), Direction::Across));

        assert_eq!(grid.rows(), vec!["car", "a  ", "t  "]);
        assert_eq!(grid[Position::new(2, 0)], Tile::Letter('t'));
        assert!(grid.is_covered(Position::new(0, 0), Direction::Down));
        assert!(grid.is_covered(Position::new(0, 0), Direction::Across));
        assert!(!grid.is_covered(Position::new(1, 0), Direction::Across));
    }

    #[test]
    #[should_panic]
    fn test_place_word_conflict() {
        let mut grid = Grid::new(1, 3);
        grid.place_word("cat", Placement::new(Position::new(0, 0), Direction::Across));
        grid.place_word("dog", Placement::new(Position::new(0, 0), Direction::Across));
    }

    #[test]
    fn test_runs_and_crossings() {
        let mut grid = Grid::new(3, 3);
        grid.place_word("cat", Placement::new(Position::new(0, 0), Direction::Down));
        grid.place_word("tar", Placement::new(Position::new(2, 0), Direction::Across));

        let runs = grid.runs();
        assert_eq!(
            runs,
            vec![
                (
                    Placement::new(Position::new(2, 0), Direction::Across),
                    "tar".to_string()
                ),
                (
                    Placement::new(Position::new(0, 0), Direction::Down),
                    "cat".to_string()
                ),
            ]
        );
        assert_eq!(grid.count_crossings(), 1);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2, 3);
        grid.set(0, 0, 'a');
        grid.set(1, 2, 'b');
        assert_eq!(grid.to_string(), "|a| | |\n| | |b|\n");
    }
}
