use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::placement::score_placement;
use super::util::{Direction, Placement, Position};
use super::vocab::Vocabulary;

/// Orientations in the order they are tried. Together with row-major cell order this
/// fixes which of several equally scored branches wins
const ORIENTATIONS: [Direction; 2] = [Direction::Down, Direction::Across];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Sibling candidates at depths below this are explored on the rayon pool
    pub parallel_depth: usize,
    /// Every word after the first has to cross at least one other word
    pub require_crossing: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            parallel_depth: 1,
            require_crossing: false,
        }
    }
}

/// One node of the search. Each state owns its grid so sibling branches never see
/// each other's letters
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Index of the next word to place
    pub index: usize,
    pub grid: Grid,
    /// Crossings formed so far
    pub score: u32,
    pub placements: Vec<Placement>,
}

impl SearchState {
    pub fn start(height: usize, width: usize) -> Self {
        Self {
            index: 0,
            grid: Grid::new(height, width),
            score: 0,
            placements: Vec::new(),
        }
    }

    /// Every legal child of this state for `word`, in enumeration order
    fn children<'s>(
        &'s self,
        word: &'s str,
        vocab: &'s Vocabulary,
        require_crossing: bool,
    ) -> impl Iterator<Item = SearchState> + 's {
        let height = self.grid.height();
        let width = self.grid.width();

        ORIENTATIONS
            .into_iter()
            .flat_map(move |dir| {
                (0..height).flat_map(move |row| {
                    (0..width).map(move |col| Placement::new(Position::new(row, col), dir))
                })
            })
            .filter_map(move |placement| {
                let score = score_placement(&self.grid, word, placement, vocab)?;
                // The first word has nothing to cross yet
                if require_crossing && self.index > 0 && score == 0 {
                    return None;
                }
                Some(self.advance(word, placement, score))
            })
    }

    /// Child state with `word` committed at `placement`
    fn advance(&self, word: &str, placement: Placement, score: u32) -> Self {
        let mut grid = self.grid.clone();
        grid.place_word(word, placement);
        let mut placements = self.placements.clone();
        placements.push(placement);
        Self {
            index: self.index + 1,
            grid,
            score: self.score + score,
            placements,
        }
    }
}

/// Exhaustive search over every (orientation, row, column) for each word in turn
pub struct Searcher<'a> {
    /// Words in placement order
    words: &'a [String],
    /// Words a perpendicular run is allowed to spell
    vocab: &'a Vocabulary,
    options: SearchOptions,
    explored: AtomicUsize,
}

impl<'a> Searcher<'a> {
    pub fn new(words: &'a [String], vocab: &'a Vocabulary, options: SearchOptions) -> Self {
        Self {
            words,
            vocab,
            options,
            explored: AtomicUsize::new(0),
        }
    }

    /// Runs the search on an empty `height` x `width` grid. Returns the best terminal
    /// state, or None when no branch manages to place every word
    pub fn search(&self, height: usize, width: usize) -> Option<SearchState> {
        log::debug!(
            "Searching {}x{} grid for {} words",
            height,
            width,
            self.words.len()
        );
        let best = self.find_optimal(SearchState::start(height, width));
        log::debug!(
            "Explored {} states, best score {:?}",
            self.explored(),
            best.as_ref().map(|s| s.score)
        );
        best
    }

    /// Number of search states visited so far
    pub fn explored(&self) -> usize {
        self.explored.load(Ordering::Relaxed)
    }

    fn find_optimal(&self, state: SearchState) -> Option<SearchState> {
        self.explored.fetch_add(1, Ordering::Relaxed);
        // If we placed all our words this branch is done
        if state.index >= self.words.len() {
            return Some(state);
        }

        let word = self.words[state.index].as_str();
        let children = state.children(word, self.vocab, self.options.require_crossing);
        if state.index < self.options.parallel_depth {
            // Collecting keeps enumeration order, so the reduction below picks the same
            // branch the sequential walk would
            let children = children.collect::<Vec<_>>();
            children
                .into_par_iter()
                .map(|child| self.find_optimal(child))
                .collect::<Vec<_>>()
                .into_iter()
                .fold(None, Self::select)
        } else {
            children
                .map(|child| self.find_optimal(child))
                .fold(None, Self::select)
        }
    }

    /// Keeps the incumbent unless the challenger scores strictly higher
    fn select(best: Option<SearchState>, next: Option<SearchState>) -> Option<SearchState> {
        match (best, next) {
            (Some(b), Some(n)) if n.score > b.score => Some(n),
            (Some(b), _) => Some(b),
            (None, n) => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchOptions, Searcher};
    use crate::crossword::util::{Direction, Placement, Position};
    use crate::crossword::vocab::Vocabulary;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_two_by_two() {
        let order = words(&["ab", "ba"]);
        let vocab = Vocabulary::new(&order).unwrap();
        let searcher = Searcher::new(&order, &vocab, SearchOptions::default());

        let best = searcher.search(2, 2).unwrap();
        assert_eq!(best.score, 2);
        assert_eq!(best.grid.rows(), vec!["ab", "ba"]);
        assert_eq!(
            best.placements,
            vec![
                Placement::new(Position::new(0, 0), Direction::Down),
                Placement::new(Position::new(0, 1), Direction::Down),
            ]
        );
        assert!(searcher.explored() > 1);
    }

    #[test]
    fn test_crossing_not_required_by_default() {
        let order = words(&["cat", "dog"]);
        let vocab = Vocabulary::new(&order).unwrap();

        let best = Searcher::new(&order, &vocab, SearchOptions::default())
            .search(3, 3)
            .unwrap();
        assert_eq!(best.score, 0);
        assert_eq!(best.grid.rows(), vec!["c d", "a o", "t g"]);

        let connected = SearchOptions {
            require_crossing: true,
            ..SearchOptions::default()
        };
        assert!(Searcher::new(&order, &vocab, connected).search(3, 3).is_none());
    }

    #[test]
    fn test_tie_keeps_first_found() {
        let order = words(&["cat", "car"]);
        let vocab = Vocabulary::new(&order).unwrap();

        let best = Searcher::new(&order, &vocab, SearchOptions::default())
            .search(3, 3)
            .unwrap();
        assert_eq!(best.score, 1);
        assert_eq!(
            best.placements,
            vec![
                Placement::new(Position::new(0, 0), Direction::Down),
                Placement::new(Position::new(0, 0), Direction::Across),
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let order = words(&["cat", "tar", "rat"]);
        let vocab = Vocabulary::new(&order).unwrap();

        let sequential = SearchOptions {
            parallel_depth: 0,
            ..SearchOptions::default()
        };
        let parallel = SearchOptions {
            parallel_depth: 3,
            ..SearchOptions::default()
        };

        let a = Searcher::new(&order, &vocab, sequential).search(3, 3).unwrap();
        let b = Searcher::new(&order, &vocab, parallel).search(3, 3).unwrap();
        assert_eq!(a.score, 2);
        assert_eq!(a.score, b.score);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.placements, b.placements);
        assert_eq!(a.grid.rows(), vec!["t c", "a a", "rat"]);
    }

    #[test]
    fn test_no_completion() {
        let order = words(&["cat", "dog"]);
        let vocab = Vocabulary::new(&order).unwrap();

        assert!(Searcher::new(&order, &vocab, SearchOptions::default())
            .search(1, 3)
            .is_none());
    }
}
