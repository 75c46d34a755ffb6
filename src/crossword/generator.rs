use ndarray_rand::rand_distr::{Bernoulli, Distribution};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::search::{SearchOptions, Searcher};
use super::util::Placement;
use super::vocab::Vocabulary;
use crate::errors::{GenerateError, Result};

/// Chance that a neighbouring pair of words trades places between variants
pub const SWAP_PROBABILITY: f64 = 0.3;

/// Outcome of one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Crossings formed while placing the words
    pub score: u32,
    pub grid: Grid,
    /// Words in the order they were placed
    pub words: Vec<String>,
    /// Placement of each word, empty when no complete arrangement exists
    pub placements: Vec<Placement>,
}

impl Solution {
    /// The result reported when no branch places every word
    pub fn empty(height: usize, width: usize, words: Vec<String>) -> Self {
        Self {
            score: 0,
            grid: Grid::new(height, width),
            words,
            placements: Vec::new(),
        }
    }

    /// Distinguishes a real zero-crossing arrangement from a failed search
    pub fn is_complete(&self) -> bool {
        !self.placements.is_empty() && self.placements.len() == self.words.len()
    }

    /// Each word next to where it was placed
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Placement)> {
        self.words
            .iter()
            .map(|w| w.as_str())
            .zip(self.placements.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantOptions {
    /// Number of solutions to produce
    pub count: usize,
    /// Chance of swapping each neighbouring pair before a run
    pub swap_probability: f64,
    pub search: SearchOptions,
}

impl Default for VariantOptions {
    fn default() -> Self {
        Self {
            count: 1,
            swap_probability: SWAP_PROBABILITY,
            search: SearchOptions::default(),
        }
    }
}

/// Rejects requests that can never produce a grid, before any searching happens
pub fn validate_input<S: AsRef<str>>(words: &[S], height: usize, width: usize) -> Result<()> {
    if words.is_empty() {
        return Err(GenerateError::EmptyWordList);
    }
    if height == 0 || width == 0 {
        return Err(GenerateError::InvalidDimensions { height, width });
    }
    for (index, word) in words.iter().enumerate() {
        let len = word.as_ref().chars().count();
        if len == 0 {
            return Err(GenerateError::EmptyWord { index });
        }
        if len > height && len > width {
            return Err(GenerateError::WordTooLong {
                word: word.as_ref().to_string(),
                height,
                width,
            });
        }
    }
    Ok(())
}

/// Finds the arrangement of `words` with the most crossings. The same list is used
/// both as the placement order and as the vocabulary crossings are checked against
pub fn generate<S: AsRef<str>>(words: &[S], height: usize, width: usize) -> Result<Solution> {
    validate_input(words, height, width)?;
    let order = words
        .iter()
        .map(|w| w.as_ref().to_string())
        .collect::<Vec<_>>();
    let vocab = Vocabulary::new(&order)?;
    Ok(search_order(&order, &vocab, height, width, SearchOptions::default()))
}

/// Core entry point with the placement order and the crossing vocabulary kept apart
pub fn generate_with(
    order: &[String],
    vocab: &Vocabulary,
    height: usize,
    width: usize,
    options: SearchOptions,
) -> Result<Solution> {
    validate_input(order, height, width)?;
    Ok(search_order(order, vocab, height, width, options))
}

/// Searches one word order. Callers validate the request first
fn search_order(
    order: &[String],
    vocab: &Vocabulary,
    height: usize,
    width: usize,
    options: SearchOptions,
) -> Solution {
    let searcher = Searcher::new(order, vocab, options);
    match searcher.search(height, width) {
        Some(best) => Solution {
            score: best.score,
            grid: best.grid,
            words: order.to_vec(),
            placements: best.placements,
        },
        None => {
            log::warn!(
                "No complete placement of {} words on a {}x{} grid",
                order.len(),
                height,
                width
            );
            Solution::empty(height, width, order.to_vec())
        }
    }
}

/// Produces `count` solutions. The first uses `words` as given, later ones shuffle the
/// word order a little before each run
pub fn generate_many<S, R>(
    words: &[S],
    height: usize,
    width: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Solution>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let order = words
        .iter()
        .map(|w| w.as_ref().to_string())
        .collect::<Vec<_>>();
    let options = VariantOptions {
        count,
        ..VariantOptions::default()
    };
    generate_variants(&order, height, width, &options, rng)
}

/// Runs the search once per variant. The first variant keeps the given order, and
/// each later one perturbs the order the previous variant used
pub fn generate_variants<R: Rng + ?Sized>(
    words: &[String],
    height: usize,
    width: usize,
    options: &VariantOptions,
    rng: &mut R,
) -> Result<Vec<Solution>> {
    validate_input(words, height, width)?;
    let coin = Bernoulli::new(options.swap_probability)
        .map_err(|e| GenerateError::InvalidConfig(format!("swap probability: {}", e)))?;
    let vocab = Vocabulary::new(words)?;

    let mut order = words.to_vec();
    let mut solutions = Vec::with_capacity(options.count);
    for i in 0..options.count {
        if i > 0 {
            perturb(&mut order, &coin, rng);
        }
        log::debug!("Variant {}: {:?}", i, order);
        solutions.push(search_order(&order, &vocab, height, width, options.search));
    }
    Ok(solutions)
}

/// Walks the pairs (0, 1), (2, 3), ... and swaps each one when the coin comes up
pub fn perturb<T, R: Rng + ?Sized>(order: &mut [T], coin: &Bernoulli, rng: &mut R) {
    for i in (0..order.len().saturating_sub(1)).step_by(2) {
        if coin.sample(rng) {
            order.swap(i, i + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray_rand::rand_distr::Bernoulli;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{
        generate, generate_many, generate_variants, perturb, validate_input, Solution,
        VariantOptions,
    };
    use crate::errors::GenerateError;

    #[test]
    fn test_validate_input() {
        assert!(matches!(
            validate_input::<&str>(&[], 3, 3),
            Err(GenerateError::EmptyWordList)
        ));
        assert!(matches!(
            validate_input(&["cat"], 0, 3),
            Err(GenerateError::InvalidDimensions { height: 0, width: 3 })
        ));
        assert!(matches!(
            validate_input(&["cat", ""], 3, 3),
            Err(GenerateError::EmptyWord { index: 1 })
        ));
        assert!(matches!(
            validate_input(&["hello"], 2, 4),
            Err(GenerateError::WordTooLong { .. })
        ));
        // Fits one way, that is enough to start searching
        assert!(validate_input(&["hello"], 1, 5).is_ok());
    }

    #[test]
    fn test_generate_single_word() {
        let solution = generate(&["hello"], 1, 5).unwrap();
        assert!(solution.is_complete());
        assert_eq!(solution.score, 0);
        assert_eq!(solution.grid.rows(), vec!["hello"]);
        assert_eq!(solution.grid.to_string(), "|h|e|l|l|o|\n");
    }

    #[test]
    fn test_generate_infeasible() {
        let solution = generate(&["cat", "dog"], 1, 3).unwrap();
        assert!(!solution.is_complete());
        assert_eq!(solution, Solution::empty(1, 3, vec!["cat".into(), "dog".into()]));
        assert!(solution.grid.is_empty());
    }

    #[test]
    fn test_perturb_certain_and_never() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut order = vec![1, 2, 3, 4, 5];
        perturb(&mut order, &Bernoulli::new(1.0).unwrap(), &mut rng);
        assert_eq!(order, vec![2, 1, 4, 3, 5]);

        let mut order = vec![1, 2, 3, 4, 5];
        perturb(&mut order, &Bernoulli::new(0.0).unwrap(), &mut rng);
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_generate_many() {
        let mut rng = StdRng::seed_from_u64(42);
        let solutions = generate_many(&["cat", "tar", "rat"], 3, 3, 4, &mut rng).unwrap();
        assert_eq!(solutions.len(), 4);
        for solution in &solutions {
            assert!(solution.is_complete());
            assert_eq!(solution.score, 2);
            let mut words = solution.words.clone();
            words.sort();
            assert_eq!(words, vec!["cat", "rat", "tar"]);
        }

        let mut rng = StdRng::seed_from_u64(42);
        let again = generate_many(&["cat", "tar", "rat"], 3, 3, 4, &mut rng).unwrap();
        assert_eq!(solutions, again);
    }

    #[test]
    fn test_first_variant_keeps_order() {
        let list = ["cat", "tar", "rat"];
        let single = generate(&list, 3, 3).unwrap();

        // Even a coin that always swaps leaves the first variant alone
        let options = VariantOptions {
            count: 2,
            swap_probability: 1.0,
            ..VariantOptions::default()
        };
        let order = list.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(1);
        let solutions = generate_variants(&order, 3, 3, &options, &mut rng).unwrap();
        assert_eq!(solutions[0], single);
        assert_eq!(solutions[1].words, vec!["tar", "cat", "rat"]);
    }

    #[test]
    fn test_duplicate_word_needs_its_own_cells() {
        // The twin may not be laid over the copy already placed
        let solution = generate(&["ab", "ab"], 1, 2).unwrap();
        assert!(!solution.is_complete());
        assert!(solution.grid.is_empty());

        let solution = generate(&["ab", "ab"], 1, 5).unwrap();
        assert!(solution.is_complete());
        assert_eq!(solution.score, 0);
        assert_eq!(solution.grid.rows(), vec!["ab ab"]);
    }
}
