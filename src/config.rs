use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crossword::generator::{validate_input, VariantOptions, SWAP_PROBABILITY};
use crate::crossword::search::SearchOptions;
use crate::errors::{GenerateError, Result};

/// Everything a generation run needs. Loaded from JSON, with CLI flags layered on top
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub words: Vec<String>,
    pub height: usize,
    pub width: usize,
    /// Number of solutions to produce. More than one shuffles the word order per run
    pub variants: usize,
    /// Seed for the shuffling, random when unset
    pub seed: Option<u64>,
    pub swap_probability: f64,
    /// Reorder words by shared letters before searching
    pub sort_words: bool,
    pub require_crossing: bool,
    pub parallel_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        let search = SearchOptions::default();
        Self {
            words: Vec::new(),
            height: 10,
            width: 12,
            variants: 1,
            seed: None,
            swap_probability: SWAP_PROBABILITY,
            sort_words: false,
            require_crossing: search.require_crossing,
            parallel_depth: search.parallel_depth,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.variants == 0 {
            return Err(GenerateError::InvalidConfig(
                "variants must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.swap_probability) {
            return Err(GenerateError::InvalidConfig(format!(
                "swap probability {} is outside [0, 1]",
                self.swap_probability
            )));
        }
        validate_input(&self.words, self.height, self.width)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            parallel_depth: self.parallel_depth,
            require_crossing: self.require_crossing,
        }
    }

    pub fn variant_options(&self) -> VariantOptions {
        VariantOptions {
            count: self.variants,
            swap_probability: self.swap_probability,
            search: self.search_options(),
        }
    }
}
