use fst::{Set, SetBuilder};

use crate::errors::Result;

/// Lookup set of words that perpendicular runs are checked against. Kept apart from
/// the placement order so callers can accept crossings the order never places
pub struct Vocabulary {
    set: Set<Vec<u8>>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // fst wants keys in byte order with no repeats
        let mut words = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>();
        words.sort_unstable();
        words.dedup();

        let mut build = SetBuilder::memory();
        build.extend_iter(words)?;
        Ok(Self {
            set: build.into_set(),
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
