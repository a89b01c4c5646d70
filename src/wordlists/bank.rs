//! Candidate solution pool
//!
//! Holds the deduplicated answer words and picks one uniformly at random per game.

use crate::core::Word;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Solution used when the pool is empty
pub const FALLBACK_SOLUTION: &str = "apple";

/// Pool of candidate solutions with its own random source
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    rng: StdRng,
}

impl WordBank {
    /// Create a bank seeded from the operating system
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a bank with a fixed seed for reproducible games
    #[must_use]
    pub fn with_seed(words: impl IntoIterator<Item = Word>, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: impl IntoIterator<Item = Word>, rng: StdRng) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self { words, rng }
    }

    /// Pick a solution uniformly at random
    ///
    /// An empty pool is not an error: the fixed [`FALLBACK_SOLUTION`] is returned.
    ///
    /// # Panics
    /// Will not panic - the fallback word is a valid constant.
    ///
    /// # Examples
    /// ```
    /// use wordle_reveal::wordlists::WordBank;
    ///
    /// let mut empty = WordBank::with_seed(Vec::new(), 7);
    /// assert_eq!(empty.select_solution().text(), "apple");
    /// ```
    pub fn select_solution(&mut self) -> Word {
        match self.words.choose(&mut self.rng) {
            Some(word) => word.clone(),
            None => Word::new(FALLBACK_SOLUTION).expect("fallback solution is a valid word"),
        }
    }

    /// Deduplicated words in insertion order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words grouped by length, shortest first, each group sorted alphabetically
    #[must_use]
    pub fn grouped_by_length(&self) -> BTreeMap<usize, Vec<&Word>> {
        let mut groups: BTreeMap<usize, Vec<&Word>> = BTreeMap::new();
        for word in &self.words {
            groups.entry(word.len()).or_default().push(word);
        }
        for group in groups.values_mut() {
            group.sort();
        }
        groups
    }
}
