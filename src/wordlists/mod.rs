//! Word lists and the solution pool
//!
//! Provides the embedded answer list compiled into the binary, file loading,
//! and the [`WordBank`] that picks each game's solution.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{FALLBACK_SOLUTION, WordBank};
pub use embedded::{ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert!(!word.is_empty(), "Empty entry in answer list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_pool_deduplicates() {
        // The shipped list repeats one surname
        let bank = WordBank::with_seed(loader::words_from_slice(ANSWERS), 0);
        assert_eq!(bank.len(), ANSWERS_COUNT - 1);
    }

    #[test]
    fn embedded_pool_has_mixed_lengths() {
        let bank = WordBank::with_seed(loader::words_from_slice(ANSWERS), 0);
        let groups = bank.grouped_by_length();
        assert!(groups.len() > 1);
        assert_eq!(groups.keys().next(), Some(&4));
    }
}
