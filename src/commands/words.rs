//! Word pool listing command

use crate::output::formatters::{WordSection, word_sections};
use crate::wordlists::WordBank;

/// Group the pool for display, optionally keeping a single word length
#[must_use]
pub fn list_words(bank: &WordBank, length: Option<usize>) -> Vec<WordSection> {
    word_sections(&bank.grouped_by_length(), length)
}
