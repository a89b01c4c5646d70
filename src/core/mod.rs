//! Core domain types for the puzzle
//!
//! Pure, testable types: words, tile colors and the coloring algorithm.

mod pattern;
mod word;

pub use pattern::{Color, Pattern};
pub use word::{Word, WordError, normalize_letter};
