//! Terminal output formatting
//!
//! Display utilities for line-mode play and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_game_over, print_keyboard, print_pattern_row, print_word_sections,
};
