//! Word Puzzle Engine
//!
//! Rules engine for a word-guessing puzzle: duplicate-aware tile coloring,
//! keyboard hints, a bounded-attempt state machine and a timed, staggered
//! reveal of each submitted row driven by a virtual clock.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_reveal::core::{Color, Pattern, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &answer);
//! assert!(pattern.colors().iter().all(|&c| c == Color::Green));
//! ```

// Core domain types
pub mod core;

// Game state machine and reveal sequencing
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
