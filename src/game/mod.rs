//! Game rules engine
//!
//! The controller state machine plus the pieces it drives: keyboard hints,
//! the reveal timer queue and the tile grid.

mod board;
mod config;
mod controller;
mod keyboard;
mod reveal;

pub use board::{Board, Tile};
pub use config::{
    ConfigError, DEFAULT_FLIP_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_STAGGER_MS, GameConfig,
    RevealTiming,
};
pub use controller::{
    GameController, GameEvent, GameState, InputEvent, Outcome, Phase, SubmitOutcome,
};
pub use keyboard::{KEYBOARD_ROWS, KeyboardTracker};
pub use reveal::{Generation, RevealEvent, RevealSequencer, RevealStep, TileReveal};
