//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, KeyAction, key_action, run_tui};
