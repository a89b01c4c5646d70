//! Keyboard hint colors
//!
//! Tracks the best color seen for each letter across every revealed row.

use crate::core::Color;
use rustc_hash::FxHashMap;

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best-known color per letter, keyed by uppercase letter
///
/// Entries only ever upgrade (`Gray < Yellow < Green`) until [`KeyboardTracker::reset`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyboardTracker {
    colors: FxHashMap<u8, Color>,
}

impl KeyboardTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `color` for `letter` if it beats the stored hint
    ///
    /// Returns true when the stored color changed. Non-letters are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_reveal::core::Color;
    /// use wordle_reveal::game::KeyboardTracker;
    ///
    /// let mut keys = KeyboardTracker::new();
    /// keys.upgrade_key_color('A', Color::Yellow);
    /// keys.upgrade_key_color('a', Color::Gray);
    /// assert_eq!(keys.color_of('A'), Some(Color::Yellow));
    /// ```
    pub fn upgrade_key_color(&mut self, letter: char, color: Color) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        let key = letter.to_ascii_uppercase() as u8;

        match self.colors.get(&key) {
            Some(current) if current.priority() >= color.priority() => false,
            _ => {
                self.colors.insert(key, color);
                true
            }
        }
    }

    /// Current hint for a letter (either case)
    #[must_use]
    pub fn color_of(&self, letter: char) -> Option<Color> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.colors
            .get(&(letter.to_ascii_uppercase() as u8))
            .copied()
    }

    /// Snapshot sorted by letter, for rendering
    #[must_use]
    pub fn snapshot(&self) -> Vec<(char, Color)> {
        let mut entries: Vec<(char, Color)> = self
            .colors
            .iter()
            .map(|(&key, &color)| (char::from(key), color))
            .collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Forget all hints (new game)
    pub fn reset(&mut self) {
        self.colors.clear();
    }
}
