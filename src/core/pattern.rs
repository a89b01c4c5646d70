//! Feedback pattern calculation and representation
//!
//! A pattern holds one color per guessed letter:
//! - Gray: letter not in the solution (or its supply is already used up)
//! - Yellow: letter in the solution, wrong position
//! - Green: letter in the correct position
//!
//! Unlike a fixed five-letter board, patterns here follow the solution's length.

use super::Word;
use std::fmt;
use std::ops::Index;

/// Color verdict for a single tile
///
/// Ordering follows hint strength: `Gray < Yellow < Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Gray,
    Yellow,
    Green,
}

impl Color {
    /// Hint priority used for keyboard upgrades (gray 1, yellow 2, green 3)
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Gray => 1,
            Self::Yellow => 2,
            Self::Green => 3,
        }
    }

    /// Lowercase name, as used by style classes
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }

    /// Emoji square for sharing
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Gray => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feedback pattern for one submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Color>);

impl Pattern {
    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Both words are expected to have the same length; positions past the end
    /// of `answer` can only ever be yellow or gray.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches green and consume those answer letters
    /// 2. Count the answer letters left unconsumed
    /// 3. Second pass, left to right: a non-green letter with remaining supply is
    ///    yellow and uses one unit of supply, otherwise gray
    ///
    /// # Examples
    /// ```
    /// use wordle_reveal::core::{Color, Pattern, Word};
    ///
    /// let guess = Word::new("eagle").unwrap();
    /// let answer = Word::new("allee").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// use Color::{Gray, Green, Yellow};
    /// assert_eq!(pattern.colors(), &[Yellow, Yellow, Gray, Yellow, Green]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        let mut result = vec![Color::Gray; guess.len()];
        let mut answer_available = answer.char_counts();

        // First pass: greens take their letter out of the pool
        for (i, &letter) in guess.chars().iter().enumerate() {
            if answer.chars().get(i) == Some(&letter) {
                result[i] = Color::Green;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: leftmost occurrences claim yellow first
        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == Color::Green {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Color::Yellow;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Colors in tile order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == Color::Green)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&c| c == Color::Green).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&c| c == Color::Yellow).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// Any length is accepted except empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_reveal::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-G").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let colors = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(Color::Green),
                'Y' | 'y' | '🟨' => Some(Color::Yellow),
                '-' | '_' | '⬜' => Some(Color::Gray),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        (!colors.is_empty()).then_some(Self(colors))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_reveal::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl Index<usize> for Pattern {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
