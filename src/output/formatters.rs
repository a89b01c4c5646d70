//! Formatting utilities for terminal output

use crate::core::{Pattern, Word};
use std::collections::BTreeMap;

/// Format a tile's letter as a padded cell
#[must_use]
pub fn tile_text(letter: Option<char>) -> String {
    format!(" {} ", letter.map_or(' ', |c| c.to_ascii_uppercase()))
}

/// Emoji grid for a finished game, one line per revealed row
#[must_use]
pub fn emoji_grid(patterns: &[Pattern]) -> String {
    patterns
        .iter()
        .map(Pattern::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// "3/6" style attempt counter; `X` when the game was lost
#[must_use]
pub fn attempts_label(used: Option<usize>, max: usize) -> String {
    match used {
        Some(n) => format!("{n}/{max}"),
        None => format!("X/{max}"),
    }
}

/// A section of the word listing: a length heading, then words under initial-letter headings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSection {
    pub heading: String,
    pub by_initial: Vec<(char, Vec<String>)>,
}

/// Lay out grouped words for display, optionally keeping only one length
#[must_use]
pub fn word_sections(groups: &BTreeMap<usize, Vec<&Word>>, only: Option<usize>) -> Vec<WordSection> {
    groups
        .iter()
        .filter(|&(&len, _)| only.is_none_or(|wanted| wanted == len))
        .map(|(&len, words)| {
            let mut by_initial: Vec<(char, Vec<String>)> = Vec::new();
            for word in words {
                let upper = word.display_text();
                let initial = upper.chars().next().unwrap_or(' ');
                if let Some((current, list)) = by_initial.last_mut()
                    && *current == initial
                {
                    list.push(upper);
                    continue;
                }
                by_initial.push((initial, vec![upper]));
            }
            WordSection {
                heading: format!("{len}-Letter Words"),
                by_initial,
            }
        })
        .collect()
}
