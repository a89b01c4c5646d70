//! Display functions for command results

use super::formatters::{WordSection, attempts_label, emoji_grid, tile_text};
use crate::core::{Color, Pattern, Word};
use crate::game::{KEYBOARD_ROWS, KeyboardTracker};
use colored::{ColoredString, Colorize};

/// Paint a tile or key cell in its hint color
#[must_use]
pub fn paint(text: &str, color: Option<Color>) -> ColoredString {
    match color {
        Some(Color::Green) => text.black().on_green().bold(),
        Some(Color::Yellow) => text.black().on_yellow().bold(),
        Some(Color::Gray) => text.white().on_bright_black(),
        None => text.bright_white().bold(),
    }
}

/// Print one revealed row as colored tiles
pub fn print_pattern_row(guess: &Word, pattern: &Pattern) {
    let tiles: String = guess
        .chars()
        .iter()
        .zip(pattern.colors())
        .map(|(&letter, &color)| {
            paint(&tile_text(Some(char::from(letter))), Some(color)).to_string()
        })
        .collect();
    println!("  {tiles}");
}

/// Print the on-screen keyboard with hint colors
pub fn print_keyboard(keys: &KeyboardTracker) {
    println!();
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let cells: Vec<String> = row
            .chars()
            .map(|letter| paint(&letter.to_string(), keys.color_of(letter)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(i), cells.join(" "));
    }
    println!();
}

/// Print the result of checking one guess against one answer
pub fn print_check_result(guess: &Word, answer: &Word, pattern: &Pattern) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking {} against {}",
        guess.display_text().bright_yellow().bold(),
        answer.display_text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!();
    print_pattern_row(guess, pattern);
    println!("\n  {}", pattern.to_emoji());
    println!(
        "  {} green, {} yellow",
        pattern.count_greens().to_string().green(),
        pattern.count_yellows().to_string().yellow()
    );
}

/// Print the end-of-game banner
pub fn print_game_over(solution: &Word, attempts: Option<usize>, max: usize, patterns: &[Pattern]) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if attempts.is_some() {
        println!("{}", "  🎉  S O L V E D !  🎉".bright_green().bold());
    } else {
        println!("{}", "  Out of attempts".red().bold());
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  Correct Answer: {}",
        solution.display_text().bright_yellow().bold()
    );
    println!("  {}\n", attempts_label(attempts, max).bright_cyan());
    for line in emoji_grid(patterns).lines() {
        println!("  {line}");
    }
    println!();
}

/// Print the word listing
pub fn print_word_sections(sections: &[WordSection]) {
    if sections.is_empty() {
        println!("{}", "No words of that length.".yellow());
        return;
    }

    for section in sections {
        println!("\n{}", section.heading.bright_cyan().bold());
        for (initial, words) in &section.by_initial {
            println!("  {}", initial.to_string().bright_blue().bold());
            for word in words {
                println!("    {word}");
            }
        }
    }
}
