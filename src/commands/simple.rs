//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is a whole guess, and reveals
//! are skipped straight to their end.

use crate::game::{GameController, GameEvent, InputEvent, SubmitOutcome};
use crate::output::{print_game_over, print_keyboard, print_pattern_row};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Guess(String),
}

fn parse_command(input: &str) -> Command {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" | "reset" => Command::NewGame,
        other => Command::Guess(other.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut GameController) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Puzzle - Line Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a whole guess and press Enter.");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    announce(game);

    loop {
        print!(
            "Guess {}/{}: ",
            game.state().current_row + 1,
            game.config().max_attempts
        );
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.map_err(|e| e.to_string())?;

        match parse_command(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                game.reset();
                game.drain_events();
                announce(game);
            }
            Command::Guess(guess) => {
                if !play_guess(game, &guess) {
                    continue;
                }
                if !ask_play_again(&mut lines)? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                announce(game);
            }
        }
    }
}

fn announce(game: &GameController) {
    println!(
        "🔄 New game: {} letters, {} attempts\n",
        game.word_len().to_string().bright_cyan().bold(),
        game.config().max_attempts
    );
}

/// Enter one guess; returns true when the game ended
fn play_guess(game: &mut GameController, guess: &str) -> bool {
    let word_len = game.word_len();
    if guess.chars().count() > word_len || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("❌ Enter exactly {word_len} letters\n");
        return false;
    }

    for ch in guess.chars() {
        game.handle_input(InputEvent::Letter(ch));
    }

    match game.submit() {
        SubmitOutcome::Accepted(_) => {}
        SubmitOutcome::Rejected => {
            println!("❌ Enter exactly {word_len} letters\n");
            while game.backspace() {}
            game.drain_events();
            return false;
        }
        SubmitOutcome::Ignored => return false,
    }

    let mut finished = false;
    for event in game.finish_reveal() {
        match event {
            GameEvent::RowRevealed { row, pattern, .. } => {
                if let Some(word) = game.board().row_word(row) {
                    print_pattern_row(&word, &pattern);
                }
                print_keyboard(game.keyboard());
            }
            GameEvent::Won { solution, attempts } => {
                print_game_over(
                    &solution,
                    Some(attempts),
                    game.config().max_attempts,
                    game.patterns(),
                );
                finished = true;
            }
            GameEvent::Lost { solution } => {
                print_game_over(&solution, None, game.config().max_attempts, game.patterns());
                finished = true;
            }
            _ => {}
        }
    }

    if finished {
        game.reset();
        game.drain_events();
    }
    finished
}

fn ask_play_again<B: BufRead>(lines: &mut io::Lines<B>) -> Result<bool, String> {
    print!("Play again? (yes/no): ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    match lines.next() {
        Some(line) => {
            let answer = line.map_err(|e| e.to_string())?;
            Ok(matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Phase};
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;

    fn game(solution: &str) -> GameController {
        let bank = WordBank::with_seed(words_from_slice(&[solution]), 0);
        GameController::new(bank, GameConfig::default()).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command(" QUIT "), Command::Quit);
        assert_eq!(parse_command("n"), Command::NewGame);
        assert_eq!(parse_command("Kane"), Command::Guess("kane".to_string()));
    }

    #[test]
    fn short_guess_is_rejected_and_cleared() {
        let mut game = game("salah");
        assert!(!play_guess(&mut game, "sal"));
        assert_eq!(game.state().current_col, 0);
        assert_eq!(game.state().current_row, 0);
    }

    #[test]
    fn long_or_invalid_guess_is_refused() {
        let mut game = game("kane");
        assert!(!play_guess(&mut game, "lewandowski"));
        assert!(!play_guess(&mut game, "ka e"));
        assert_eq!(game.board().row_text(0), "");
    }

    #[test]
    fn miss_advances_row() {
        let mut game = game("salah");
        assert!(!play_guess(&mut game, "pedri"));
        assert_eq!(game.phase(), Phase::AcceptingInput);
        assert_eq!(game.state().current_row, 1);
    }

    #[test]
    fn win_ends_and_restarts() {
        let mut game = game("salah");
        assert!(play_guess(&mut game, "salah"));
        // A fresh game is ready for the next round
        assert_eq!(game.phase(), Phase::AcceptingInput);
        assert_eq!(game.generation(), 1);
    }
}
