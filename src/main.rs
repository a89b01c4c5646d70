//! Word Puzzle - CLI
//!
//! Play in a TUI or line mode, check a guess against an answer, or list the word pool.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_reveal::{
    commands::{check_guess, list_words, run_simple},
    core::Word,
    game::{GameConfig, GameController, RevealTiming},
    logging::{self, LogTarget},
    output::{print_check_result, print_word_sections},
    wordlists::{ANSWERS, WordBank, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_reveal",
    about = "Word-guessing puzzle with timed tile reveals",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line); defaults to the embedded pool
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Attempts per game
    #[arg(short, long, global = true, default_value_t = wordle_reveal::game::DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Delay between tiles starting their flip (ms)
    #[arg(long, global = true, default_value_t = wordle_reveal::game::DEFAULT_STAGGER_MS)]
    stagger_ms: u64,

    /// Duration of one tile flip (ms)
    #[arg(long, global = true, default_value_t = wordle_reveal::game::DEFAULT_FLIP_MS)]
    flip_ms: u64,

    /// Seed for solution selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (whole-word guesses, no animation)
    Simple,

    /// Show the pattern a guess would get against an answer
    Check {
        /// The guessed word
        guess: String,

        /// The answer to compare against
        answer: String,
    },

    /// List the word pool grouped by length
    Words {
        /// Only show words of this length
        #[arg(short, long)]
        length: Option<usize>,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            max_attempts: self.attempts,
            timing: RevealTiming {
                stagger_ms: self.stagger_ms,
                flip_ms: self.flip_ms,
                ..RevealTiming::default()
            },
            seed: self.seed,
        }
    }
}

/// Load the word pool based on the -w flag
fn load_words(path: Option<&PathBuf>) -> Result<Vec<Word>> {
    use wordle_reveal::wordlists::loader::load_from_file;

    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display())),
        None => Ok(words_from_slice(ANSWERS)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    let log_file = cli.log_file.as_deref();
    let _log_guard = logging::init(match command {
        Commands::Play => LogTarget::Tui { file: log_file },
        _ => LogTarget::Console { file: log_file },
    });

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Check { guess, answer } => run_check_command(guess, answer),
        Commands::Words { length } => run_words_command(&cli, *length),
    }
}

fn new_game(cli: &Cli) -> Result<GameController> {
    let words = load_words(cli.wordlist.as_ref())?;
    if words.is_empty() {
        tracing::warn!("word pool is empty, using fallback solution");
    }
    GameController::from_words(words, cli.game_config()).context("Invalid game configuration")
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_reveal::interactive::{App, run_tui};

    let app = App::new(new_game(cli)?);
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut game = new_game(cli)?;
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(guess: &str, answer: &str) -> Result<()> {
    let result = check_guess(guess, answer).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result.guess, &result.answer, &result.pattern);
    Ok(())
}

fn run_words_command(cli: &Cli, length: Option<usize>) -> Result<()> {
    let words = load_words(cli.wordlist.as_ref())?;
    let bank = WordBank::new(words);
    println!("{} words in pool", bank.len());
    print_word_sections(&list_words(&bank, length));
    Ok(())
}
