//! TUI application state and logic

use crate::game::{GameController, GameEvent, InputEvent, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Redraw interval while waiting for keys; keeps reveal animation smooth
const FRAME: Duration = Duration::from_millis(16);

/// Application state
pub struct App {
    pub game: GameController,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = attempts used to win
    pub guess_distribution: Vec<usize>,
}

/// What a key press means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Input(InputEvent),
    Quit,
}

/// Translate a raw key press into a normalized action
#[must_use]
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(KeyAction::Quit),
        KeyCode::Char('r' | 'n') if ctrl => Some(KeyAction::Input(InputEvent::Reset)),
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::F(5) => Some(KeyAction::Input(InputEvent::Reset)),
        KeyCode::Enter => Some(KeyAction::Input(InputEvent::Submit)),
        KeyCode::Backspace | KeyCode::Delete => Some(KeyAction::Input(InputEvent::Backspace)),
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
            Some(KeyAction::Input(InputEvent::Letter(c)))
        }
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(game: GameController) -> Self {
        let max_attempts = game.config().max_attempts;
        let mut app = Self {
            game,
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; max_attempts + 1],
                ..Statistics::default()
            },
            should_quit: false,
        };
        app.announce_new_game();
        app.add_message(
            "Type letters, Enter to submit. Ctrl+R new game, Esc quit.",
            MessageStyle::Info,
        );
        app
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key_action(key) {
            Some(KeyAction::Quit) => self.should_quit = true,
            Some(KeyAction::Input(InputEvent::Submit)) => {
                if let SubmitOutcome::Accepted(tiles) = self.game.submit() {
                    debug!(tiles = tiles.len(), "reveal scheduled");
                }
            }
            Some(KeyAction::Input(input)) => {
                self.game.handle_input(input);
            }
            None => {}
        }
        let events = self.game.drain_events();
        self.apply_events(events);
    }

    /// Advance the game clock by real elapsed time
    pub fn tick(&mut self, elapsed: Duration) {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let events = self.game.advance(elapsed_ms);
        self.apply_events(events);
    }

    fn apply_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::NewGame { .. } => self.announce_new_game(),
                GameEvent::InvalidSubmission { .. } => {
                    self.add_message("Not enough letters", MessageStyle::Error);
                }
                GameEvent::Won { solution, attempts } => {
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    if let Some(slot) = self.stats.guess_distribution.get_mut(attempts) {
                        *slot += 1;
                    }
                    let celebration = match attempts {
                        1 => "🎯 HOLE IN ONE!".to_string(),
                        n => format!("🎉 Solved in {n}!"),
                    };
                    self.add_message(&celebration, MessageStyle::Success);
                    self.add_message(
                        &format!("Correct Answer: {}", solution.display_text()),
                        MessageStyle::Info,
                    );
                }
                GameEvent::Lost { solution } => {
                    self.stats.total_games += 1;
                    self.add_message(
                        &format!("Correct Answer: {}", solution.display_text()),
                        MessageStyle::Error,
                    );
                    self.add_message("Ctrl+R to play again.", MessageStyle::Info);
                }
                _ => {}
            }
        }
    }

    fn announce_new_game(&mut self) {
        let text = format!("New game! {} letters.", self.game.word_len());
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
