//! Game state machine
//!
//! `GameController` owns one game: the solution, the tile grid, the keyboard
//! hints and the reveal queue. It is driven by normalized input events and by
//! a virtual clock (`advance`), and reports what happened as [`GameEvent`]s.
//!
//! ```text
//! AcceptingInput --submit(full row)--> Locked --row complete--> AcceptingInput
//!                                          |--> Won  (guess == solution)
//!                                          '--> Lost (attempts exhausted)
//! any state --reset--> AcceptingInput (new generation)
//! ```

use super::board::Board;
use super::config::{ConfigError, GameConfig};
use super::keyboard::KeyboardTracker;
use super::reveal::{Generation, RevealEvent, RevealSequencer, RevealStep, TileReveal};
use crate::core::{Color, Pattern, Word, normalize_letter};
use crate::wordlists::WordBank;
use tracing::{debug, info, trace};

/// Terminal status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Coarse state, derived from [`GameState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AcceptingInput,
    Locked,
    Won,
    Lost,
}

/// Snapshot of the cursor and lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub current_row: usize,
    pub current_col: usize,
    pub locked: bool,
    pub outcome: Outcome,
}

impl GameState {
    const fn initial() -> Self {
        Self {
            current_row: 0,
            current_col: 0,
            locked: false,
            outcome: Outcome::InProgress,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.outcome {
            Outcome::Won => Phase::Won,
            Outcome::Lost => Phase::Lost,
            Outcome::InProgress if self.locked => Phase::Locked,
            Outcome::InProgress => Phase::AcceptingInput,
        }
    }
}

/// Normalized input accepted by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Backspace,
    Submit,
    Reset,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not accepting input (locked or finished)
    Ignored,
    /// Row not full; an `InvalidSubmission` event was emitted
    Rejected,
    /// Row locked in; per-tile reveal schedule
    Accepted(Vec<TileReveal>),
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    NewGame {
        generation: Generation,
        word_len: usize,
    },
    InvalidSubmission {
        row: usize,
    },
    InvalidCleared {
        row: usize,
    },
    TileFlipStarted {
        row: usize,
        col: usize,
        at_ms: u64,
    },
    TileColored {
        row: usize,
        col: usize,
        color: Color,
        at_ms: u64,
    },
    TilePopCleared {
        row: usize,
        col: usize,
        at_ms: u64,
    },
    TileRevealed {
        row: usize,
        col: usize,
        at_ms: u64,
    },
    RowRevealed {
        row: usize,
        pattern: Pattern,
        at_ms: u64,
    },
    Won {
        solution: Word,
        attempts: usize,
    },
    Lost {
        solution: Word,
    },
}

#[derive(Debug, Clone)]
struct PendingRow {
    row: usize,
    guess: Word,
    pattern: Pattern,
}

#[derive(Debug, Clone, Copy)]
struct InvalidFlash {
    row: usize,
    until_ms: u64,
}

/// One game instance and its lifecycle
#[derive(Debug)]
pub struct GameController {
    config: GameConfig,
    bank: WordBank,
    solution: Word,
    state: GameState,
    board: Board,
    patterns: Vec<Pattern>,
    keyboard: KeyboardTracker,
    sequencer: RevealSequencer,
    /// Bumped on every reset; reveal steps from older generations are dropped
    generation: Generation,
    clock_ms: u64,
    pending: Option<PendingRow>,
    invalid_flash: Option<InvalidFlash>,
    events: Vec<GameEvent>,
}

impl GameController {
    /// Start a game with a solution drawn from `bank`
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration fails validation.
    ///
    /// # Examples
    /// ```
    /// use wordle_reveal::core::Word;
    /// use wordle_reveal::game::{GameConfig, GameController, Phase};
    /// use wordle_reveal::wordlists::WordBank;
    ///
    /// let bank = WordBank::with_seed(vec![Word::new("kane").unwrap()], 1);
    /// let mut game = GameController::new(bank, GameConfig::default()).unwrap();
    /// for ch in "kane".chars() {
    ///     game.letter_input(ch);
    /// }
    /// game.submit();
    /// assert_eq!(game.phase(), Phase::Locked);
    ///
    /// game.finish_reveal();
    /// assert_eq!(game.phase(), Phase::Won);
    /// ```
    pub fn new(mut bank: WordBank, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let solution = bank.select_solution();
        debug!(word_len = solution.len(), "new game");

        Ok(Self {
            board: Board::new(config.max_attempts, solution.len()),
            sequencer: RevealSequencer::new(config.timing),
            config,
            bank,
            solution,
            state: GameState::initial(),
            patterns: Vec::new(),
            keyboard: KeyboardTracker::new(),
            generation: 0,
            clock_ms: 0,
            pending: None,
            invalid_flash: None,
            events: Vec::new(),
        })
    }

    /// Build the bank from `words`, honoring `config.seed`
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration fails validation.
    pub fn from_words(
        words: impl IntoIterator<Item = Word>,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        let bank = match config.seed {
            Some(seed) => WordBank::with_seed(words, seed),
            None => WordBank::new(words),
        };
        Self::new(bank, config)
    }

    /// Dispatch a normalized input event
    ///
    /// Returns true if the event changed the game.
    pub fn handle_input(&mut self, input: InputEvent) -> bool {
        match input {
            InputEvent::Letter(ch) => self.letter_input(ch),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Submit => matches!(self.submit(), SubmitOutcome::Accepted(_)),
            InputEvent::Reset => {
                self.reset();
                true
            }
        }
    }

    fn accepting_input(&self) -> bool {
        self.state.phase() == Phase::AcceptingInput
    }

    /// Type a letter into the next free tile
    ///
    /// Ignored while locked, after the game ended, when the row is full, or
    /// for anything other than an ASCII letter.
    pub fn letter_input(&mut self, ch: char) -> bool {
        if !self.accepting_input() || self.state.current_col >= self.word_len() {
            return false;
        }
        let Some(letter) = normalize_letter(ch) else {
            return false;
        };

        let GameState {
            current_row,
            current_col,
            ..
        } = self.state;
        self.board.set_letter(current_row, current_col, Some(letter));
        self.state.current_col += 1;
        true
    }

    /// Clear the last typed tile
    pub fn backspace(&mut self) -> bool {
        if !self.accepting_input() || self.state.current_col == 0 {
            return false;
        }
        self.state.current_col -= 1;
        self.board
            .set_letter(self.state.current_row, self.state.current_col, None);
        true
    }

    /// Submit the current row
    ///
    /// A full row locks input, is colored against the solution and queued for
    /// reveal. The row's outcome is decided when its reveal completes.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.accepting_input() {
            return SubmitOutcome::Ignored;
        }

        let row = self.state.current_row;
        let guess = (self.state.current_col == self.word_len())
            .then(|| self.board.row_word(row))
            .flatten();
        let Some(guess) = guess else {
            self.invalid_flash = Some(InvalidFlash {
                row,
                until_ms: self
                    .clock_ms
                    .saturating_add(self.config.timing.invalid_flash_ms),
            });
            self.events.push(GameEvent::InvalidSubmission { row });
            return SubmitOutcome::Rejected;
        };

        let pattern = Pattern::calculate(&guess, &self.solution);
        self.state.locked = true;
        let tiles = self
            .sequencer
            .schedule_row(self.generation, row, &pattern, self.clock_ms);
        debug!(
            row,
            generation = self.generation,
            pattern = %pattern.to_emoji(),
            "row submitted"
        );

        self.pending = Some(PendingRow {
            row,
            guess,
            pattern,
        });
        SubmitOutcome::Accepted(tiles)
    }

    /// Abandon the current game and start a new one
    ///
    /// Reveal steps still queued for the old game stay in the queue but are
    /// discarded when they fire.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.solution = self.bank.select_solution();
        self.state = GameState::initial();
        self.board = Board::new(self.config.max_attempts, self.solution.len());
        self.patterns.clear();
        self.keyboard.reset();
        self.pending = None;
        self.invalid_flash = None;

        debug!(
            generation = self.generation,
            word_len = self.solution.len(),
            "new game"
        );
        self.events.push(GameEvent::NewGame {
            generation: self.generation,
            word_len: self.solution.len(),
        });
    }

    /// Move the virtual clock forward and fire every reveal step now due
    ///
    /// Returns all events emitted since the last drain.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<GameEvent> {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms);

        while let Some(event) = self.sequencer.pop_due(self.clock_ms) {
            if event.generation != self.generation {
                trace!(
                    stale = event.generation,
                    current = self.generation,
                    "discarding reveal step"
                );
                continue;
            }
            self.apply_reveal(event);
        }

        if let Some(flash) = self.invalid_flash
            && flash.until_ms <= self.clock_ms
        {
            self.invalid_flash = None;
            self.events
                .push(GameEvent::InvalidCleared { row: flash.row });
        }

        self.drain_events()
    }

    /// Jump the clock to the end of the pending reveal
    pub fn finish_reveal(&mut self) -> Vec<GameEvent> {
        let remaining = self.time_until_idle().unwrap_or(0);
        self.advance(remaining)
    }

    /// Virtual time left until the current game's queued reveal completes
    #[must_use]
    pub fn time_until_idle(&self) -> Option<u64> {
        self.sequencer
            .last_due_ms(self.generation)
            .map(|due| due.saturating_sub(self.clock_ms))
    }

    /// Take pending events without advancing the clock
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn apply_reveal(&mut self, event: RevealEvent) {
        let RevealEvent {
            row, at_ms, step, ..
        } = event;

        match step {
            RevealStep::FlipStarted { col } => {
                if let Some(tile) = self.board.tile_mut(row, col) {
                    tile.flipping = true;
                }
                self.events
                    .push(GameEvent::TileFlipStarted { row, col, at_ms });
            }
            RevealStep::Colored { col, color } => {
                if let Some(tile) = self.board.tile_mut(row, col) {
                    tile.flipping = false;
                    tile.color = Some(color);
                    tile.popping = true;
                }
                self.events.push(GameEvent::TileColored {
                    row,
                    col,
                    color,
                    at_ms,
                });
            }
            RevealStep::PopCleared { col } => {
                if let Some(tile) = self.board.tile_mut(row, col) {
                    tile.popping = false;
                }
                self.events
                    .push(GameEvent::TilePopCleared { row, col, at_ms });
            }
            RevealStep::TileDone { col } => {
                self.events.push(GameEvent::TileRevealed { row, col, at_ms });
            }
            RevealStep::RowComplete => self.complete_row(row, at_ms),
        }
    }

    fn complete_row(&mut self, row: usize, at_ms: u64) {
        let Some(pending) = self.pending.take_if(|pending| pending.row == row) else {
            return;
        };

        for (&letter, &color) in pending.guess.chars().iter().zip(pending.pattern.colors()) {
            self.keyboard
                .upgrade_key_color(char::from(letter.to_ascii_uppercase()), color);
        }
        self.patterns.push(pending.pattern.clone());
        self.events.push(GameEvent::RowRevealed {
            row,
            pattern: pending.pattern,
            at_ms,
        });

        // A match always wins, even on the last allowed row
        if pending.guess == self.solution {
            self.state.outcome = Outcome::Won;
            info!(attempts = row + 1, "game won");
            self.events.push(GameEvent::Won {
                solution: self.solution.clone(),
                attempts: row + 1,
            });
            return;
        }

        self.state.current_row += 1;
        self.state.current_col = 0;

        if self.state.current_row >= self.config.max_attempts {
            self.state.outcome = Outcome::Lost;
            info!(solution = %self.solution, "game lost");
            self.events.push(GameEvent::Lost {
                solution: self.solution.clone(),
            });
        } else {
            self.state.locked = false;
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardTracker {
        &self.keyboard
    }

    /// Patterns of fully revealed rows, in row order
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.solution.len()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// The solution, once the game has ended
    #[must_use]
    pub fn revealed_solution(&self) -> Option<&Word> {
        matches!(self.state.outcome, Outcome::Won | Outcome::Lost).then_some(&self.solution)
    }

    /// Row currently flagged by a rejected submit
    #[must_use]
    pub fn invalid_row(&self) -> Option<usize> {
        self.invalid_flash.map(|flash| flash.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RevealTiming;
    use crate::wordlists::loader::words_from_slice;

    fn game(solution: &str) -> GameController {
        let bank = WordBank::with_seed(words_from_slice(&[solution]), 0);
        GameController::new(bank, GameConfig::default()).unwrap()
    }

    fn type_word(game: &mut GameController, word: &str) {
        for ch in word.chars() {
            game.letter_input(ch);
        }
    }

    fn play_row(game: &mut GameController, word: &str) -> Vec<GameEvent> {
        type_word(game, word);
        assert!(matches!(game.submit(), SubmitOutcome::Accepted(_)));
        game.finish_reveal()
    }

    fn assert_fresh(game: &GameController) {
        assert_eq!(game.state(), GameState::initial());
        assert_eq!(game.phase(), Phase::AcceptingInput);
        assert!(game.keyboard().is_empty());
        assert!(game.patterns().is_empty());
        assert_eq!(game.board().row_text(0), "");
        assert_eq!(game.revealed_solution(), None);
    }

    #[test]
    fn initial_state() {
        let game = game("crane");
        assert_fresh(&game);
        assert_eq!(game.word_len(), 5);
        assert_eq!(game.board().rows().len(), 6);
    }

    #[test]
    fn letters_fill_row_then_stop() {
        let mut game = game("kane");
        type_word(&mut game, "SAKAX");
        assert_eq!(game.state().current_col, 4);
        assert_eq!(game.board().row_text(0), "saka");
        assert!(!game.letter_input('z'));
    }

    #[test]
    fn non_letters_ignored() {
        let mut game = game("kane");
        assert!(!game.letter_input('3'));
        assert!(!game.letter_input(' '));
        assert_eq!(game.state().current_col, 0);
    }

    #[test]
    fn backspace_clears_last_slot() {
        let mut game = game("kane");
        assert!(!game.backspace());

        type_word(&mut game, "ka");
        assert!(game.backspace());
        assert_eq!(game.state().current_col, 1);
        assert_eq!(game.board().row_text(0), "k");
        assert_eq!(game.board().tile(0, 1).and_then(|t| t.letter), None);
    }

    #[test]
    fn incomplete_submit_is_rejected() {
        let mut game = game("crane");
        type_word(&mut game, "cra");
        let before = game.state();

        assert_eq!(game.submit(), SubmitOutcome::Rejected);
        assert_eq!(game.state(), before);
        assert_eq!(game.invalid_row(), Some(0));
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::InvalidSubmission { row: 0 }]
        );

        assert!(game.advance(399).is_empty());
        assert_eq!(
            game.advance(1),
            vec![GameEvent::InvalidCleared { row: 0 }]
        );
        assert_eq!(game.invalid_row(), None);
    }

    #[test]
    fn submit_locks_until_row_complete() {
        let mut game = game("crane");
        type_word(&mut game, "slate");
        let SubmitOutcome::Accepted(tiles) = game.submit() else {
            panic!("full row should be accepted");
        };
        assert_eq!(tiles.len(), 5);
        assert_eq!(game.phase(), Phase::Locked);

        // Everything mutating is ignored while locked
        assert!(!game.letter_input('a'));
        assert!(!game.backspace());
        assert_eq!(game.submit(), SubmitOutcome::Ignored);

        game.advance(1849);
        assert_eq!(game.phase(), Phase::Locked);
        assert!(game.keyboard().is_empty());

        game.advance(1);
        assert_eq!(game.phase(), Phase::AcceptingInput);
        assert_eq!(game.state().current_row, 1);
        assert_eq!(game.state().current_col, 0);
        assert_eq!(game.patterns().len(), 1);
    }

    #[test]
    fn tiles_color_left_to_right() {
        let mut game = game("crane");
        type_word(&mut game, "slate");
        game.submit();

        let colored = |game: &GameController| {
            game.board().rows()[0]
                .iter()
                .filter(|tile| tile.color.is_some())
                .count()
        };

        game.advance(299);
        assert_eq!(colored(&game), 0);
        assert!(game.board().tile(0, 0).is_some_and(|t| t.flipping));

        game.advance(1);
        assert_eq!(colored(&game), 1);
        assert!(game.board().tile(0, 0).is_some_and(|t| t.popping && !t.flipping));

        game.advance(300);
        assert_eq!(colored(&game), 2);
        assert!(game.board().tile(0, 0).is_some_and(|t| !t.popping));

        game.advance(900);
        assert_eq!(colored(&game), 5);
    }

    #[test]
    fn reveal_event_timestamps_are_ordered() {
        let mut game = game("crane");
        let events = play_row(&mut game, "slate");

        let colored: Vec<(usize, u64)> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::TileColored { col, at_ms, .. } => Some((*col, *at_ms)),
                _ => None,
            })
            .collect();
        assert_eq!(colored.iter().map(|&(c, _)| c).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
        assert!(colored.windows(2).all(|w| w[0].1 < w[1].1));

        let revealed: Vec<u64> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::RowRevealed { at_ms, .. } => Some(*at_ms),
                _ => None,
            })
            .collect();
        assert_eq!(revealed.len(), 1);
        assert!(revealed[0] > colored[4].1);
    }

    #[test]
    fn keyboard_takes_best_color_per_letter() {
        let mut game = game("allee");
        play_row(&mut game, "eagle");

        let keys = game.keyboard();
        assert_eq!(keys.color_of('E'), Some(Color::Green));
        assert_eq!(keys.color_of('A'), Some(Color::Yellow));
        assert_eq!(keys.color_of('G'), Some(Color::Gray));
        assert_eq!(keys.color_of('L'), Some(Color::Yellow));

        // A later gray for E must not downgrade it
        play_row(&mut game, "exxxx");
        assert_eq!(game.keyboard().color_of('E'), Some(Color::Green));
    }

    #[test]
    fn six_misses_lose() {
        let mut game = game("crane");
        for attempt in 0..6 {
            assert_eq!(game.state().current_row, attempt);
            play_row(&mut game, "marsh");
        }

        assert_eq!(game.phase(), Phase::Lost);
        assert_eq!(game.state().current_row, 6);
        assert!(game.state().locked);
        assert_eq!(game.revealed_solution().map(Word::text), Some("crane"));
        assert!(!game.letter_input('a'));
        assert_eq!(game.submit(), SubmitOutcome::Ignored);
    }

    #[test]
    fn lost_event_reports_solution() {
        let mut game = game("kane");
        let mut events = Vec::new();
        for _ in 0..6 {
            events.extend(play_row(&mut game, "saka"));
        }
        assert!(events.contains(&GameEvent::Lost {
            solution: Word::new("kane").unwrap()
        }));
    }

    #[test]
    fn match_on_first_row_wins() {
        let mut game = game("crane");
        let events = play_row(&mut game, "CRANE");

        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.state().current_row, 0);
        assert!(events.contains(&GameEvent::Won {
            solution: Word::new("crane").unwrap(),
            attempts: 1,
        }));
        assert!(!game.letter_input('a'));
    }

    #[test]
    fn match_on_last_row_wins_not_loses() {
        let mut game = game("crane");
        for _ in 0..5 {
            play_row(&mut game, "marsh");
        }
        let events = play_row(&mut game, "crane");

        assert_eq!(game.phase(), Phase::Won);
        assert!(events.iter().any(|e| matches!(e, GameEvent::Won { attempts: 6, .. })));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Lost { .. })));
    }

    #[test]
    fn reset_from_won_and_lost() {
        let mut won = game("crane");
        play_row(&mut won, "crane");
        won.reset();
        assert_fresh(&won);

        let mut lost = game("crane");
        for _ in 0..6 {
            play_row(&mut lost, "marsh");
        }
        lost.reset();
        assert_fresh(&lost);
    }

    #[test]
    fn reset_mid_reveal_discards_stale_steps() {
        let mut game = game("crane");
        type_word(&mut game, "slate");
        game.submit();
        game.advance(700);
        assert_eq!(game.phase(), Phase::Locked);

        game.reset();
        assert_fresh(&game);
        assert_eq!(game.generation(), 1);
        assert_eq!(game.time_until_idle(), None);

        // The old row's remaining steps fire into the void
        let events = game.advance(5000);
        assert!(events.iter().all(|e| matches!(e, GameEvent::NewGame { .. })));
        assert_fresh(&game);
        assert!(game.board().rows().iter().flatten().all(|t| t.color.is_none()));
    }

    #[test]
    fn new_reveal_unaffected_by_stale_one() {
        let mut game = game("crane");
        type_word(&mut game, "slate");
        game.submit();
        game.advance(100);
        game.reset();

        // New game row submitted while the stale queue is still pending
        type_word(&mut game, "crane");
        game.submit();
        assert_eq!(game.time_until_idle(), Some(1850));

        // Stale row completion (at 1850) must not unlock or score the new row
        game.advance(1750);
        assert_eq!(game.phase(), Phase::Locked);
        assert!(game.keyboard().is_empty());

        game.advance(100);
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.keyboard().len(), 5);
    }

    #[test]
    fn handle_input_dispatch() {
        let mut game = game("kane");
        assert!(game.handle_input(InputEvent::Letter('k')));
        assert!(game.handle_input(InputEvent::Backspace));
        assert!(!game.handle_input(InputEvent::Submit));
        assert!(game.handle_input(InputEvent::Reset));
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        let bank = WordBank::with_seed(Vec::new(), 0);
        assert_eq!(
            GameController::new(bank, config).unwrap_err(),
            ConfigError::NoAttempts
        );
    }

    #[test]
    fn empty_pool_plays_fallback() {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        };
        let mut game = GameController::from_words(Vec::new(), config).unwrap();
        assert_eq!(game.word_len(), 5);
        play_row(&mut game, "apple");
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn long_repeated_word_wins() {
        let solution = "a".repeat(300);
        let mut game = game(&solution);
        assert_eq!(game.word_len(), 300);

        let events = play_row(&mut game, &solution);
        assert_eq!(game.phase(), Phase::Won);
        assert!(events.iter().any(|e| matches!(e, GameEvent::Won { attempts: 1, .. })));
        assert_eq!(game.keyboard().color_of('A'), Some(Color::Green));
    }

    #[test]
    fn huge_stagger_reveal_completes() {
        let config = GameConfig {
            timing: RevealTiming {
                stagger_ms: u64::MAX / 2,
                ..RevealTiming::default()
            },
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
        let bank = WordBank::with_seed(words_from_slice(&["kane"]), 0);
        let mut game = GameController::new(bank, config).unwrap();

        type_word(&mut game, "kane");
        let SubmitOutcome::Accepted(tiles) = game.submit() else {
            panic!("full row should be accepted");
        };
        assert_eq!(tiles.last().map(|t| t.delay_ms), Some(u64::MAX));
        assert_eq!(game.time_until_idle(), Some(u64::MAX));

        let events = game.finish_reveal();
        assert_eq!(game.clock_ms(), u64::MAX);
        assert_eq!(game.phase(), Phase::Won);
        assert!(events.iter().any(|e| matches!(e, GameEvent::RowRevealed { row: 0, .. })));
    }

    #[test]
    fn invalid_flash_saturates_at_clock_end() {
        let config = GameConfig {
            timing: RevealTiming {
                invalid_flash_ms: u64::MAX,
                ..RevealTiming::default()
            },
            ..GameConfig::default()
        };
        let bank = WordBank::with_seed(words_from_slice(&["kane"]), 0);
        let mut game = GameController::new(bank, config).unwrap();

        game.advance(10);
        type_word(&mut game, "ka");
        assert_eq!(game.submit(), SubmitOutcome::Rejected);
        assert_eq!(game.invalid_row(), Some(0));
        assert!(game.advance(u64::MAX).contains(&GameEvent::InvalidCleared { row: 0 }));
    }
}
