//! Game configuration
//!
//! Attempt limit and reveal animation timings, all in virtual milliseconds.

use std::fmt;

/// Default number of rows per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Delay between successive tiles starting their flip
pub const DEFAULT_STAGGER_MS: u64 = 300;

/// Full flip duration of one tile; the color lands at the halfway point
pub const DEFAULT_FLIP_MS: u64 = 600;

/// How long the "pop" emphasis stays on a freshly colored tile
pub const DEFAULT_POP_MS: u64 = 180;

/// Buffer after the last tile before input unlocks
pub const DEFAULT_SETTLE_MS: u64 = 50;

/// How long a rejected row stays flagged invalid
pub const DEFAULT_INVALID_FLASH_MS: u64 = 400;

/// Reveal animation timings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub stagger_ms: u64,
    pub flip_ms: u64,
    pub pop_ms: u64,
    pub settle_ms: u64,
    pub invalid_flash_ms: u64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            stagger_ms: DEFAULT_STAGGER_MS,
            flip_ms: DEFAULT_FLIP_MS,
            pop_ms: DEFAULT_POP_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            invalid_flash_ms: DEFAULT_INVALID_FLASH_MS,
        }
    }
}

impl RevealTiming {
    /// First half of the flip, before the color is shown
    #[inline]
    #[must_use]
    pub const fn flip_half_ms(&self) -> u64 {
        self.flip_ms / 2
    }

    /// Offset from submit at which tile `col` starts flipping
    ///
    /// Offsets saturate at `u64::MAX` rather than wrapping.
    #[inline]
    #[must_use]
    pub const fn tile_delay_ms(&self, col: usize) -> u64 {
        (col as u64).saturating_mul(self.stagger_ms)
    }

    /// Offset from submit at which the row unlocks, for a row of `word_len` tiles
    ///
    /// The last tile finishes last, so it alone decides when the settle buffer starts.
    #[must_use]
    pub const fn row_duration_ms(&self, word_len: usize) -> u64 {
        let Some(last) = word_len.checked_sub(1) else {
            return self.settle_ms;
        };
        let start = self.tile_delay_ms(last);
        let done = start.saturating_add(self.flip_ms);
        let pop_cleared = start
            .saturating_add(self.flip_half_ms())
            .saturating_add(self.pop_ms);
        let finished = if done > pop_cleared { done } else { pop_cleared };
        finished.saturating_add(self.settle_ms)
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub timing: RevealTiming,
    /// Fixed seed for solution selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timing: RevealTiming::default(),
            seed: None,
        }
    }
}

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoAttempts,
    ZeroStagger,
    FlipTooShort(u64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAttempts => write!(f, "At least one attempt is required"),
            Self::ZeroStagger => write!(f, "Tile stagger must be at least 1ms"),
            Self::FlipTooShort(ms) => {
                write!(f, "Flip duration must be at least 2ms, got {ms}ms")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Check the configuration keeps reveals strictly ordered
    ///
    /// A zero stagger would color tiles simultaneously, and a flip shorter than
    /// 2ms would finish a tile in the same instant its color lands.
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.timing.stagger_ms == 0 {
            return Err(ConfigError::ZeroStagger);
        }
        if self.timing.flip_ms < 2 {
            return Err(ConfigError::FlipTooShort(self.timing.flip_ms));
        }
        Ok(())
    }
}
