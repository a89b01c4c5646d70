//! Pattern check command
//!
//! Colors one guess against one answer without playing a game.

use crate::core::{Pattern, Word};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub answer: Word,
    pub pattern: Pattern,
}

/// Compute the pattern `guess` would receive against `answer`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(guess: &str, answer: &str) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;

    if guess.len() != answer.len() {
        return Err(format!(
            "Guess has {} letters but the answer has {}",
            guess.len(),
            answer.len()
        ));
    }

    let pattern = Pattern::calculate(&guess, &answer);
    Ok(CheckResult {
        guess,
        answer,
        pattern,
    })
}
