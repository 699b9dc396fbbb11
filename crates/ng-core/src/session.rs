//! Game session state machine
//!
//! One [`GameSession`] covers one round: a secret number drawn at round
//! start, an attempt budget from the difficulty preset, and an outcome that
//! moves from [`Outcome::Unresolved`] to a terminal value at most once.
//! The frontend feeds guesses in one at a time and renders the
//! [`GuessResult`] it gets back.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::difficulty::Difficulty;
use crate::rng::GameRng;

/// Result of a single round
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display,
)]
pub enum Outcome {
    /// Round still in progress (or abandoned mid-round)
    #[default]
    Unresolved,
    /// Player guessed the secret number
    Won,
    /// Player ran out of attempts
    Lost,
}

/// Result of evaluating one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess lies outside [1, max_range]; no attempt consumed
    OutOfRange,
    /// Guess is below the secret
    TooLow,
    /// Guess is above the secret
    TooHigh,
    /// Guess matches the secret; the round is won
    Won { attempts_used: u32 },
}

/// State for one round of the guessing game
///
/// The secret is fixed for the lifetime of the session and
/// `attempts_remaining` only decreases, never below zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    difficulty: Difficulty,
    secret: i64,
    attempts_remaining: u32,
    outcome: Outcome,
}

impl GameSession {
    /// Start a round with a secret drawn uniformly from [1, max_range]
    pub fn new(difficulty: Difficulty, rng: &mut GameRng) -> Self {
        Self::with_secret(difficulty, rng.rnd(difficulty.max_range()))
    }

    /// Start a round with a known secret
    ///
    /// The secret must lie in [1, max_range]. Used by tests and scripted
    /// scenarios.
    pub fn with_secret(difficulty: Difficulty, secret: i64) -> Self {
        debug_assert!(secret >= 1 && secret <= difficulty.max_range());
        Self {
            difficulty,
            secret,
            attempts_remaining: difficulty.max_attempts(),
            outcome: Outcome::Unresolved,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Upper bound of the guess range for this round
    pub fn max_range(&self) -> i64 {
        self.difficulty.max_range()
    }

    /// The secret number, for revealing after a loss
    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the round has reached a terminal outcome
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Unresolved
    }

    /// Evaluate one guess against the secret.
    ///
    /// Out-of-range guesses are rejected without consuming an attempt. A
    /// wrong in-range guess consumes one attempt and still reports
    /// `TooLow`/`TooHigh` even when it was the last one; the caller checks
    /// [`outcome`](Self::outcome) afterwards to detect the loss.
    ///
    /// The round must still be undecided; drive the loop with
    /// [`attempts_remaining`](Self::attempts_remaining) and
    /// [`is_over`](Self::is_over).
    pub fn guess(&mut self, value: i64) -> GuessResult {
        debug_assert_eq!(self.outcome, Outcome::Unresolved);

        if value < 1 || value > self.difficulty.max_range() {
            return GuessResult::OutOfRange;
        }

        if value == self.secret {
            let attempts_used =
                self.difficulty.max_attempts() - self.attempts_remaining + 1;
            self.outcome = Outcome::Won;
            return GuessResult::Won { attempts_used };
        }

        self.attempts_remaining -= 1;
        if self.attempts_remaining == 0 {
            self.outcome = Outcome::Lost;
        }

        if value < self.secret {
            GuessResult::TooLow
        } else {
            GuessResult::TooHigh
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_secret_in_range_for_every_difficulty() {
        let mut rng = GameRng::new(42);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for _ in 0..100 {
                let session = GameSession::new(difficulty, &mut rng);
                assert!(session.secret() >= 1);
                assert!(session.secret() <= difficulty.max_range());
            }
        }
    }

    #[test]
    fn test_easy_scenario_win_in_three() {
        // Fixed secret 25 on Easy: low, high, then the hit.
        let mut session = GameSession::with_secret(Difficulty::Easy, 25);

        assert_eq!(session.guess(10), GuessResult::TooLow);
        assert_eq!(session.attempts_remaining(), 9);

        assert_eq!(session.guess(40), GuessResult::TooHigh);
        assert_eq!(session.attempts_remaining(), 8);

        assert_eq!(session.guess(25), GuessResult::Won { attempts_used: 3 });
        assert_eq!(session.outcome(), Outcome::Won);
        assert!(session.is_over());
        // Winning does not consume the attempt
        assert_eq!(session.attempts_remaining(), 8);
    }

    #[test]
    fn test_first_guess_win_uses_one_attempt() {
        let mut session = GameSession::with_secret(Difficulty::Medium, 60);
        assert_eq!(session.guess(60), GuessResult::Won { attempts_used: 1 });
    }

    #[test]
    fn test_out_of_range_consumes_no_attempt() {
        let mut session = GameSession::with_secret(Difficulty::Easy, 25);

        assert_eq!(session.guess(0), GuessResult::OutOfRange);
        assert_eq!(session.guess(51), GuessResult::OutOfRange);
        assert_eq!(session.guess(-7), GuessResult::OutOfRange);
        assert_eq!(session.guess(9999), GuessResult::OutOfRange);

        assert_eq!(session.attempts_remaining(), 10);
        assert_eq!(session.outcome(), Outcome::Unresolved);
    }

    #[test]
    fn test_exhausting_attempts_loses_and_keeps_feedback() {
        // Medium: 7 attempts, secret 60, all guesses wrong.
        let mut session = GameSession::with_secret(Difficulty::Medium, 60);

        for i in 0..6 {
            assert_eq!(session.guess(1 + i), GuessResult::TooLow);
        }
        assert_eq!(session.attempts_remaining(), 1);
        assert_eq!(session.outcome(), Outcome::Unresolved);

        // Last wrong guess still reports direction; the loss shows up in
        // the outcome.
        assert_eq!(session.guess(99), GuessResult::TooHigh);
        assert_eq!(session.attempts_remaining(), 0);
        assert_eq!(session.outcome(), Outcome::Lost);
        assert_eq!(session.secret(), 60);
    }

    #[test]
    fn test_session_serde_roundtrip() {
        let session = GameSession::with_secret(Difficulty::Hard, 500);
        let json = serde_json::to_string(&session).unwrap();
        let back: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.secret(), 500);
        assert_eq!(back.attempts_remaining(), 5);
        assert_eq!(back.outcome(), Outcome::Unresolved);
    }

    proptest! {
        #[test]
        fn secret_always_in_range(seed: u64) {
            let mut rng = GameRng::new(seed);
            for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                let session = GameSession::new(difficulty, &mut rng);
                prop_assert!(session.secret() >= 1);
                prop_assert!(session.secret() <= difficulty.max_range());
            }
        }

        #[test]
        fn out_of_range_never_decrements(secret in 1i64..=50, below in i64::MIN..1i64, above in 51i64..=i64::MAX) {
            let mut session = GameSession::with_secret(Difficulty::Easy, secret);
            prop_assert_eq!(session.guess(below), GuessResult::OutOfRange);
            prop_assert_eq!(session.guess(above), GuessResult::OutOfRange);
            prop_assert_eq!(session.attempts_remaining(), Difficulty::Easy.max_attempts());
        }
    }
}
