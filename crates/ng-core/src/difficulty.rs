//! Difficulty presets
//!
//! Each preset bundles a guess range with an attempt budget. The table is
//! fixed at compile time and resolved from the menu key the player types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Difficulty level (easy, medium, hard)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Get the menu key for this level
    pub const fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "1",
            Difficulty::Medium => "2",
            Difficulty::Hard => "3",
        }
    }

    /// Upper bound of the guess range (inclusive); the lower bound is 1
    pub const fn max_range(&self) -> i64 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 100,
            Difficulty::Hard => 1000,
        }
    }

    /// Number of in-range guesses the player gets
    pub const fn max_attempts(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 7,
            Difficulty::Hard => 5,
        }
    }

    /// Menu line for this level
    pub const fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "1. Easy (1-50, 10 attempts)",
            Difficulty::Medium => "2. Medium (1-100, 7 attempts)",
            Difficulty::Hard => "3. Hard (1-1000, 5 attempts)",
        }
    }

    /// Resolve a user-entered menu key
    ///
    /// Returns `None` for anything other than "1", "2" or "3"; the caller
    /// re-prompts.
    pub fn from_key(key: &str) -> Option<Difficulty> {
        match key {
            "1" => Some(Difficulty::Easy),
            "2" => Some(Difficulty::Medium),
            "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}
