//! ng-core: Core game logic for the number-guessing game
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: the console frontend in the
//! `numguess` crate drives a [`GameSession`] one guess at a time and
//! renders the [`GuessResult`] it gets back.

mod difficulty;
mod rng;
mod session;

pub use difficulty::Difficulty;
pub use rng::GameRng;
pub use session::{GameSession, GuessResult, Outcome};
