//! Session driver
//!
//! [`run`] owns the interactive loop: pick a difficulty, play one round,
//! ask to play again. An aborted read anywhere ends the loop with an exit
//! notice instead of an error; the process never crashes on bad input.

use std::io::{self, BufRead, Write};

use ng_core::{GameRng, GameSession, GuessResult, Outcome};

use crate::console::{Console, ReadError};

/// Play one round to its terminal outcome.
///
/// Propagates [`ReadError`] when the input stream closes mid-round; the
/// session is left `Unresolved` in that case.
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
) -> Result<(), ReadError> {
    console.write_line(&format!(
        "\nI'm thinking of a number between 1 and {}.",
        session.max_range()
    ))?;

    while !session.is_over() {
        console.write_line(&format!(
            "\nYou have {} attempts left.",
            session.attempts_remaining()
        ))?;

        let prompt = format!("Enter your guess (1-{}): ", session.max_range());
        let guess = console.read_int(&prompt)?;

        match session.guess(guess) {
            GuessResult::OutOfRange => {
                console.write_line(&format!(
                    "Your guess is out of the specified range (1-{}). Try again.",
                    session.max_range()
                ))?;
            }
            GuessResult::TooLow => console.write_line("Too low!")?,
            GuessResult::TooHigh => console.write_line("Too high!")?,
            GuessResult::Won { attempts_used } => {
                console.write_line(&format!(
                    "\nCongratulations! You guessed the number {} correctly!",
                    session.secret()
                ))?;
                console.write_line(&format!("It took you {} attempts.", attempts_used))?;
            }
        }
    }

    if session.outcome() == Outcome::Lost {
        console.write_line(&format!(
            "\nGame over! You ran out of attempts. The number was {}.",
            session.secret()
        ))?;
    }

    Ok(())
}

/// Run the interactive loop until the player declines another round or the
/// input stream closes.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rng: &mut GameRng,
) -> io::Result<()> {
    console.write_line("--- Welcome to the Number Guessing Game! ---")?;

    loop {
        let round = console.choose_difficulty().map(|difficulty| {
            GameSession::new(difficulty, rng)
        });

        let played = match round {
            Ok(mut session) => play_round(console, &mut session),
            Err(e) => Err(e),
        };

        if played.is_err() {
            // Stream closed or failed; leave quietly.
            let _ = console.write_line("\nExiting game...");
            return Ok(());
        }

        match console.read_yes_no("\nPlay again? (Y/N): ") {
            Ok(true) => {}
            Ok(false) => {
                console.write_line("\nThanks for playing! Goodbye.")?;
                return Ok(());
            }
            Err(_) => {
                let _ = console.write_line("\nExiting game...");
                return Ok(());
            }
        }
    }
}
