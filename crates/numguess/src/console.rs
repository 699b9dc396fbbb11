//! Line-oriented console I/O
//!
//! All prompts go through [`Console`], which is generic over its reader and
//! writer so tests can drive it with in-memory buffers. Validation retries
//! indefinitely on bad input; only a closed or failing input stream stops a
//! read, surfacing as [`ReadError::Aborted`] for the driver to handle.

use std::io::{self, BufRead, ErrorKind, Write};

use ng_core::Difficulty;
use strum::IntoEnumIterator;
use thiserror::Error;

/// A console read that could not complete
#[derive(Error, Debug)]
pub enum ReadError {
    /// Input ended (EOF) or the read was interrupted
    #[error("input stream closed")]
    Aborted,

    /// Other console I/O failure
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Blocking line-based console over a reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line to the player
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Consume the console and return its writer, to inspect what was
    /// printed
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt (no trailing newline) and read one trimmed line.
    ///
    /// A 0-byte read means the stream is closed; that and an interrupted
    /// read both surface as [`ReadError::Aborted`].
    fn prompt_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(ReadError::Aborted),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::Interrupted => Err(ReadError::Aborted),
            Err(e) => Err(ReadError::Io(e)),
        }
    }

    /// Read an integer, re-prompting indefinitely on malformed input.
    ///
    /// No range restriction is applied here; the caller range-checks.
    pub fn read_int(&mut self, prompt: &str) -> Result<i64, ReadError> {
        loop {
            let line = self.prompt_line(prompt)?;
            if line.is_empty() {
                self.write_line("Input cannot be empty. Please enter a number.")?;
                continue;
            }
            match line.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    self.write_line("That was no valid number. Please enter an integer.")?;
                }
            }
        }
    }

    /// Read a case-insensitive yes/no answer, re-prompting on anything else
    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool, ReadError> {
        loop {
            let answer = self.prompt_line(prompt)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    self.write_line("Invalid input. Please enter 'Y' or 'N'.")?;
                }
            }
        }
    }

    /// Show the difficulty menu and read a choice, re-prompting on
    /// unrecognized keys
    pub fn choose_difficulty(&mut self) -> Result<Difficulty, ReadError> {
        self.write_line("\n--- Select Difficulty ---")?;
        for level in Difficulty::iter() {
            self.write_line(level.label())?;
        }

        loop {
            let choice = self.prompt_line("Enter your choice (1, 2, or 3): ")?;
            match Difficulty::from_key(&choice) {
                Some(level) => return Ok(level),
                None => {
                    self.write_line("Invalid choice. Please select 1, 2, or 3.")?;
                }
            }
        }
    }
}
