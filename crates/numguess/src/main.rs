//! Console number-guessing game
//!
//! Main entry point: wires the locked stdin/stdout to the console layer
//! and runs the interactive loop with an entropy-seeded RNG.

mod console;
mod game;

use std::io;

use ng_core::GameRng;

use crate::console::Console;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut rng = GameRng::from_entropy();

    game::run(&mut console, &mut rng)
}
