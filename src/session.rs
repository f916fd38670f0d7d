#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::vec::Vec;

use num_traits::{PrimInt, Unsigned, Zero};

use crate::{
    command::{parse_command, Command},
    common::{BoardError, GuessResult},
    game::{GameEngine, GameStatus},
    ui::{render_guesses, render_remaining},
};

/// Totals reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub shots: usize,
    pub hits: usize,
    pub ships_sunk: usize,
}

/// Run the interactive guessing loop until the quit token or end of input.
///
/// Malformed input and repeat guesses are reported and re-prompted; only I/O
/// failures end the session with an error.
pub fn run_session<T, const N: usize, I, O>(
    engine: &mut GameEngine<T, N>,
    quit_token: &str,
    mut input: I,
    mut out: O,
) -> anyhow::Result<SessionSummary>
where
    T: PrimInt + Unsigned + Zero,
    I: BufRead,
    O: Write,
{
    writeln!(out, "Welcome to Battleship!")?;
    writeln!(out, "Try to guess the ship placements on the board.")?;
    writeln!(
        out,
        "Enter your guesses in the format 'row,column' (e.g., '2,3')."
    )?;

    let mut line = Vec::new();
    loop {
        write!(out, "{}", render_guesses(engine.guesses()))?;
        write!(out, "Enter your guess (or '{}' to quit): ", quit_token)?;
        out.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            log::info!("input closed, ending session");
            writeln!(out)?;
            break;
        }
        let raw = line.strip_suffix(b"\n").unwrap_or(&line[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let entry = match core::str::from_utf8(raw) {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("rejected non-UTF-8 input: {}", e);
                writeln!(out, "Invalid input. Please enter a valid guess.")?;
                continue;
            }
        };

        let (row, col) = match parse_command(entry, N, quit_token) {
            Ok(Command::Quit) => break,
            Ok(Command::Fire { row, col }) => (row, col),
            Err(e) => {
                log::debug!("rejected input {:?}: {}", entry, e);
                writeln!(out, "Invalid input. Please enter a valid guess.")?;
                continue;
            }
        };

        match engine.fire(row, col) {
            Ok(GuessResult::Hit) => writeln!(out, "Hit!")?,
            Ok(GuessResult::Miss) => writeln!(out, "Miss!")?,
            Err(BoardError::AlreadyGuessed) => {
                writeln!(out, "You already guessed that spot!")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        if let Some(ship) = engine.sunk_by(row, col) {
            writeln!(out, "Ship of length {} sunk!", ship.length())?;
            if engine.status() == GameStatus::Won {
                writeln!(out, "All ships sunk! Type '{}' to quit.", quit_token)?;
            }
        }
        write!(out, "{}", render_remaining(&engine.remaining_by_length()))?;
    }

    writeln!(out, "Thanks for playing!")?;
    out.flush()?;

    let summary = SessionSummary {
        shots: engine.guesses().guesses(),
        hits: engine.guesses().hits().count_ones(),
        ships_sunk: engine.sunk_ships().len(),
    };
    log::info!(
        "session over: {} shots, {} hits, {} ships sunk",
        summary.shots,
        summary.hits,
        summary.ships_sunk
    );
    Ok(summary)
}
