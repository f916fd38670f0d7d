#![cfg(feature = "std")]

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::string::String;

use num_traits::{PrimInt, Unsigned, Zero};

use crate::game::GuessOverlay;

fn separator(out: &mut String, n: usize) {
    out.push_str("   ");
    out.push_str(&"----".repeat(n));
    out.push_str("-\n");
}

/// Render the guess grid with row and column headers.
///
/// ```text
///      0   1 ...
///    ---------...
///  0 | . | # | O |...
/// ```
pub fn render_guesses<T, const N: usize>(overlay: &GuessOverlay<T, N>) -> String
where
    T: PrimInt + Unsigned + Zero,
{
    let mut out = String::from("\nYour guesses:\n    ");
    for c in 0..N {
        let _ = write!(out, "{:2}  ", c);
    }
    out.push('\n');
    separator(&mut out, N);

    for r in 0..N {
        let _ = write!(out, "{:2} |", r);
        for c in 0..N {
            let mark = overlay.mark(r, c).map(|m| m.symbol()).unwrap_or('?');
            let _ = write!(out, " {} |", mark);
        }
        out.push('\n');
        separator(&mut out, N);
    }
    out
}

/// Render remaining ship counts, longest ships first, as `2x ###`.
pub fn render_remaining(remaining: &BTreeMap<usize, usize>) -> String {
    let mut out = String::from("\nShips left to find:\n");
    for (&length, &count) in remaining.iter().rev() {
        let _ = writeln!(out, "{}x {}", count, "#".repeat(length));
    }
    out
}
