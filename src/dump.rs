#![cfg(feature = "std")]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use num_traits::{PrimInt, Unsigned, Zero};

use crate::board::Board;

/// Write the occupancy grid to `path`: one row per line, `0`/`1` separated
/// by spaces. Diagnostic only; nothing reads it back.
pub fn write_board_dump<T, const N: usize>(path: &Path, board: &Board<T, N>) -> io::Result<()>
where
    T: PrimInt + Unsigned + Zero,
{
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{}", board.grid())?;
    out.flush()?;
    log::debug!("wrote board dump to {}", path.display());
    Ok(())
}
