//! Parsing of player input lines.

use core::fmt;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fire at (row, col).
    Fire { row: usize, col: usize },
    Quit,
}

/// Why a guess could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessParseError {
    /// Expected exactly `row,column`.
    WrongTokenCount(usize),
    /// Row is not a decimal integer.
    InvalidRow,
    /// Column is not a decimal integer.
    InvalidColumn,
    RowOutOfRange(i64),
    ColumnOutOfRange(i64),
}

impl fmt::Display for GuessParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessParseError::WrongTokenCount(n) => {
                write!(f, "expected 'row,column', got {} comma-separated part(s)", n)
            }
            GuessParseError::InvalidRow => write!(f, "row is not a number"),
            GuessParseError::InvalidColumn => write!(f, "column is not a number"),
            GuessParseError::RowOutOfRange(r) => write!(f, "row {} is off the board", r),
            GuessParseError::ColumnOutOfRange(c) => write!(f, "column {} is off the board", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GuessParseError {}

/// Parse `"<row>,<column>"` on a `grid_size`×`grid_size` board.
///
/// Both parts must be decimal integers in `[0, grid_size)`. Whitespace is not
/// trimmed.
pub fn parse_guess(input: &str, grid_size: usize) -> Result<(usize, usize), GuessParseError> {
    let parts = input.split(',').count();
    let (row_str, col_str) = match input.split_once(',') {
        Some(pair) if parts == 2 => pair,
        _ => return Err(GuessParseError::WrongTokenCount(parts)),
    };

    let row: i64 = row_str.parse().map_err(|_| GuessParseError::InvalidRow)?;
    let row = usize::try_from(row)
        .ok()
        .filter(|&r| r < grid_size)
        .ok_or(GuessParseError::RowOutOfRange(row))?;

    let col: i64 = col_str.parse().map_err(|_| GuessParseError::InvalidColumn)?;
    let col = usize::try_from(col)
        .ok()
        .filter(|&c| c < grid_size)
        .ok_or(GuessParseError::ColumnOutOfRange(col))?;

    Ok((row, col))
}

/// Parse a full input line: the quit token or a guess.
pub fn parse_command(
    input: &str,
    grid_size: usize,
    quit_token: &str,
) -> Result<Command, GuessParseError> {
    if input == quit_token {
        return Ok(Command::Quit);
    }
    let (row, col) = parse_guess(input, grid_size)?;
    Ok(Command::Fire { row, col })
}
