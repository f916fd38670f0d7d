//! Common types: guess results and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Outcome of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The cell is occupied by a ship.
    Hit,
    /// Open water.
    Miss,
}

/// Errors returned by board generation, placement and guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (grid too large, index out of range).
    BitBoardError(BitBoardError),
    /// Ships must be at least one cell long.
    InvalidLength,
    /// Ship would extend past the grid edge.
    ShipOutOfBounds,
    /// Ship would share a cell with a placed ship.
    ShipOverlaps,
    /// Ship would sit next to a placed ship, diagonals included.
    ShipTouches,
    /// Cell was already guessed.
    AlreadyGuessed,
    /// No valid position was found for a ship within the retry ceiling.
    PlacementExhausted { length: usize, attempts: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidLength => write!(f, "Ship length must be at least 1"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipTouches => write!(f, "Ship placement touches another ship"),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            BoardError::PlacementExhausted { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::BitBoardError(e) => Some(e),
            _ => None,
        }
    }
}
