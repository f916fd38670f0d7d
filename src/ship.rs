//! Ships: a straight run of cells anchored at an origin.

use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends towards increasing column.
    Horizontal,
    /// Extends towards increasing row.
    Vertical,
}

impl Orientation {
    /// Cell `offset` steps from (row, col) along this orientation.
    #[inline]
    pub fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

/// A ship placed on an N×N board. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    length: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Build a ship of `length` cells starting at (`row`, `col`).
    pub fn new(
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        if row >= N || col >= N || length > N {
            return Err(BoardError::ShipOutOfBounds);
        }
        let (end_row, end_col) = orientation.step(row, col, length - 1);
        if end_row >= N || end_col >= N {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut mask = BitBoard::new();
        for i in 0..length {
            let (r, c) = orientation.step(row, col, i);
            mask.set(r, c)?;
        }
        Ok(Ship {
            length,
            orientation,
            row,
            col,
            mask,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Start cell (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }

    /// Cells in placement order, from the origin outward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.length).map(move |i| orientation.step(row, col, i))
    }

    /// Whether every cell of the ship is set in `hits`.
    pub fn is_sunk(&self, hits: &BitBoard<T, N>) -> bool {
        (self.mask & *hits) == self.mask
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }
}
