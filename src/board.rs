//! Hidden board: random fleet placement with adjacency exclusion.

use alloc::vec::Vec;
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, GuessResult};
use crate::ship::{Orientation, Ship};

/// Outcome of a bounded search for a ship position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    /// A valid position was found. The ship is not yet on the board.
    Placed(Ship<T, N>),
    /// Every draw was rejected.
    Exhausted { attempts: usize },
}

/// Whether a ship of `length` starting at (`row`, `col`) fits on `grid`.
///
/// Every cell must lie inside the grid, be empty, and have no occupied cell
/// among its 8 neighbours. Cells of the candidate itself are not on the grid
/// yet, so they never block each other.
pub fn can_place<T, const N: usize>(
    grid: &BitBoard<T, N>,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> bool
where
    T: PrimInt + Unsigned + Zero,
{
    if length == 0 || length > N || row >= N || col >= N {
        return false;
    }
    (0..length).all(|i| {
        let (r, c) = orientation.step(row, col, i);
        match BitBoard::<T, N>::neighborhood(r, c) {
            Ok(around) => (*grid & around).is_empty(),
            Err(_) => false,
        }
    })
}

/// Occupancy grid plus the ships placed on it, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: BitBoard<T, N>,
    ships: Vec<Ship<T, N>>,
}

impl<T, const N: usize> Board<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Board with no ships.
    pub fn new() -> Self {
        Board {
            grid: BitBoard::new(),
            ships: Vec::new(),
        }
    }

    /// Place one ship per entry of `lengths`, in order, at random.
    ///
    /// Each ship gets at most `max_attempts` random draws. Fails with
    /// `PlacementExhausted` if a ship cannot be placed, and with
    /// `SizeTooLarge` if the grid does not fit in `T`.
    pub fn generate<R: Rng>(
        lengths: &[usize],
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Self, BoardError> {
        let mut board = Board {
            grid: BitBoard::try_new()?,
            ships: Vec::with_capacity(lengths.len()),
        };
        for &length in lengths {
            match board.try_place(rng, length, max_attempts)? {
                Placement::Placed(ship) => board.commit(ship),
                Placement::Exhausted { attempts } => {
                    log::error!(
                        "gave up placing ship of length {} after {} attempts ({} ships placed)",
                        length,
                        attempts,
                        board.ships.len()
                    );
                    return Err(BoardError::PlacementExhausted { length, attempts });
                }
            }
        }
        log::debug!(
            "generated {}x{} board: {} ships, {} cells occupied",
            N,
            N,
            board.ships.len(),
            board.grid.count_ones()
        );
        Ok(board)
    }

    /// Draw random start cells and orientations until one validates.
    ///
    /// Does not modify the board; the caller decides whether to keep the ship.
    pub fn try_place<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
        max_attempts: usize,
    ) -> Result<Placement<T, N>, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        if length > N {
            return Ok(Placement::Exhausted { attempts: 0 });
        }
        for attempt in 1..=max_attempts {
            let row = rng.random_range(0..N);
            let col = rng.random_range(0..N);
            let orientation = if rng.random::<bool>() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if can_place(&self.grid, row, col, length, orientation) {
                let ship = Ship::new(length, orientation, row, col)?;
                log::debug!(
                    "placed ship of length {} at ({}, {}) {:?} after {} attempts",
                    length,
                    row,
                    col,
                    orientation,
                    attempt
                );
                return Ok(Placement::Placed(ship));
            }
        }
        Ok(Placement::Exhausted {
            attempts: max_attempts,
        })
    }

    /// Add a ship at a fixed position, enforcing the same rules as generation.
    pub fn place(&mut self, ship: Ship<T, N>) -> Result<(), BoardError> {
        if !(self.grid & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        let (row, col) = ship.origin();
        if !can_place(&self.grid, row, col, ship.length(), ship.orientation()) {
            return Err(BoardError::ShipTouches);
        }
        self.commit(ship);
        Ok(())
    }

    fn commit(&mut self, ship: Ship<T, N>) {
        self.grid |= ship.mask();
        self.ships.push(ship);
    }

    /// Occupancy grid.
    pub fn grid(&self) -> &BitBoard<T, N> {
        &self.grid
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship<T, N>] {
        &self.ships
    }

    /// Ship covering (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship<T, N>> {
        self.ships.iter().find(|s| s.contains(row, col))
    }

    /// `Hit` iff (row, col) is occupied.
    pub fn resolve(&self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        if self.grid.get(row, col)? {
            Ok(GuessResult::Hit)
        } else {
            Ok(GuessResult::Miss)
        }
    }
}

impl<T, const N: usize> Default for Board<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}
