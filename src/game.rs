use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::{
    bitboard::BitBoard,
    board::Board,
    common::{BoardError, GuessResult},
    ship::Ship,
};

/// Player-visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Unguessed,
    Hit,
    Miss,
}

impl Mark {
    /// Character used when rendering the guess grid.
    pub fn symbol(self) -> char {
        match self {
            Mark::Unguessed => '.',
            Mark::Hit => '#',
            Mark::Miss => 'O',
        }
    }
}

/// The player's guesses against the hidden board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessOverlay<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    hits: BitBoard<T, N>,
    misses: BitBoard<T, N>,
}

impl<T, const N: usize> GuessOverlay<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Overlay with every cell unguessed.
    pub fn new() -> Self {
        Self {
            hits: BitBoard::new(),
            misses: BitBoard::new(),
        }
    }

    pub fn hits(&self) -> BitBoard<T, N> {
        self.hits
    }

    pub fn misses(&self) -> BitBoard<T, N> {
        self.misses
    }

    pub fn mark(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        if self.hits.get(row, col)? {
            Ok(Mark::Hit)
        } else if self.misses.get(row, col)? {
            Ok(Mark::Miss)
        } else {
            Ok(Mark::Unguessed)
        }
    }

    /// Record the outcome of a guess. A cell can only be marked once.
    pub fn record(&mut self, row: usize, col: usize, result: GuessResult) -> Result<(), BoardError> {
        if self.mark(row, col)? != Mark::Unguessed {
            return Err(BoardError::AlreadyGuessed);
        }
        match result {
            GuessResult::Hit => self.hits.set(row, col)?,
            GuessResult::Miss => self.misses.set(row, col)?,
        }
        Ok(())
    }

    /// Number of cells guessed so far.
    pub fn guesses(&self) -> usize {
        self.hits.count_ones() + self.misses.count_ones()
    }
}

/// Ships whose every cell is marked as hit, in fleet order.
///
/// Recomputed from the overlay on each call; neither argument is modified.
pub fn sunk_ships<'a, T, const N: usize>(
    overlay: &GuessOverlay<T, N>,
    ships: &'a [Ship<T, N>],
) -> Vec<&'a Ship<T, N>>
where
    T: PrimInt + Unsigned + Zero,
{
    ships
        .iter()
        .filter(|ship| ship.is_sunk(&overlay.hits))
        .collect()
}

/// Count of ships not yet sunk, keyed by length. Lengths with nothing left
/// are omitted.
pub fn remaining_by_length<T, const N: usize>(
    overlay: &GuessOverlay<T, N>,
    ships: &[Ship<T, N>],
) -> BTreeMap<usize, usize>
where
    T: PrimInt + Unsigned + Zero,
{
    let mut remaining = BTreeMap::new();
    for ship in ships {
        if !ship.is_sunk(&overlay.hits) {
            *remaining.entry(ship.length()).or_insert(0) += 1;
        }
    }
    remaining
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Every ship has been sunk.
    Won,
}

/// Core game logic: the hidden board and the player's guesses against it.
#[derive(Debug, Clone)]
pub struct GameEngine<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: Board<T, N>,
    guesses: GuessOverlay<T, N>,
}

impl<T, const N: usize> GameEngine<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Start a game against `board` with no guesses made.
    pub fn new(board: Board<T, N>) -> Self {
        Self {
            board,
            guesses: GuessOverlay::new(),
        }
    }

    /// The hidden board.
    pub fn board(&self) -> &Board<T, N> {
        &self.board
    }

    pub fn guesses(&self) -> &GuessOverlay<T, N> {
        &self.guesses
    }

    /// Fire at (row, col): resolve against the board and mark the overlay.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        let result = self.board.resolve(row, col)?;
        self.guesses.record(row, col, result)?;
        Ok(result)
    }

    pub fn sunk_ships(&self) -> Vec<&Ship<T, N>> {
        sunk_ships(&self.guesses, self.board.ships())
    }

    /// The ship sunk by the shot at (row, col), if that shot completed one.
    pub fn sunk_by(&self, row: usize, col: usize) -> Option<&Ship<T, N>> {
        self.sunk_ships()
            .into_iter()
            .find(|ship| ship.contains(row, col))
    }

    pub fn remaining_by_length(&self) -> BTreeMap<usize, usize> {
        remaining_by_length(&self.guesses, self.board.ships())
    }

    pub fn status(&self) -> GameStatus {
        if self.sunk_ships().len() == self.board.ships().len() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
