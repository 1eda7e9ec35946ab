//! Common types for the sea battle engine: coordinates, shot results and
//! board errors.

use core::fmt;
use thiserror::Error;

use crate::bitboard::BitBoardError;

/// A cell position on the grid, zero-based.
///
/// Components are signed so that off-board targets such as `(-1, 2)` can be
/// represented and rejected by the board instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// The 3×3 block centred on this cell, the cell itself included.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }
}

/// Shown the way players type it: one-based "row col".
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot missed all ships.
    Miss,
    /// Shot hit the last intact cell of a ship.
    Sunk,
}

impl ShotResult {
    /// A hit on a live ship lets the shooter fire again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotResult::Hit)
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotResult::Hit => write!(f, "Hit!"),
            ShotResult::Miss => write!(f, "Miss!"),
            ShotResult::Sunk => write!(f, "Ship destroyed!"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    #[error("cell {0} is outside the board")]
    OutOfBounds(Coordinate),
    /// Coordinate was already shot at, or revealed around a sunk ship.
    #[error("cell {0} was already targeted")]
    AlreadyTargeted(Coordinate),
    /// Ship placement overlaps or touches another ship.
    #[error("cell {0} is taken by another ship or its buffer")]
    Overlap(Coordinate),
    /// Underlying bitboard error (e.g., unsupported board size).
    #[error("bitboard error: {0}")]
    BitBoard(#[from] BitBoardError),
}
