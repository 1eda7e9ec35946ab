//! Random fleet placement by rejection sampling.
//!
//! Each ship gets a uniformly random anchor and orientation until the board
//! accepts it. A single attempt budget is shared by the whole fleet; running
//! out of it discards the board, and [`random_board`] starts over on an empty
//! one.

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::board::Board;
use crate::common::{BoardError, Coordinate};
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The shared attempt budget ran out before every ship found a spot.
    #[error("gave up placing the fleet after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
    /// The board itself could not be built.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Place the standard fleet on a fresh `size×size` board.
pub fn place_fleet<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Board, PlacementError> {
    place_fleet_with(rng, size, &FLEET, MAX_PLACEMENT_ATTEMPTS)
}

/// Place ships of the given `lengths`, in order, using at most
/// `max_attempts` random tries in total.
///
/// The returned board has its targeting memory reset and is ready for play.
pub fn place_fleet_with<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    lengths: &[usize],
    max_attempts: usize,
) -> Result<Board, PlacementError> {
    let mut board = Board::new(size)?;
    let mut attempts = 0;
    for &length in lengths {
        loop {
            if attempts >= max_attempts {
                return Err(PlacementError::AttemptsExhausted { attempts });
            }
            attempts += 1;
            let anchor = Coordinate::new(
                rng.random_range(0..size as i32),
                rng.random_range(0..size as i32),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match board.place_ship(Ship::new(anchor, length, orientation)) {
                Ok(()) => break,
                Err(BoardError::OutOfBounds(_) | BoardError::Overlap(_)) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
    debug!(
        "placed {} ships on a {}x{} board in {} attempts",
        lengths.len(),
        size,
        size,
        attempts
    );
    board.reset_targeting_memory();
    Ok(board)
}

/// Keep calling [`place_fleet`] until one attempt succeeds.
///
/// Only a board that cannot exist at all (bad size) is reported as an error.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Board, BoardError> {
    let mut restarts = 0usize;
    loop {
        match place_fleet(rng, size) {
            Ok(board) => return Ok(board),
            Err(PlacementError::AttemptsExhausted { attempts }) => {
                restarts += 1;
                debug!(
                    "fleet placement exhausted after {} attempts, restart #{}",
                    attempts, restarts
                );
            }
            Err(PlacementError::Board(e)) => return Err(e),
        }
    }
}
