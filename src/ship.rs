//! Ship definitions: a straight line of cells grown from an anchor.

use core::fmt;

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells run along the row, column increasing.
    Horizontal,
    /// Cells run down the column, row increasing.
    Vertical,
}

/// A ship with its position and the number of cells not yet hit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    anchor: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// Build an intact ship of `length` cells starting at `anchor`.
    ///
    /// Nothing is checked against a grid here; `Board::place_ship` does that.
    pub fn new(anchor: Coordinate, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length > 0, "ship length must be positive");
        Self {
            anchor,
            length,
            orientation,
            remaining: length,
        }
    }

    /// The `length` cells of the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (anchor, orientation) = (self.anchor, self.orientation);
        (0..self.length as i32).map(move |i| match orientation {
            Orientation::Horizontal => anchor.offset(0, i),
            Orientation::Vertical => anchor.offset(i, 0),
        })
    }

    /// Returns `true` if `target` is one of the ship's cells.
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Take one point of damage. Returns `true` if this hit sank the ship.
    pub fn register_hit(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining_hits(&self) -> usize {
        self.remaining
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ anchor: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.anchor.row, self.anchor.col, self.length, self.orientation, self.remaining,
        )
    }
}
