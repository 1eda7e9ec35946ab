//! Game board state: ship placement, shot resolution and rendering.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coordinate, ShotResult};
use crate::ship::Ship;

type BB = BitBoard<u128>;

/// What a single grid cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Intact ship segment.
    Ship,
    Hit,
    Miss,
    /// Cell next to a sunk ship, known to be empty.
    Revealed,
}

impl Cell {
    /// Console glyph. Hidden ship segments look like water.
    pub fn symbol(self, reveal_ships: bool) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship if reveal_ships => '■',
            Cell::Ship => 'O',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
            Cell::Revealed => '*',
        }
    }
}

/// One player's grid with its fleet.
///
/// `occupied` plays two roles. While ships are being placed it holds every
/// ship cell plus the buffer around it, so no later ship can touch an earlier
/// one. Once play begins (see [`Board::reset_targeting_memory`]) it holds the
/// cells that can no longer be targeted: shots fired and the buffer revealed
/// around sunk ships.
#[derive(Clone)]
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    occupied: BB,
    sunk: usize,
    reveal_ships: bool,
}

impl Board {
    /// Create an empty `size×size` board with ships shown.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let occupied = BB::with_size(size)?;
        Ok(Board {
            size,
            grid: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            occupied,
            sunk: 0,
            reveal_ships: true,
        })
    }

    /// Hide intact ship segments when rendering (the opponent's view).
    pub fn hidden(mut self) -> Self {
        self.reveal_ships = false;
        self
    }

    pub fn set_reveal_ships(&mut self, reveal: bool) {
        self.reveal_ships = reveal;
    }

    pub fn reveals_ships(&self) -> bool {
        self.reveal_ships
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships in the order they were placed.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships with no intact cells left.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` when a fleet is on the board and all of it is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// Returns `true` if `target` lies inside the grid.
    pub fn contains(&self, target: Coordinate) -> bool {
        self.index(target).is_some()
    }

    /// State of the cell at `target`, or `None` off the board.
    pub fn cell(&self, target: Coordinate) -> Option<Cell> {
        self.index(target).map(|(r, c)| self.grid[r * self.size + c])
    }

    /// Returns `true` if a shot at `target` would be rejected as a repeat.
    pub fn is_targeted(&self, target: Coordinate) -> bool {
        self.index(target)
            .and_then(|(r, c)| self.occupied.get(r, c).ok())
            .unwrap_or(false)
    }

    /// Put `ship` on the board and reserve the buffer around it.
    ///
    /// Fails with `OutOfBounds` or `Overlap` naming the first offending cell;
    /// the board is left untouched in that case.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            let (r, c) = self.index(cell).ok_or(BoardError::OutOfBounds(cell))?;
            if self.occupied.get(r, c)? {
                return Err(BoardError::Overlap(cell));
            }
        }
        for cell in ship.cells() {
            let (r, c) = self.index(cell).ok_or(BoardError::OutOfBounds(cell))?;
            self.grid[r * self.size + c] = Cell::Ship;
            self.occupied.set(r, c)?;
        }
        self.ships.push(ship);
        self.contour(&ship, false)
    }

    /// Fire at `target`.
    ///
    /// A hit on a ship that stays afloat returns [`ShotResult::Hit`], which
    /// grants the shooter another turn. Sinking a ship marks its buffer as
    /// revealed and makes those cells untargetable.
    pub fn apply_shot(&mut self, target: Coordinate) -> Result<ShotResult, BoardError> {
        let (r, c) = self.index(target).ok_or(BoardError::OutOfBounds(target))?;
        if self.occupied.get(r, c)? {
            return Err(BoardError::AlreadyTargeted(target));
        }
        self.occupied.set(r, c)?;

        let Some(idx) = self.ships.iter().position(|s| s.is_hit_by(target)) else {
            self.grid[r * self.size + c] = Cell::Miss;
            return Ok(ShotResult::Miss);
        };
        self.grid[r * self.size + c] = Cell::Hit;
        if !self.ships[idx].register_hit() {
            return Ok(ShotResult::Hit);
        }

        self.sunk += 1;
        let ship = self.ships[idx];
        info!(
            "ship of length {} at ({}, {}) sunk, {} of {} down",
            ship.length(),
            ship.anchor().row,
            ship.anchor().col,
            self.sunk,
            self.ships.len()
        );
        self.contour(&ship, true)?;
        Ok(ShotResult::Sunk)
    }

    /// Forget the placement-time reservations so that shot tracking starts
    /// empty. Ship positions remain known through the fleet itself.
    pub fn reset_targeting_memory(&mut self) {
        debug!(
            "clearing {} placement reservations",
            self.occupied.count_ones()
        );
        self.occupied.clear_all();
    }

    /// Textual grid with one-based row and column labels.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Reserve every free cell touching `ship`. With `reveal`, those cells
    /// are also marked on the grid.
    fn contour(&mut self, ship: &Ship, reveal: bool) -> Result<(), BoardError> {
        for cell in ship.cells() {
            for near in cell.neighborhood() {
                let Some((r, c)) = self.index(near) else {
                    continue;
                };
                if !self.occupied.get(r, c)? {
                    if reveal {
                        self.grid[r * self.size + c] = Cell::Revealed;
                    }
                    self.occupied.set(r, c)?;
                }
            }
        }
        Ok(())
    }

    fn index(&self, target: Coordinate) -> Option<(usize, usize)> {
        let size = self.size as i32;
        if (0..size).contains(&target.row) && (0..size).contains(&target.col) {
            Some((target.row as usize, target.col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 0..self.size {
            write!(f, " {} |", c + 1)?;
        }
        for r in 0..self.size {
            write!(f, "\n{} |", r + 1)?;
            for c in 0..self.size {
                let cell = self.grid[r * self.size + c];
                write!(f, " {} |", cell.symbol(self.reveal_ships))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  sunk: {},\n  occupied: {:?},\n  ships: {:?}\n}}",
            self.size, self.sunk, self.occupied, self.ships
        )
    }
}
