//! A square bitboard whose side length is chosen at runtime.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as a `size×size` grid packed into an unsigned integer `T`,
//! row-major, so a `u128` covers every grid up to 11×11.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};
use thiserror::Error;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitBoardError {
    /// Requested board size*size exceeds capacity of `T::BITS`.
    #[error("SizeTooLarge: {size}x{size} exceeds {capacity} bits")]
    SizeTooLarge { size: usize, capacity: usize },
    /// A board needs at least one cell.
    #[error("ZeroSize: a board needs at least one row")]
    ZeroSize,
    /// Row or column index is out of bounds [0..size).
    #[error("IndexOutOfBounds: row={row}, col={col}")]
    IndexOutOfBounds { row: usize, col: usize },
}

/// A `size×size` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    size: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty board, failing if `size*size` does not fit into `T`.
    pub fn with_size(size: usize) -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if size == 0 {
            Err(BitBoardError::ZeroSize)
        } else if size * size > capacity {
            Err(BitBoardError::SizeTooLarge { size, capacity })
        } else {
            Ok(BitBoard {
                bits: T::zero(),
                size,
            })
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= self.size || col >= self.size {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.size + col)
        }
    }

    /// Iterator over the set bits of the board as `(row, col)`.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard {}x{}:", self.size, self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if ((self.bits >> (r * self.size + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<T> Iterator for SetBits<'_, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let size = self.board.size;
        while self.idx < size * size {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / size, idx % size));
            }
        }
        None
    }
}

/// Bitwise AND for intersecting two boards of the same size.
impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        BitBoard {
            bits: self.bits & rhs.bits,
            size: self.size,
        }
    }
}

/// Bitwise OR for combining two boards of the same size.
impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        BitBoard {
            bits: self.bits | rhs.bits,
            size: self.size,
        }
    }
}

impl<T> BitOrAssign for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        debug_assert_eq!(self.size, rhs.size);
        self.bits = self.bits | rhs.bits;
    }
}
