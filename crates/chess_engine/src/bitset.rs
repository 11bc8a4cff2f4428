//! # Bitboard - One Bit per Square
//!
//! ## Overview
//!
//! A [`Bitboard`] is a single `u64` where bit *i* marks square *i*. The position keeps one
//! bitboard per (color, piece kind) pair plus cached color and occupancy unions, and the
//! move generator works almost entirely in terms of bitboard intersections.
//!
//! ## Square Mapping
//!
//! - Bit 0 = A1 (bottom-left for white)
//! - Bit 7 = H1
//! - Bit 56 = A8
//! - Bit 63 = H8
//!
//! Common operations:
//! - **Insert**: `bitboard |= 1 << square`
//! - **Remove**: `bitboard &= !(1 << square)`
//! - **Contains**: `bitboard & (1 << square) != 0`
//! - **Count**: `count_ones()` compiles to POPCNT
//! - **Iterate**: repeatedly pop the least significant set bit
//!
//! ## Further Reading
//!
//! - **Chess Programming Wiki - Bitboards**: https://www.chessprogramming.org/Bitboards

use crate::types::Square;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub fn new() -> Self {
        Bitboard(0)
    }

    #[inline]
    pub const fn from_square(square: Square) -> Self {
        Bitboard(1u64 << square)
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square;
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !(1u64 << square);
    }

    #[inline]
    pub fn toggle(&mut self, square: Square) {
        self.0 ^= 1u64 << square;
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        (self.0 & (1u64 << square)) != 0
    }

    #[inline]
    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Lowest set square, if any.
    #[inline]
    pub fn lsb(&self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as Square)
        }
    }

    /// Highest set square, if any.
    #[inline]
    pub fn msb(&self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(63 - self.0.leading_zeros() as Square)
        }
    }

    /// Removes and returns the lowest set square.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        let square = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(square)
    }
}

impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.pop_lsb()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count_ones() as usize;
        (n, Some(n))
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut bb = Bitboard::new();
        bb.insert(0);
        bb.insert(63);
        assert!(bb.contains(0));
        assert!(bb.contains(63));
        assert!(!bb.contains(27));
        assert_eq!(bb.count_ones(), 2);

        bb.remove(0);
        assert!(!bb.contains(0), "Removed square should be empty");
        assert_eq!(bb.count_ones(), 1);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let bb = Bitboard(0x8000_0000_0000_0081);
        let squares: Vec<Square> = bb.collect();
        assert_eq!(squares, vec![0, 7, 63]);
    }

    #[test]
    fn test_lsb_msb() {
        let bb = Bitboard(0b1010_0000);
        assert_eq!(bb.lsb(), Some(5));
        assert_eq!(bb.msb(), Some(7));
        assert_eq!(Bitboard::EMPTY.lsb(), None);
        assert_eq!(Bitboard::EMPTY.msb(), None);
    }
}
