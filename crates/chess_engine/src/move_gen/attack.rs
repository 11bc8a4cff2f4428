//! Attack detection and square checking
//!
//! Answers "is this square attacked by that color" without generating moves. The test
//! runs in reverse: from the target square, look up each piece type's attack pattern and
//! intersect it with the attacker's pieces of that type. Pawn attacks are looked up with
//! the defending color's table, since a white pawn attacks a square exactly when a black
//! pawn on that square would attack the white pawn.
//!
//! ## Performance
//!
//! Called for every castling transit square and once per candidate move in the legality
//! filter, so it stays allocation-free and table driven.

use super::sliding::{bishop_attacks, rook_attacks};
use super::AttackTables;
use crate::bitset::Bitboard;
use crate::position::Position;
use crate::types::{Color, PieceKind, Square};

impl AttackTables {
    /// True if any piece of `by` attacks `square` in the current position.
    pub fn is_square_attacked(&self, position: &Position, square: Square, by: Color) -> bool {
        self.is_attacked_with(position, square, by, position.occupied(), Bitboard::EMPTY)
    }

    /// Attack test against a hypothetical occupancy. Attackers on `removed` are ignored,
    /// which lets the legality filter test a simple move without applying it.
    pub(crate) fn is_attacked_with(
        &self,
        position: &Position,
        square: Square,
        by: Color,
        occupied: Bitboard,
        removed: Bitboard,
    ) -> bool {
        if square >= 64 {
            return false;
        }
        let live = !removed;
        let sq = square as usize;
        let pieces = |kind: PieceKind| position.pieces_of(by, kind) & live;

        if !(self.pawn_attacks(by.opposite(), square) & pieces(PieceKind::Pawn)).is_empty() {
            return true;
        }
        if !(self.knight[sq] & pieces(PieceKind::Knight)).is_empty() {
            return true;
        }
        if !(self.king[sq] & pieces(PieceKind::King)).is_empty() {
            return true;
        }

        let queens = pieces(PieceKind::Queen);
        let diagonal = pieces(PieceKind::Bishop) | queens;
        if !diagonal.is_empty() && !(bishop_attacks(self, square, occupied) & diagonal).is_empty() {
            return true;
        }
        let straight = pieces(PieceKind::Rook) | queens;
        !straight.is_empty() && !(rook_attacks(self, square, occupied) & straight).is_empty()
    }
}
