//! Pseudo-legal move generation with precomputed attack tables
//!
//! This module generates every move that obeys piece movement and blocking rules for the
//! side to move. Moves that leave the mover's own king attacked are still emitted; the
//! legality filter in [`crate::legality`] removes them.
//!
//! ## Module Organization
//!
//! - `tables` - Per-square knight, king, pawn-capture and ray masks
//! - `sliding` - Classical ray attacks for bishops, rooks and queens
//! - `pawn` - Pushes, double pushes, captures, en passant, promotions
//! - `knight` - Knight jumps
//! - `king` - King steps and castling
//! - `attack` - Square attack detection
//!
//! ## Output Order
//!
//! Pawns, knights, bishops, rooks, queens, then the king; within a piece type, source
//! squares ascend and destinations ascend. The order is deterministic for a given position.

mod attack;
mod king;
mod knight;
mod pawn;
pub mod sliding;
pub mod tables;

pub use tables::AttackTables;

use crate::position::Position;
use crate::types::{Color, Move, Square};

/// Owns the attack tables. Built once, then shared by reference with the legality filter
/// and the search.
#[derive(Clone, Debug, Default)]
pub struct MoveGenerator {
    tables: AttackTables,
}

impl MoveGenerator {
    pub fn new() -> Self {
        MoveGenerator {
            tables: AttackTables::new(),
        }
    }

    #[inline]
    pub fn tables(&self) -> &AttackTables {
        &self.tables
    }

    /// All pseudo-legal moves for the side to move.
    pub fn generate(&self, position: &Position) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.generate_into(position, &mut moves, false);
        moves
    }

    /// Pseudo-legal captures only, en passant and capturing promotions included.
    pub fn generate_captures(&self, position: &Position) -> Vec<Move> {
        let mut moves = Vec::with_capacity(16);
        self.generate_into(position, &mut moves, true);
        moves
    }

    pub fn generate_into(&self, position: &Position, moves: &mut Vec<Move>, captures_only: bool) {
        pawn::generate_pawn_moves(position, &self.tables, moves, captures_only);
        knight::generate_knight_moves(position, &self.tables, moves, captures_only);
        sliding::generate_sliding_moves(position, &self.tables, moves, captures_only);
        king::generate_king_moves(position, &self.tables, moves, captures_only);
    }

    #[inline]
    pub fn is_square_attacked(&self, position: &Position, square: Square, by: Color) -> bool {
        self.tables.is_square_attacked(position, square, by)
    }
}
