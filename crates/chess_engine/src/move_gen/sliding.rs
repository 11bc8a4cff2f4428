//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces move along a ray until the board edge or the first occupied square.
//!
//! ## Algorithm
//!
//! Classical ray lookup: take the precomputed empty-board ray, intersect it with the
//! occupancy, and find the nearest blocker. For rays pointing to higher square indices the
//! nearest blocker is the lowest set bit; for rays pointing downward it is the highest.
//! Everything past the blocker is removed by XOR-ing the blocker's own ray. The blocker
//! stays in the attack set, and the caller masks out friendly pieces.

use super::tables::*;
use super::AttackTables;
use crate::bitset::Bitboard;
use crate::position::Position;
use crate::types::{Move, MoveKind, PieceKind, Square};

const BISHOP_DIRECTIONS: [usize; 4] = [NORTH_EAST, SOUTH_EAST, SOUTH_WEST, NORTH_WEST];
const ROOK_DIRECTIONS: [usize; 4] = [NORTH, EAST, SOUTH, WEST];

/// Directions whose squares increase in index.
#[inline]
fn is_positive(direction: usize) -> bool {
    matches!(direction, NORTH | NORTH_EAST | EAST | NORTH_WEST)
}

#[inline]
pub fn ray_attacks(tables: &AttackTables, square: Square, direction: usize, occupied: Bitboard) -> Bitboard {
    let ray = tables.rays[direction][square as usize];
    let blockers = ray & occupied;
    let nearest = if is_positive(direction) {
        blockers.lsb()
    } else {
        blockers.msb()
    };
    match nearest {
        Some(blocker) => ray ^ tables.rays[direction][blocker as usize],
        None => ray,
    }
}

pub fn bishop_attacks(tables: &AttackTables, square: Square, occupied: Bitboard) -> Bitboard {
    BISHOP_DIRECTIONS
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(tables, square, dir, occupied))
}

pub fn rook_attacks(tables: &AttackTables, square: Square, occupied: Bitboard) -> Bitboard {
    ROOK_DIRECTIONS
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(tables, square, dir, occupied))
}

pub fn queen_attacks(tables: &AttackTables, square: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(tables, square, occupied) | rook_attacks(tables, square, occupied)
}

/// Appends bishop, rook and queen moves for the side to move, in that order.
pub fn generate_sliding_moves(
    position: &Position,
    tables: &AttackTables,
    moves: &mut Vec<Move>,
    captures_only: bool,
) {
    let us = position.side_to_move();
    let enemies = position.color(us.opposite());
    let targets = if captures_only {
        enemies
    } else {
        !position.color(us)
    };
    let occupied = position.occupied();

    for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
        for src in position.pieces_of(us, kind) {
            let attacks = match kind {
                PieceKind::Bishop => bishop_attacks(tables, src, occupied),
                PieceKind::Rook => rook_attacks(tables, src, occupied),
                _ => queen_attacks(tables, src, occupied),
            };
            for dst in attacks & targets {
                let move_kind = if enemies.contains(dst) {
                    MoveKind::Capture
                } else {
                    MoveKind::Quiet
                };
                moves.push(Move::new(src, dst, kind, move_kind));
            }
        }
    }
}
