//! King move generation
//!
//! ## King Movement Rules
//!
//! - One square in any direction, never onto a friendly piece
//! - Stepping into check is left to the legality filter
//!
//! ## Castling
//!
//! Castling is emitted here, not from the tables. It requires:
//! - the king on its original square with the matching right still held
//! - the matching rook on its corner
//! - every square between king and rook empty
//! - the king's square and each square it crosses, destination included, not attacked

use super::AttackTables;
use crate::constants::*;
use crate::position::Position;
use crate::types::{CastlingRights, Color, Move, MoveKind, Piece, PieceKind, Square};

pub fn generate_king_moves(
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

    for src in position.pieces_of(us, PieceKind::King) {
        for dst in tables.king[src as usize] & targets {
            let kind = if enemies.contains(dst) {
                MoveKind::Capture
            } else {
                MoveKind::Quiet
            };
            moves.push(Move::new(src, dst, PieceKind::King, kind));
        }
    }

    if !captures_only {
        generate_castles(position, tables, moves);
    }
}

struct CastleSide {
    right: CastlingRights,
    kind: MoveKind,
    rook: Square,
    empty: &'static [Square],
    safe: &'static [Square],
}

const WHITE_CASTLES: [CastleSide; 2] = [
    CastleSide {
        right: CastlingRights::WHITE_KING_SIDE,
        kind: MoveKind::KingCastle,
        rook: H1,
        empty: &[F1, G1],
        safe: &[E1, F1, G1],
    },
    CastleSide {
        right: CastlingRights::WHITE_QUEEN_SIDE,
        kind: MoveKind::QueenCastle,
        rook: A1,
        empty: &[B1, C1, D1],
        safe: &[E1, D1, C1],
    },
];

const BLACK_CASTLES: [CastleSide; 2] = [
    CastleSide {
        right: CastlingRights::BLACK_KING_SIDE,
        kind: MoveKind::KingCastle,
        rook: H8,
        empty: &[F8, G8],
        safe: &[E8, F8, G8],
    },
    CastleSide {
        right: CastlingRights::BLACK_QUEEN_SIDE,
        kind: MoveKind::QueenCastle,
        rook: A8,
        empty: &[B8, C8, D8],
        safe: &[E8, D8, C8],
    },
];

fn generate_castles(position: &Position, tables: &AttackTables, moves: &mut Vec<Move>) {
    let us = position.side_to_move();
    let them = us.opposite();
    let (king_square, sides) = match us {
        Color::White => (E1, &WHITE_CASTLES),
        Color::Black => (E8, &BLACK_CASTLES),
    };
    if position.piece_at(king_square) != Some(Piece::new(us, PieceKind::King)) {
        return;
    }
    let rook = Piece::new(us, PieceKind::Rook);
    let occupied = position.occupied();

    for side in sides.iter() {
        if !position.castling().has(side.right) || position.piece_at(side.rook) != Some(rook) {
            continue;
        }
        if side.empty.iter().any(|&sq| occupied.contains(sq)) {
            continue;
        }
        if side
            .safe
            .iter()
            .any(|&sq| tables.is_square_attacked(position, sq, them))
        {
            continue;
        }
        let dst = side.safe[2];
        moves.push(Move::new(king_square, dst, PieceKind::King, side.kind));
    }
}
