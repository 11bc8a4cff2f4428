//! Knight move generation
//!
//! Knights jump, so the precomputed mask minus friendly pieces is the full move set.

use super::AttackTables;
use crate::position::Position;
use crate::types::{Move, MoveKind, PieceKind};

pub fn generate_knight_moves(
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

    for src in position.pieces_of(us, PieceKind::Knight) {
        for dst in tables.knight[src as usize] & targets {
            let kind = if enemies.contains(dst) {
                MoveKind::Capture
            } else {
                MoveKind::Quiet
            };
            moves.push(Move::new(src, dst, PieceKind::Knight, kind));
        }
    }
}
