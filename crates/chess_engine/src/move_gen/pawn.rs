//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - Single push onto an empty square
//! - Double push from the starting rank when both squares are empty
//! - Diagonal captures onto enemy-occupied squares
//! - En-passant capture onto the stored target square
//! - Reaching the last rank emits one move per promotion piece, for pushes and captures alike

use super::AttackTables;
use crate::board::rank_of;
use crate::position::Position;
use crate::types::{Color, Move, MoveKind, PieceKind, Square};

fn push_promotions(moves: &mut Vec<Move>, src: Square, dst: Square, kind: MoveKind) {
    for promotion in PieceKind::PROMOTIONS {
        moves.push(Move::with_promotion(src, dst, kind, promotion));
    }
}

pub fn generate_pawn_moves(
    position: &Position,
    tables: &AttackTables,
    moves: &mut Vec<Move>,
    captures_only: bool,
) {
    let us = position.side_to_move();
    let enemies = position.color(us.opposite());
    let occupied = position.occupied();
    let (push, start_rank, last_rank): (i32, u8, u8) = match us {
        Color::White => (8, 1, 7),
        Color::Black => (-8, 6, 0),
    };

    for src in position.pieces_of(us, PieceKind::Pawn) {
        let attacks = tables.pawn_attacks(us, src);
        for dst in attacks & enemies {
            if rank_of(dst) == last_rank {
                push_promotions(moves, src, dst, MoveKind::PromotionCapture);
            } else {
                moves.push(Move::new(src, dst, PieceKind::Pawn, MoveKind::Capture));
            }
        }
        if let Some(target) = position.en_passant() {
            if attacks.contains(target) {
                moves.push(Move::new(src, target, PieceKind::Pawn, MoveKind::EnPassant));
            }
        }

        if captures_only {
            continue;
        }

        let one = src as i32 + push;
        if !(0..64).contains(&one) || occupied.contains(one as Square) {
            continue;
        }
        let one = one as Square;
        if rank_of(one) == last_rank {
            push_promotions(moves, src, one, MoveKind::Promotion);
            continue;
        }
        moves.push(Move::new(src, one, PieceKind::Pawn, MoveKind::Quiet));

        if rank_of(src) == start_rank {
            let two = (one as i32 + push) as Square;
            if !occupied.contains(two) {
                moves.push(Move::new(src, two, PieceKind::Pawn, MoveKind::DoublePawnPush));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_moves(fen: &str, captures_only: bool) -> Vec<Move> {
        let position = Position::from_fen(fen).expect("valid FEN");
        let tables = AttackTables::new();
        let mut moves = Vec::new();
        generate_pawn_moves(&position, &tables, &mut moves, captures_only);
        moves
    }

    #[test]
    fn test_start_position_pawn_moves() {
        let moves = pawn_moves(crate::constants::START_FEN, false);
        assert_eq!(moves.len(), 16, "8 single pushes and 8 double pushes");
        let doubles = moves
            .iter()
            .filter(|m| m.kind == MoveKind::DoublePawnPush)
            .count();
        assert_eq!(doubles, 8);
    }

    #[test]
    fn test_promotions_emit_four_moves() {
        let moves = pawn_moves("1n5k/P7/8/8/8/8/8/K7 w - - 0 1", false);
        let quiet = moves.iter().filter(|m| m.kind == MoveKind::Promotion).count();
        let capture = moves
            .iter()
            .filter(|m| m.kind == MoveKind::PromotionCapture)
            .count();
        assert_eq!(quiet, 4);
        assert_eq!(capture, 4);
    }

    #[test]
    fn test_en_passant_generated() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", true);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].kind, MoveKind::EnPassant);
        assert_eq!(moves[0].dst, 43);
    }

    #[test]
    fn test_blocked_pawn_has_no_pushes() {
        let moves = pawn_moves("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1", false);
        assert!(moves.is_empty(), "e2 pawn is blocked by e3");
    }
}
