//! Legal move filtering and terminal-state classification
//!
//! A pseudo-legal move is legal iff the mover's king is not attacked afterwards. Castling
//! and en passant are checked by applying the move to a scratch copy and undoing it. Every
//! other move touches at most two squares plus one captured piece, so it is tested directly
//! against a hypothetical occupancy without mutating anything; both paths give the same
//! answer.
//!
//! A position without a king for the side to move is malformed but tolerated: its king is
//! treated as never attacked.

use crate::bitset::Bitboard;
use crate::constants::FIFTY_MOVE_HALFMOVES;
use crate::move_gen::MoveGenerator;
use crate::position::Position;
use crate::types::{Color, GameState, Move, MoveKind, PieceKind, Square};
use tracing::trace;

impl MoveGenerator {
    pub fn legal_moves(&self, position: &Position) -> Vec<Move> {
        let mut moves = self.generate(position);
        self.retain_legal(position, &mut moves);
        moves
    }

    /// Legal captures only.
    pub fn legal_captures(&self, position: &Position) -> Vec<Move> {
        let mut moves = self.generate_captures(position);
        self.retain_legal(position, &mut moves);
        moves
    }

    pub fn is_legal(&self, position: &Position, mv: Move) -> bool {
        self.legal_moves(position).contains(&mv)
    }

    pub fn is_in_check(&self, position: &Position, color: Color) -> bool {
        position
            .king_square(color)
            .is_some_and(|king| self.is_square_attacked(position, king, color.opposite()))
    }

    pub fn is_checkmate(&self, position: &Position) -> bool {
        self.is_in_check(position, position.side_to_move()) && !self.has_legal_move(position)
    }

    pub fn is_stalemate(&self, position: &Position) -> bool {
        !self.is_in_check(position, position.side_to_move()) && !self.has_legal_move(position)
    }

    pub fn has_legal_move(&self, position: &Position) -> bool {
        let us = position.side_to_move();
        let king = position.king_square(us);
        let mut scratch = *position;
        self.generate(position)
            .into_iter()
            .any(|mv| self.leaves_king_safe(&mut scratch, mv, king))
    }

    /// Checkmate and stalemate take precedence over the draw rules.
    pub fn game_state(&self, position: &Position) -> GameState {
        if !self.has_legal_move(position) {
            if self.is_in_check(position, position.side_to_move()) {
                return GameState::Checkmate;
            }
            return GameState::Stalemate;
        }
        if position.halfmove_clock() >= FIFTY_MOVE_HALFMOVES {
            return GameState::FiftyMoveRule;
        }
        if is_insufficient_material(position) {
            return GameState::InsufficientMaterial;
        }
        GameState::Playing
    }

    /// Number of leaf nodes of the legal move tree at `depth`.
    pub fn perft(&self, position: &Position, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves(position);
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut scratch = *position;
        let mut nodes = 0;
        for mv in moves {
            if let Ok(undo) = scratch.apply(mv) {
                nodes += self.perft(&scratch, depth - 1);
                scratch.undo(mv, undo);
            }
        }
        nodes
    }

    /// Per-root-move perft counts, in generation order.
    pub fn perft_divide(&self, position: &Position, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let mut scratch = *position;
        self.legal_moves(position)
            .into_iter()
            .filter_map(|mv| {
                let undo = scratch.apply(mv).ok()?;
                let nodes = self.perft(&scratch, depth - 1);
                scratch.undo(mv, undo);
                Some((mv, nodes))
            })
            .collect()
    }

    fn retain_legal(&self, position: &Position, moves: &mut Vec<Move>) {
        let king = position.king_square(position.side_to_move());
        let mut scratch = *position;
        moves.retain(|mv| self.leaves_king_safe(&mut scratch, *mv, king));
    }

    /// `scratch` must equal the position the move was generated for; it is restored
    /// before returning.
    fn leaves_king_safe(&self, scratch: &mut Position, mv: Move, king: Option<Square>) -> bool {
        let us = scratch.side_to_move();
        let them = us.opposite();

        if !matches!(mv.kind, MoveKind::EnPassant | MoveKind::KingCastle | MoveKind::QueenCastle) {
            let king = if mv.piece == PieceKind::King {
                Some(mv.dst)
            } else {
                king
            };
            let Some(king) = king else {
                return true;
            };
            let target = Bitboard::from_square(mv.dst);
            let occupied = (scratch.occupied() ^ Bitboard::from_square(mv.src)) | target;
            return !self
                .tables()
                .is_attacked_with(scratch, king, them, occupied, target);
        }

        match scratch.apply(mv) {
            Ok(undo) => {
                let safe = !self.is_in_check(scratch, us);
                scratch.undo(mv, undo);
                safe
            }
            Err(err) => {
                trace!(%mv, %err, "skipping move that failed to apply");
                false
            }
        }
    }
}

/// Bare kings, or a single minor piece against a bare king.
pub fn is_insufficient_material(position: &Position) -> bool {
    let heavy_or_pawn = [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen]
        .iter()
        .any(|&kind| {
            !(position.pieces_of(Color::White, kind) | position.pieces_of(Color::Black, kind))
                .is_empty()
        });
    if heavy_or_pawn {
        return false;
    }
    let minors: u32 = Color::ALL
        .iter()
        .map(|&color| {
            position.pieces_of(color, PieceKind::Knight).count_ones()
                + position.pieces_of(color, PieceKind::Bishop).count_ones()
        })
        .sum();
    minors <= 1
}
