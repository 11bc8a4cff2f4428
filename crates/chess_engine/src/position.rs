//! # Position - Bitboard Game State with Make/Unmake
//!
//! ## Overview
//!
//! [`Position`] is the mutable game-state record: twelve piece bitboards, cached color and
//! occupancy unions, side to move, castling rights, en-passant target, move counters and an
//! incrementally maintained Zobrist fingerprint.
//!
//! The struct is `Copy` and holds no heap data, so a speculative copy is a plain memcpy. The
//! search instead uses [`Position::apply`] / [`Position::undo`] on a single position: `apply`
//! returns an [`UndoInfo`] record holding every scalar it overwrote, and `undo` reverses the
//! bit flips and restores those scalars, leaving the position bitwise-identical.
//!
//! ## Invariants
//!
//! - `colors[c]` is the union of the six bitboards of color `c`; `occupied` is their union.
//! - `hash` equals [`position_hash`](crate::hash::position_hash) of the current state.
//! - At most one king per color.
//!
//! Every mutator goes through [`Position::put_piece`] / [`Position::remove_piece`] or updates
//! the hash alongside the scalar it changes, which keeps both invariants true after any
//! sequence of public calls.

use crate::bitset::Bitboard;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::hash::{position_hash, zobrist_keys};
use crate::move_gen::AttackTables;
use crate::types::{CastlingRights, Color, Move, MoveKind, Piece, PieceKind, Square};

/// Scalars overwritten by a move, enough to reverse it exactly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UndoInfo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub hash: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pieces: [Bitboard; 12],
    colors: [Bitboard; 2],
    occupied: Bitboard,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
    hash: u64,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard initial layout, white to move.
    pub fn new() -> Self {
        let mut position = Self::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as Square;
            position.put_piece(Piece::new(Color::White, *kind), file);
            position.put_piece(Piece::new(Color::White, PieceKind::Pawn), 8 + file);
            position.put_piece(Piece::new(Color::Black, PieceKind::Pawn), 48 + file);
            position.put_piece(Piece::new(Color::Black, *kind), 56 + file);
        }
        position.set_castling(CastlingRights::ALL);
        position
    }

    /// No pieces, no rights, white to move.
    pub fn empty() -> Self {
        Position {
            pieces: [Bitboard::EMPTY; 12],
            colors: [Bitboard::EMPTY; 2],
            occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: zobrist_keys().white_to_move,
        }
    }

    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[Piece::new(color, kind).index()]
    }

    #[inline]
    pub fn color(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if square >= 64 || !self.occupied.contains(square) {
            return None;
        }
        let base = if self.colors[0].contains(square) { 0 } else { 6 };
        (base..base + 6)
            .find(|&i| self.pieces[i].contains(square))
            .map(Piece::from_index)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, PieceKind::King).lsb()
    }

    /// True if `color` owns anything besides pawns and the king.
    pub fn has_non_pawn_material(&self, color: Color) -> bool {
        let pawns_and_king =
            self.pieces_of(color, PieceKind::Pawn) | self.pieces_of(color, PieceKind::King);
        !(self.color(color) & !pawns_and_king).is_empty()
    }

    /// Places `piece` on an empty square.
    pub fn put_piece(&mut self, piece: Piece, square: Square) {
        self.toggle(piece, square);
        self.hash ^= zobrist_keys().piece(piece, square);
    }

    /// Removes `piece` from `square`; the square must hold that piece.
    pub fn remove_piece(&mut self, piece: Piece, square: Square) {
        self.toggle(piece, square);
        self.hash ^= zobrist_keys().piece(piece, square);
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        if color != self.side_to_move {
            self.side_to_move = color;
            self.hash ^= zobrist_keys().white_to_move;
        }
    }

    pub fn set_castling(&mut self, rights: CastlingRights) {
        let keys = zobrist_keys();
        self.hash ^= keys.castling(self.castling) ^ keys.castling(rights);
        self.castling = rights;
    }

    pub fn set_en_passant(&mut self, square: Option<Square>) {
        let keys = zobrist_keys();
        self.hash ^= keys.en_passant(self.en_passant) ^ keys.en_passant(square);
        self.en_passant = square;
    }

    pub fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    pub fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number.max(1);
    }

    /// Raw bit flip on the piece, color and occupancy boards. No hash update.
    #[inline]
    fn toggle(&mut self, piece: Piece, square: Square) {
        self.pieces[piece.index()].toggle(square);
        self.colors[piece.color.index()].toggle(square);
        self.occupied.toggle(square);
    }

    /// Checks the cached unions, king counts and the incremental hash.
    pub fn is_consistent(&self) -> bool {
        let mut colors = [Bitboard::EMPTY; 2];
        for (index, board) in self.pieces.iter().enumerate() {
            let color = index / 6;
            if !(colors[color] & *board).is_empty() {
                return false;
            }
            colors[color] |= *board;
        }
        colors == self.colors
            && (colors[0] & colors[1]).is_empty()
            && (colors[0] | colors[1]) == self.occupied
            && self.pieces_of(Color::White, PieceKind::King).count_ones() <= 1
            && self.pieces_of(Color::Black, PieceKind::King).count_ones() <= 1
            && self.hash == position_hash(self)
    }

    pub fn is_square_attacked(&self, tables: &AttackTables, square: Square, by: Color) -> bool {
        tables.is_square_attacked(self, square, by)
    }

    /// Applies `mv` for the side to move.
    ///
    /// Validation runs before any mutation: on `Err` the position is untouched. The move
    /// is not checked for leaving the mover's king attacked; that is the legality filter's job.
    pub fn apply(&mut self, mv: Move) -> ChessEngineResult<UndoInfo> {
        let captured = self.validate(mv)?;
        let us = self.side_to_move;
        let them = us.opposite();
        let keys = zobrist_keys();

        let undo = UndoInfo {
            captured,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            hash: self.hash,
        };

        self.hash ^= keys.en_passant(self.en_passant) ^ keys.castling(self.castling);
        self.en_passant = None;

        match mv.kind {
            MoveKind::EnPassant => {
                let victim = en_passant_victim(mv.dst, us);
                self.remove_piece(Piece::new(them, PieceKind::Pawn), victim);
            }
            _ => {
                if let Some(piece) = captured {
                    self.remove_piece(piece, mv.dst);
                }
            }
        }

        self.remove_piece(Piece::new(us, mv.piece), mv.src);
        let placed = mv.promotion.unwrap_or(mv.piece);
        self.put_piece(Piece::new(us, placed), mv.dst);

        if let Some((rook_src, rook_dst)) = castle_rook_squares(mv) {
            let rook = Piece::new(us, PieceKind::Rook);
            self.remove_piece(rook, rook_src);
            self.put_piece(rook, rook_dst);
        }

        if mv.kind == MoveKind::DoublePawnPush {
            self.en_passant = Some((mv.src + mv.dst) / 2);
        }

        if mv.piece == PieceKind::King {
            self.castling.remove(CastlingRights::king_side(us));
            self.castling.remove(CastlingRights::queen_side(us));
        }
        for square in [mv.src, mv.dst] {
            match square {
                A1 => self.castling.remove(CastlingRights::WHITE_QUEEN_SIDE),
                H1 => self.castling.remove(CastlingRights::WHITE_KING_SIDE),
                A8 => self.castling.remove(CastlingRights::BLACK_QUEEN_SIDE),
                H8 => self.castling.remove(CastlingRights::BLACK_KING_SIDE),
                _ => {}
            }
        }
        self.hash ^= keys.en_passant(self.en_passant) ^ keys.castling(self.castling);

        if mv.piece == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if us == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = them;
        self.hash ^= keys.white_to_move;

        Ok(undo)
    }

    /// Reverses `mv`, which must be the last move applied with the returned `undo`.
    pub fn undo(&mut self, mv: Move, undo: UndoInfo) {
        let us = self.side_to_move.opposite();
        self.side_to_move = us;

        if let Some((rook_src, rook_dst)) = castle_rook_squares(mv) {
            let rook = Piece::new(us, PieceKind::Rook);
            self.toggle(rook, rook_dst);
            self.toggle(rook, rook_src);
        }

        let placed = mv.promotion.unwrap_or(mv.piece);
        self.toggle(Piece::new(us, placed), mv.dst);
        self.toggle(Piece::new(us, mv.piece), mv.src);

        if let Some(piece) = undo.captured {
            let square = if mv.kind == MoveKind::EnPassant {
                en_passant_victim(mv.dst, us)
            } else {
                mv.dst
            };
            self.toggle(piece, square);
        }

        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        self.hash = undo.hash;
    }

    /// Passes the turn. Only meaningful inside search when the side to move is not in check.
    pub fn make_null_move(&mut self) -> UndoInfo {
        let keys = zobrist_keys();
        let undo = UndoInfo {
            captured: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            hash: self.hash,
        };
        self.hash ^= keys.en_passant(self.en_passant) ^ keys.white_to_move;
        self.en_passant = None;
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        self.side_to_move = self.side_to_move.opposite();
        undo
    }

    pub fn unmake_null_move(&mut self, undo: UndoInfo) {
        self.side_to_move = self.side_to_move.opposite();
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.hash = undo.hash;
    }

    /// Returns the captured piece, if any, when `mv` is consistent with the position.
    fn validate(&self, mv: Move) -> ChessEngineResult<Option<Piece>> {
        for square in [mv.src, mv.dst] {
            if square >= 64 {
                return Err(ChessEngineError::InvalidSquare { square });
            }
        }
        let us = self.side_to_move;
        let moving = self
            .piece_at(mv.src)
            .ok_or(ChessEngineError::NoPieceAtSquare { square: mv.src })?;
        if moving.color != us {
            return Err(ChessEngineError::WrongPieceColor {
                square: mv.src,
                color: us,
            });
        }

        let invalid = ChessEngineError::InvalidMove {
            from: mv.src,
            to: mv.dst,
        };
        if moving.kind != mv.piece || mv.src == mv.dst {
            return Err(invalid);
        }
        if mv.kind.is_promotion() != mv.promotion.is_some() {
            return Err(invalid);
        }
        if let Some(promotion) = mv.promotion {
            if mv.piece != PieceKind::Pawn
                || matches!(promotion, PieceKind::Pawn | PieceKind::King)
            {
                return Err(invalid);
            }
        }

        let target = self.piece_at(mv.dst);
        match mv.kind {
            MoveKind::Capture | MoveKind::PromotionCapture => match target {
                Some(piece) if piece.color != us => Ok(Some(piece)),
                _ => Err(invalid),
            },
            MoveKind::EnPassant => {
                let victim = en_passant_victim(mv.dst, us);
                let pawn = Piece::new(us.opposite(), PieceKind::Pawn);
                if mv.piece == PieceKind::Pawn
                    && self.en_passant == Some(mv.dst)
                    && target.is_none()
                    && self.piece_at(victim) == Some(pawn)
                {
                    Ok(Some(pawn))
                } else {
                    Err(invalid)
                }
            }
            MoveKind::KingCastle | MoveKind::QueenCastle => {
                let (right, king_dst) = castle_target(us, mv.kind);
                let king_src = if us == Color::White { E1 } else { E8 };
                let rook_ok = castle_rook_squares(mv).is_some_and(|(rook_src, rook_dst)| {
                    self.piece_at(rook_src) == Some(Piece::new(us, PieceKind::Rook))
                        && self.piece_at(rook_dst).is_none()
                });
                if mv.piece == PieceKind::King
                    && mv.src == king_src
                    && mv.dst == king_dst
                    && self.castling.has(right)
                    && target.is_none()
                    && rook_ok
                {
                    Ok(None)
                } else {
                    Err(invalid)
                }
            }
            MoveKind::Quiet | MoveKind::DoublePawnPush | MoveKind::Promotion => {
                if target.is_some() {
                    Err(invalid)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

/// Square of the pawn removed by an en-passant capture landing on `dst`.
#[inline]
fn en_passant_victim(dst: Square, mover: Color) -> Square {
    match mover {
        Color::White => dst - 8,
        Color::Black => dst + 8,
    }
}

fn castle_target(color: Color, kind: MoveKind) -> (CastlingRights, Square) {
    match (color, kind) {
        (Color::White, MoveKind::KingCastle) => (CastlingRights::WHITE_KING_SIDE, G1),
        (Color::White, _) => (CastlingRights::WHITE_QUEEN_SIDE, C1),
        (Color::Black, MoveKind::KingCastle) => (CastlingRights::BLACK_KING_SIDE, G8),
        (Color::Black, _) => (CastlingRights::BLACK_QUEEN_SIDE, C8),
    }
}

/// Rook source and destination for a castling move.
fn castle_rook_squares(mv: Move) -> Option<(Square, Square)> {
    match (mv.kind, mv.dst) {
        (MoveKind::KingCastle, G1) => Some((H1, F1)),
        (MoveKind::QueenCastle, C1) => Some((A1, D1)),
        (MoveKind::KingCastle, G8) => Some((H8, F8)),
        (MoveKind::QueenCastle, C8) => Some((A8, D8)),
        _ => None,
    }
}
