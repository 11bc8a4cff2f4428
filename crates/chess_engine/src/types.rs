//! # Chess Engine Core Types
//!
//! ## Overview
//!
//! Small closed enumerations for piece identity ([`Color`], [`PieceKind`], [`Piece`]) and the
//! flat [`Move`] record exchanged between the move generator, the legality filter, the search
//! and any presentation layer.
//!
//! ## The `Move` Structure
//!
//! A move carries everything needed to apply it without re-deriving context:
//! - **src/dst**: source and destination squares (0-63)
//! - **piece**: the moving piece kind
//! - **kind**: one of eight [`MoveKind`] tags (quiet, capture, double push, en passant,
//!   both castles, promotion, promotion-capture)
//! - **promotion**: the promoted-to piece, present iff `kind` is a promotion variant
//!
//! Equality is defined by `(src, dst, promotion)` only. Two moves produced by the same
//! generation pass never differ in `kind` while agreeing on those three fields, so the
//! narrower key lets callers compare a parsed user move against generated moves directly.
//!
//! Moves serialize with serde, so they can be handed to a UI or written to disk as-is.

use crate::board::square_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Square index 0-63, A1 = 0, H8 = 63.
pub type Square = u8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for white, -1 for black.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion targets in the order they are emitted.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase letter used in FEN and coordinate notation.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// Index into the twelve per-piece bitboards: white pawn = 0 .. black king = 11.
    #[inline]
    pub const fn index(self) -> usize {
        self.color.index() * 6 + self.kind.index()
    }

    pub fn from_index(index: usize) -> Piece {
        let color = if index < 6 { Color::White } else { Color::Black };
        Piece::new(color, PieceKind::ALL[index % 6])
    }

    /// FEN letter: uppercase for white.
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    KingCastle,
    QueenCastle,
    Promotion,
    PromotionCapture,
}

impl MoveKind {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::Capture | MoveKind::EnPassant | MoveKind::PromotionCapture
        )
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveKind::Promotion | MoveKind::PromotionCapture)
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::KingCastle | MoveKind::QueenCastle)
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Move {
    pub src: Square,
    pub dst: Square,
    pub piece: PieceKind,
    pub kind: MoveKind,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(src: Square, dst: Square, piece: PieceKind, kind: MoveKind) -> Self {
        Move {
            src,
            dst,
            piece,
            kind,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(src: Square, dst: Square, kind: MoveKind, promotion: PieceKind) -> Self {
        Move {
            src,
            dst,
            piece: PieceKind::Pawn,
            kind,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.kind.is_capture()
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.kind.is_promotion()
    }

    /// Neither a capture nor a promotion.
    #[inline]
    pub const fn is_quiet(&self) -> bool {
        !self.kind.is_capture() && !self.kind.is_promotion()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src && self.dst == other.dst && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src.hash(state);
        self.dst.hash(state);
        self.promotion.hash(state);
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.src), square_name(self.dst))?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}

/// Four independent castling flags packed into one byte.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KING_SIDE: CastlingRights = CastlingRights(1);
    pub const WHITE_QUEEN_SIDE: CastlingRights = CastlingRights(2);
    pub const BLACK_KING_SIDE: CastlingRights = CastlingRights(4);
    pub const BLACK_QUEEN_SIDE: CastlingRights = CastlingRights(8);
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(15);

    /// Flags in Zobrist key order.
    pub const FLAGS: [CastlingRights; 4] = [
        CastlingRights::WHITE_KING_SIDE,
        CastlingRights::WHITE_QUEEN_SIDE,
        CastlingRights::BLACK_KING_SIDE,
        CastlingRights::BLACK_QUEEN_SIDE,
    ];

    #[inline]
    pub const fn has(self, flag: CastlingRights) -> bool {
        self.0 & flag.0 == flag.0 && flag.0 != 0
    }

    #[inline]
    pub fn insert(&mut self, flag: CastlingRights) {
        self.0 |= flag.0;
    }

    #[inline]
    pub fn remove(&mut self, flag: CastlingRights) {
        self.0 &= !flag.0;
    }

    pub const fn king_side(color: Color) -> CastlingRights {
        match color {
            Color::White => CastlingRights::WHITE_KING_SIDE,
            Color::Black => CastlingRights::BLACK_KING_SIDE,
        }
    }

    pub const fn queen_side(color: Color) -> CastlingRights {
        match color {
            Color::White => CastlingRights::WHITE_QUEEN_SIDE,
            Color::Black => CastlingRights::BLACK_QUEEN_SIDE,
        }
    }
}

/// Outcome classification of a position for the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameState {
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}
