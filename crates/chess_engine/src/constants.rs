//! # Chess Engine Constants - Evaluation Values & Search Parameters
//!
//! ## Overview
//!
//! This module centralizes the constant values used throughout the engine: piece valuations
//! (in centipawns), score bounds for mate detection, well-known squares, and the tuning
//! parameters of the search and move orderer.
//!
//! ## Centipawn Valuation System
//!
//! Scores are expressed in **centipawns** (1/100th of a pawn), which keeps evaluation in
//! integer arithmetic:
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 0 for material purposes; losing the king is handled by mate scoring
//!
//! ## Mate Scores
//!
//! A side to move with no legal moves while in check scores `-(MATE_SCORE - ply)`, so a mate
//! found closer to the root is worth more than a distant one. Any score whose magnitude exceeds
//! [`MATE_THRESHOLD`] is a mate score; the transposition table re-bases such scores relative to
//! the node that stores them.
//!
//! ## Further Reading
//!
//! - **Centipawns**: https://www.chessprogramming.org/Centipawns
//! - **Checkmate Scores**: https://www.chessprogramming.org/Score#Mate_Scores

use crate::types::Square;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 0;

/// Indexed by `PieceKind::index()`.
pub const PIECE_VALUES: [i32; 6] = [
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

pub const INF: i32 = 32_000;
pub const MATE_SCORE: i32 = 30_000;
pub const DRAW_SCORE: i32 = 0;
pub const MAX_PLY: usize = 128;
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

/// Quiescence recursion stops this many plies past the horizon.
pub const MAX_QUIESCENCE_DEPTH: usize = 8;
pub const DELTA_MARGIN: i32 = 200;
pub const FUTILITY_MARGIN: i32 = 150;
pub const FUTILITY_MAX_DEPTH: i32 = 3;

pub const NULL_MOVE_MIN_DEPTH: i32 = 3;
pub const LMR_MIN_DEPTH: i32 = 3;
pub const LMR_MIN_MOVE_INDEX: usize = 4;
pub const LMR_DEEP_MOVE_INDEX: usize = 8;

pub const DEFAULT_ASPIRATION_WINDOW: i32 = 50;
/// Past this width a failed aspiration search falls back to the full window.
pub const ASPIRATION_MAX_WINDOW: i32 = 1000;
pub const DEFAULT_MAX_DEPTH: u8 = 6;
pub const DEFAULT_TT_SIZE_MB: usize = 16;

/// Deadline polling interval inside the recursion, in nodes (power of two).
pub const TIME_CHECK_INTERVAL: u64 = 2048;

pub const HISTORY_MAX: i32 = 100_000;
pub const KILLER_SLOTS: usize = 2;

/// Move ordering bands. History scores stay below [`HISTORY_MAX`], under every band.
pub const ORDER_TT_MOVE: i32 = 10_000_000;
pub const ORDER_CAPTURE: i32 = 1_000_000;
pub const ORDER_PROMOTION: i32 = 600_000;
pub const ORDER_KILLER_FIRST: i32 = 500_000;
pub const ORDER_KILLER_SECOND: i32 = 400_000;

pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Fixed seed for the process-wide Zobrist keys.
pub const ZOBRIST_SEED: u64 = 12345;

pub const A1: Square = 0;
pub const B1: Square = 1;
pub const C1: Square = 2;
pub const D1: Square = 3;
pub const E1: Square = 4;
pub const F1: Square = 5;
pub const G1: Square = 6;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const B8: Square = 57;
pub const C8: Square = 58;
pub const D8: Square = 59;
pub const E8: Square = 60;
pub const F8: Square = 61;
pub const G8: Square = 62;
pub const H8: Square = 63;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
