//! Error types for chess engine
//!
//! Provides custom error types for chess engine operations including
//! move validation, notation parsing, and square lookups.

use crate::types::{Color, Move, Square};
use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Move is inconsistent with the position (bad castle, missing pawn, bad promotion)
    #[error("Invalid move: from square {from} to square {to}")]
    InvalidMove { from: Square, to: Square },

    /// Invalid square index (out of bounds)
    #[error("Invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: Square },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: Square, color: Color },

    /// Malformed FEN string
    #[error("Invalid FEN: {message}")]
    InvalidFen { message: String },

    /// Move text parsed but is not legal in the position
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: String },
}

impl ChessEngineError {
    pub(crate) fn fen(message: impl Into<String>) -> Self {
        ChessEngineError::InvalidFen {
            message: message.into(),
        }
    }

    pub(crate) fn illegal(mv: &Move) -> Self {
        ChessEngineError::IllegalMove { mv: mv.to_string() }
    }
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
