//! Move execution and validation
//!
//! Moves are given in coordinate notation: source square, destination square and an
//! optional promotion letter (`e2e4`, `e1g1`, `e7e8q`).

use crate::board::parse_square;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::MoveGenerator;
use crate::position::Position;
use crate::types::{Move, PieceKind, Square};

/// Resolve coordinate text to the matching legal move in `position`
///
/// # Errors
///
/// [`ChessEngineError::IllegalMove`] when the text is malformed or names no legal move,
/// [`ChessEngineError::NoPieceAtSquare`] when the source square is empty and
/// [`ChessEngineError::WrongPieceColor`] when it holds an opponent piece.
pub fn parse_move(
    generator: &MoveGenerator,
    position: &Position,
    text: &str,
) -> ChessEngineResult<Move> {
    let text = text.trim();
    let malformed = || ChessEngineError::IllegalMove {
        mv: text.to_string(),
    };

    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(malformed());
    }
    let src = parse_square(&text[0..2]).ok_or_else(malformed)?;
    let dst = parse_square(&text[2..4]).ok_or_else(malformed)?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(malformed()),
        },
    };

    let piece = position
        .piece_at(src)
        .ok_or(ChessEngineError::NoPieceAtSquare { square: src })?;
    if piece.color != position.side_to_move() {
        return Err(ChessEngineError::WrongPieceColor {
            square: src,
            color: position.side_to_move(),
        });
    }

    generator
        .legal_moves(position)
        .into_iter()
        .find(|mv| mv.src == src && mv.dst == dst && mv.promotion == promotion)
        .ok_or_else(malformed)
}

/// Parse and play a move, returning the move that was applied
///
/// # Examples
///
/// ```rust
/// use chess_engine::api::{do_move, new_game};
/// use chess_engine::MoveGenerator;
///
/// let generator = MoveGenerator::new();
/// let mut position = new_game();
/// let mv = do_move(&generator, &mut position, "e2e4").unwrap();
/// assert_eq!(mv.to_string(), "e2e4");
/// ```
pub fn do_move(
    generator: &MoveGenerator,
    position: &mut Position,
    text: &str,
) -> ChessEngineResult<Move> {
    let mv = parse_move(generator, position, text)?;
    position.apply(mv)?;
    Ok(mv)
}

/// True if some legal move goes from `src` to `dst`
pub fn is_legal_move(generator: &MoveGenerator, position: &Position, src: Square, dst: Square) -> bool {
    if src >= 64 || dst >= 64 {
        return false;
    }
    generator
        .legal_moves(position)
        .iter()
        .any(|mv| mv.src == src && mv.dst == dst)
}
