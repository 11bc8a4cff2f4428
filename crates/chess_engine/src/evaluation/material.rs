//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use super::Evaluator;
use crate::constants::PIECE_VALUES;
use crate::position::Position;
use crate::types::{Color, PieceKind};

/// Material balance, white minus black.
pub fn material_balance(position: &Position) -> i32 {
    PieceKind::ALL
        .iter()
        .map(|&kind| {
            let white = position.pieces_of(Color::White, kind).count_ones() as i32;
            let black = position.pieces_of(Color::Black, kind).count_ones() as i32;
            (white - black) * PIECE_VALUES[kind.index()]
        })
        .sum()
}

/// Scores by material alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, position: &Position) -> i32 {
        material_balance(position) * position.side_to_move().sign()
    }
}
