//! Full position evaluation
//!
//! Evaluates positions using material, piece-square tables, and mobility.

use super::material::material_balance;
use super::pst::{is_endgame, pst_value};
use super::Evaluator;
use crate::move_gen::sliding::{bishop_attacks, queen_attacks, rook_attacks};
use crate::move_gen::AttackTables;
use crate::position::Position;
use crate::types::{Color, Piece, PieceKind};

const MOBILITY_WEIGHT: i32 = 2;
const BISHOP_PAIR_BONUS: i32 = 30;

/// Material + piece-square tables + piece mobility + bishop pair.
#[derive(Clone, Debug, Default)]
pub struct StandardEvaluator {
    tables: AttackTables,
}

impl StandardEvaluator {
    pub fn new() -> Self {
        StandardEvaluator {
            tables: AttackTables::new(),
        }
    }

    /// Score from white's point of view.
    pub fn evaluate_white(&self, position: &Position) -> i32 {
        let endgame = is_endgame(position);
        let mut score = material_balance(position);

        for index in 0..12 {
            let piece = Piece::from_index(index);
            let sign = piece.color.sign();
            for square in position.pieces(piece) {
                score += sign * pst_value(piece, square, endgame);
            }
        }

        for color in Color::ALL {
            let sign = color.sign();
            score += sign * MOBILITY_WEIGHT * self.mobility(position, color);
            if position.pieces_of(color, PieceKind::Bishop).count_ones() >= 2 {
                score += sign * BISHOP_PAIR_BONUS;
            }
        }

        score
    }

    /// Squares attacked by knights and sliders, excluding own-occupied ones.
    fn mobility(&self, position: &Position, color: Color) -> i32 {
        let own = position.color(color);
        let occupied = position.occupied();
        let mut count = 0;
        for square in position.pieces_of(color, PieceKind::Knight) {
            count += (self.tables.knight[square as usize] & !own).count_ones();
        }
        for square in position.pieces_of(color, PieceKind::Bishop) {
            count += (bishop_attacks(&self.tables, square, occupied) & !own).count_ones();
        }
        for square in position.pieces_of(color, PieceKind::Rook) {
            count += (rook_attacks(&self.tables, square, occupied) & !own).count_ones();
        }
        for square in position.pieces_of(color, PieceKind::Queen) {
            count += (queen_attacks(&self.tables, square, occupied) & !own).count_ones();
        }
        count as i32
    }
}

impl Evaluator for StandardEvaluator {
    fn evaluate(&self, position: &Position) -> i32 {
        self.evaluate_white(position) * position.side_to_move().sign()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        let evaluator = StandardEvaluator::new();
        assert_eq!(evaluator.evaluate(&Position::new()), 0);
    }

    #[test]
    fn test_mirrored_positions_score_equal() {
        let evaluator = StandardEvaluator::new();
        let white = Position::from_fen("4k3/8/8/8/4P3/2N5/8/4K3 w - - 0 1").expect("valid FEN");
        let black = Position::from_fen("4k3/8/2n5/4p3/8/8/8/4K3 b - - 0 1").expect("valid FEN");
        assert_eq!(evaluator.evaluate(&white), evaluator.evaluate(&black));
        assert!(evaluator.evaluate(&white) > 0);
    }

    #[test]
    fn test_evaluation_is_pure() {
        let evaluator = StandardEvaluator::new();
        let position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("valid FEN");
        assert_eq!(evaluator.evaluate(&position), evaluator.evaluate(&position));
    }
}
