//! Quiescence search to avoid horizon effect
//!
//! Past the nominal depth only captures are searched, with the static evaluation as a
//! stand-pat bound. Captures that cannot lift the score to alpha even with a margin are
//! skipped (delta pruning). When the side to move is in check there is no stand-pat:
//! every legal evasion is searched, and no evasions means mate.
//!
//! Recursion stops after [`MAX_QUIESCENCE_DEPTH`] plies past the horizon.

use super::ordering::captured_kind;
use super::SearchEngine;
use crate::constants::*;
use crate::evaluation::Evaluator;
use crate::position::Position;

impl<E: Evaluator> SearchEngine<E> {
    pub(super) fn quiescence(
        &mut self,
        position: &mut Position,
        mut alpha: i32,
        beta: i32,
        ply: usize,
        qdepth: usize,
    ) -> i32 {
        if self.should_stop() {
            return 0;
        }
        self.stats.quiescence_nodes += 1;

        if ply >= MAX_PLY - 1 {
            return self.evaluate(position);
        }

        let in_check = self
            .generator
            .is_in_check(position, position.side_to_move());

        let (mut moves, stand_pat) = if in_check {
            let evasions = self.generator.legal_moves(position);
            if evasions.is_empty() {
                return -(MATE_SCORE - ply as i32);
            }
            if qdepth >= MAX_QUIESCENCE_DEPTH {
                return self.evaluate(position);
            }
            (evasions, None)
        } else {
            let stand_pat = self.evaluate(position);
            if stand_pat >= beta {
                return beta;
            }
            if qdepth >= MAX_QUIESCENCE_DEPTH {
                return stand_pat.max(alpha);
            }
            if stand_pat > alpha {
                alpha = stand_pat;
            }
            (self.generator.legal_captures(position), Some(stand_pat))
        };

        self.orderer.order(&mut moves, None, ply, position);

        for mv in moves {
            if let Some(stand_pat) = stand_pat.filter(|_| self.config.delta_pruning) {
                let gain = PIECE_VALUES[captured_kind(position, mv).index()];
                if !mv.is_promotion() && stand_pat + gain + DELTA_MARGIN < alpha {
                    continue;
                }
            }

            let Ok(undo) = position.apply(mv) else {
                continue;
            };
            let score = -self.quiescence(position, -beta, -alpha, ply + 1, qdepth + 1);
            position.undo(mv, undo);

            if self.stopped {
                return 0;
            }
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
