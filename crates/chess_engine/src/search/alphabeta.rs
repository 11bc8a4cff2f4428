//! Recursive principal-variation search
//!
//! Negamax form: every node maximizes, and a child's score is negated on the way up.
//! The first ordered move is searched with the full window; later moves get a null window
//! and are re-searched with the full window only if they land inside it.
//!
//! Node procedure:
//! 1. Draw by insufficient material or repetition on the search path
//! 2. Transposition probe; a usable bound returns immediately
//! 3. No legal moves: mate (`-(MATE_SCORE - ply)`) or stalemate (0)
//! 4. Fifty-move draw, which a mate delivered on the hundredth half-move overrides
//! 5. Depth exhausted: hand off to quiescence
//! 6. Null-move pruning, then the move loop with futility pruning and late-move reductions
//! 7. Store the result with a bound derived from the original window

use super::SearchEngine;
use crate::constants::*;
use crate::evaluation::Evaluator;
use crate::legality::is_insufficient_material;
use crate::position::Position;
use crate::tt::{score_to_tt, Bound, TtProbe};
use crate::types::Move;
use tracing::trace;

impl<E: Evaluator> SearchEngine<E> {
    pub(super) fn alpha_beta(
        &mut self,
        position: &mut Position,
        depth: i32,
        mut alpha: i32,
        beta: i32,
        ply: usize,
        allow_null: bool,
    ) -> i32 {
        if self.should_stop() {
            return 0;
        }
        self.stats.nodes += 1;

        if ply > 0
            && (is_insufficient_material(position)
                || self.is_repetition(position.hash(), position.halfmove_clock()))
        {
            return DRAW_SCORE;
        }
        if ply >= MAX_PLY - 1 {
            return self.evaluate(position);
        }

        // The key ignores the half-move clock, so entries are not trusted once it expires.
        let fifty_move = position.halfmove_clock() >= FIFTY_MOVE_HALFMOVES;
        let key = position.hash();
        let probe = if fifty_move {
            TtProbe::default()
        } else {
            self.tt.probe_at_ply(key, depth.max(0), alpha, beta, ply)
        };
        if ply > 0 {
            if let Some(score) = probe.score {
                return score;
            }
        }

        let us = position.side_to_move();
        let in_check = self.generator.is_in_check(position, us);
        let mut moves = self.generator.legal_moves(position);
        if moves.is_empty() {
            return if in_check {
                -(MATE_SCORE - ply as i32)
            } else {
                DRAW_SCORE
            };
        }
        if ply > 0 && fifty_move {
            return DRAW_SCORE;
        }

        if depth <= 0 {
            return if self.config.quiescence {
                self.quiescence(position, alpha, beta, ply, 0)
            } else {
                self.evaluate(position)
            };
        }

        let pv_node = beta - alpha > 1;

        if self.config.null_move
            && allow_null
            && !pv_node
            && !in_check
            && depth >= NULL_MOVE_MIN_DEPTH
            && beta.abs() < MATE_THRESHOLD
            && position.has_non_pawn_material(us)
        {
            let reduction = if depth >= 6 { 3 } else { 2 };
            let undo = position.make_null_move();
            self.path.push(position.hash());
            let score = -self.alpha_beta(position, depth - 1 - reduction, -beta, -beta + 1, ply + 1, false);
            self.path.pop();
            position.unmake_null_move(undo);
            if self.stopped {
                return 0;
            }
            if score >= beta {
                self.stats.null_move_cutoffs += 1;
                return beta;
            }
        }

        let futile = self.config.futility_pruning
            && depth <= FUTILITY_MAX_DEPTH
            && !in_check
            && !pv_node
            && alpha.abs() < MATE_THRESHOLD
            && self.evaluate(position) + FUTILITY_MARGIN * depth <= alpha;

        self.orderer.order(&mut moves, probe.best_move, ply, position);

        let original_alpha = alpha;
        let mut best_score = -INF;
        let mut best_move: Option<Move> = None;
        let mut searched = 0usize;

        for mv in moves {
            let undo = match position.apply(mv) {
                Ok(undo) => undo,
                Err(err) => {
                    trace!(%mv, %err, "skipping move that failed to apply");
                    continue;
                }
            };
            let gives_check = self
                .generator
                .is_in_check(position, position.side_to_move());
            let quiet = mv.is_quiet();

            if futile && searched > 0 && quiet && !gives_check {
                position.undo(mv, undo);
                self.stats.futility_prunes += 1;
                continue;
            }

            self.path.push(position.hash());
            let score = if searched == 0 {
                -self.alpha_beta(position, depth - 1, -beta, -alpha, ply + 1, true)
            } else {
                let reduction = if self.config.late_move_reductions
                    && depth >= LMR_MIN_DEPTH
                    && searched >= LMR_MIN_MOVE_INDEX
                    && quiet
                    && !in_check
                    && !gives_check
                {
                    if searched >= LMR_DEEP_MOVE_INDEX {
                        2
                    } else {
                        1
                    }
                } else {
                    0
                };

                let mut score =
                    -self.alpha_beta(position, depth - 1 - reduction, -alpha - 1, -alpha, ply + 1, true);
                if reduction > 0 && score > alpha && !self.stopped {
                    self.stats.lmr_researches += 1;
                    score = -self.alpha_beta(position, depth - 1, -alpha - 1, -alpha, ply + 1, true);
                }
                if score > alpha && score < beta && !self.stopped {
                    score = -self.alpha_beta(position, depth - 1, -beta, -alpha, ply + 1, true);
                }
                score
            };
            self.path.pop();
            position.undo(mv, undo);
            searched += 1;

            if self.stopped {
                return 0;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                self.orderer.record_cutoff(mv, ply, depth);
                break;
            }
        }

        if best_move.is_none() {
            return alpha;
        }

        let bound = if best_score <= original_alpha {
            Bound::Upper
        } else if best_score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt
            .store(key, depth, score_to_tt(best_score, ply), bound, best_move);

        best_score
    }
}
