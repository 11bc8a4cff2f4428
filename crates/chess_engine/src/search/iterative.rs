//! Iterative deepening search
//!
//! Runs complete root searches at depth 1, 2, ... up to the requested maximum. Only a fully
//! completed iteration replaces the current best move: when the deadline trips mid-iteration
//! the partial result is discarded and the previous depth's move is returned. If not even
//! depth 1 completes, the first legal move is returned so a caller with legal moves always
//! gets one.
//!
//! From depth 2 on, each iteration may start with an aspiration window around the previous
//! score, doubling its width and re-searching whenever the result falls outside.

use super::{SearchEngine, SearchResult, SearchStats};
use crate::constants::*;
use crate::evaluation::Evaluator;
use crate::position::Position;
use crate::tt::{score_to_tt, Bound};
use crate::types::Move;
use instant::Instant;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

impl<E: Evaluator> SearchEngine<E> {
    /// Best move for the side to move, or `None` when there is no legal move.
    pub fn find_best_move(
        &mut self,
        position: &Position,
        max_depth: u8,
        time_limit: Option<Duration>,
    ) -> Option<Move> {
        self.search(position, max_depth, time_limit).best_move
    }

    /// Full search with score, principal variation and statistics.
    pub fn search(
        &mut self,
        position: &Position,
        max_depth: u8,
        time_limit: Option<Duration>,
    ) -> SearchResult {
        let start = Instant::now();
        self.deadline = time_limit.map(|limit| start + limit);
        self.stopped = false;
        self.stats = SearchStats::default();
        self.orderer.clear();
        let tt_before = self.tt.stats();

        let mut root = *position;
        self.path.clear();
        self.path.push(root.hash());

        let root_moves = self.generator.legal_moves(&root);
        if root_moves.is_empty() {
            let score = if self.generator.is_in_check(&root, root.side_to_move()) {
                -MATE_SCORE
            } else {
                DRAW_SCORE
            };
            info!(score, "no legal moves at root");
            return SearchResult {
                best_move: None,
                score,
                depth: 0,
                pv: Vec::new(),
                stats: self.stats,
            };
        }

        let mut best_move: Option<Move> = None;
        let mut best_score = 0;
        let mut completed: u8 = 0;

        for depth in 1..=max_depth.max(1) {
            let (score, mv) = if self.config.aspiration_windows && depth > 1 {
                self.aspiration_search(&mut root, depth as i32, best_score, &root_moves, best_move)
            } else {
                self.root_search(&mut root, depth as i32, -INF, INF, &root_moves, best_move)
            };

            if self.stopped || mv.is_none() {
                debug!(depth, "iteration abandoned at deadline");
                break;
            }

            best_move = mv;
            best_score = score;
            completed = depth;
            self.stats.depth = depth;
            debug!(
                depth,
                score,
                nodes = self.stats.total_nodes(),
                best = %mv.map(|m| m.to_string()).unwrap_or_default(),
                "completed depth"
            );

            if self.time_up() {
                break;
            }
        }

        if best_move.is_none() {
            warn!("deadline expired before depth 1 completed, playing first legal move");
            best_move = root_moves.first().copied();
        }

        let tt_after = self.tt.stats();
        self.stats.tt_probes = tt_after.probes.saturating_sub(tt_before.probes);
        self.stats.tt_hits = tt_after.hits.saturating_sub(tt_before.hits);
        self.stats.elapsed_ms = start.elapsed().as_millis() as u64;

        let pv = self.extract_pv(position, best_move, completed);
        info!(
            depth = completed,
            score = best_score,
            nodes = self.stats.total_nodes(),
            nps = self.stats.nodes_per_second(),
            elapsed_ms = self.stats.elapsed_ms,
            best = %best_move.map(|m| m.to_string()).unwrap_or_default(),
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth: completed,
            pv,
            stats: self.stats,
        }
    }

    fn aspiration_search(
        &mut self,
        root: &mut Position,
        depth: i32,
        guess: i32,
        root_moves: &[Move],
        previous_best: Option<Move>,
    ) -> (i32, Option<Move>) {
        let mut window = self.config.aspiration_window.max(1);
        let mut alpha = (guess - window).max(-INF);
        let mut beta = (guess + window).min(INF);

        loop {
            let (score, mv) = self.root_search(root, depth, alpha, beta, root_moves, previous_best);
            if self.stopped || (score > alpha && score < beta) {
                return (score, mv);
            }
            if alpha <= -INF && beta >= INF {
                return (score, mv);
            }

            self.stats.aspiration_researches += 1;
            trace!(depth, score, alpha, beta, "aspiration window failed");
            window = window.saturating_mul(2);
            if score <= alpha {
                alpha = (guess - window).max(-INF);
            } else {
                beta = (guess + window).min(INF);
            }
            if window >= ASPIRATION_MAX_WINDOW {
                alpha = -INF;
                beta = INF;
            }
        }
    }

    /// One root iteration. Moves are ordered with the previous iteration's best first.
    fn root_search(
        &mut self,
        root: &mut Position,
        depth: i32,
        mut alpha: i32,
        beta: i32,
        root_moves: &[Move],
        previous_best: Option<Move>,
    ) -> (i32, Option<Move>) {
        let mut moves = root_moves.to_vec();
        let hint = previous_best.or_else(|| self.tt.best_move(root.hash()));
        self.orderer.order(&mut moves, hint, 0, root);

        let original_alpha = alpha;
        let mut best_score = -INF;
        let mut best_move: Option<Move> = None;

        for (index, mv) in moves.into_iter().enumerate() {
            if self.time_up() {
                self.stopped = true;
                break;
            }

            let undo = match root.apply(mv) {
                Ok(undo) => undo,
                Err(err) => {
                    trace!(%mv, %err, "skipping root move that failed to apply");
                    continue;
                }
            };
            self.stats.nodes += 1;
            self.path.push(root.hash());

            let score = if index == 0 {
                -self.alpha_beta(root, depth - 1, -beta, -alpha, 1, true)
            } else {
                let score = -self.alpha_beta(root, depth - 1, -alpha - 1, -alpha, 1, true);
                if score > alpha && score < beta && !self.stopped {
                    -self.alpha_beta(root, depth - 1, -beta, -alpha, 1, true)
                } else {
                    score
                }
            };

            self.path.pop();
            root.undo(mv, undo);

            if self.stopped {
                break;
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
                break;
            }
        }

        if !self.stopped {
            if let Some(mv) = best_move {
                let bound = if best_score <= original_alpha {
                    Bound::Upper
                } else if best_score >= beta {
                    Bound::Lower
                } else {
                    Bound::Exact
                };
                self.tt
                    .store(root.hash(), depth, score_to_tt(best_score, 0), bound, Some(mv));
            }
        }

        (best_score, best_move)
    }

    /// Follows transposition-table moves from the root, stopping at an illegal or missing
    /// move, a repeated position, or `depth` plies.
    fn extract_pv(&self, position: &Position, best_move: Option<Move>, depth: u8) -> Vec<Move> {
        let mut pv = Vec::with_capacity(depth as usize);
        let mut current = *position;
        let mut seen = HashSet::new();
        seen.insert(current.hash());

        let mut next = best_move;
        while let Some(mv) = next {
            if pv.len() >= depth.max(1) as usize || !self.generator.is_legal(&current, mv) {
                break;
            }
            if current.apply(mv).is_err() || !seen.insert(current.hash()) {
                break;
            }
            pv.push(mv);
            next = self.tt.best_move(current.hash());
        }
        pv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::MaterialEvaluator;
    use crate::search::SearchConfig;

    fn small_config() -> SearchConfig {
        SearchConfig {
            tt_size_mb: 1,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_find_best_move_starting_position() {
        let mut engine = crate::search::SearchEngine::new(small_config());
        let position = Position::new();
        let best = engine.find_best_move(&position, 3, None).expect("Should find a move");
        assert!(
            engine.generator().legal_moves(&position).contains(&best),
            "Best move should be legal"
        );
    }

    #[test]
    fn test_search_updates_stats() {
        let mut engine = crate::search::SearchEngine::new(small_config());
        let result = engine.search(&Position::new(), 3, None);
        assert_eq!(result.depth, 3);
        assert!(result.stats.nodes > 0, "Should have made search calls");
        assert_eq!(engine.stats(), result.stats);
        assert_eq!(result.pv.first().copied(), result.best_move);
    }

    #[test]
    fn test_search_leaves_position_untouched() {
        let mut engine = SearchEngine::with_evaluator(small_config(), MaterialEvaluator);
        let position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("valid FEN");
        let copy = position;
        engine.search(&position, 3, None);
        assert_eq!(position, copy);
    }

    #[test]
    fn test_zero_time_falls_back_to_legal_move() {
        let mut engine = crate::search::SearchEngine::new(small_config());
        let position = Position::new();
        let result = engine.search(&position, 8, Some(Duration::ZERO));
        assert_eq!(result.depth, 0, "No iteration can complete without time");
        let mv = result.best_move.expect("Fallback move");
        assert!(engine.generator().legal_moves(&position).contains(&mv));
    }

    #[test]
    fn test_captures_hanging_queen() {
        let mut engine = SearchEngine::with_evaluator(small_config(), MaterialEvaluator);
        let position = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("valid FEN");
        let best = engine.find_best_move(&position, 2, None).expect("move exists");
        assert_eq!(best.to_string(), "e4d5");
    }
}
