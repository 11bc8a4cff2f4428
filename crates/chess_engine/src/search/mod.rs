//! Alpha-beta search with iterative deepening
//!
//! This module implements the move-selection search:
//! - Negamax principal-variation search with a transposition table
//! - Quiescence search over captures (and check evasions) at the horizon
//! - Null-move pruning, late-move reductions and futility pruning, each toggleable
//! - Iterative deepening with aspiration windows and a wall-clock deadline
//!
//! The search is single-threaded and recursive. It works on one [`Position`] with
//! apply/undo, so every call returns the position exactly as it found it.
//!
//! ## Module Organization
//!
//! - `config` - [`SearchConfig`] toggles and limits
//! - `stats` - [`SearchStats`] counters
//! - `ordering` - [`MoveOrderer`]: TT move, MVV-LVA, killers, history
//! - `alphabeta` - Recursive PVS node search
//! - `quiescence` - Capture search past the horizon
//! - `iterative` - Root search, aspiration windows, deepening loop, PV extraction

mod alphabeta;
mod config;
mod iterative;
mod ordering;
mod quiescence;
mod stats;

pub use config::SearchConfig;
pub use ordering::MoveOrderer;
pub use stats::SearchStats;

use crate::constants::TIME_CHECK_INTERVAL;
use crate::evaluation::{Evaluator, StandardEvaluator};
use crate::move_gen::MoveGenerator;
use crate::position::Position;
use crate::tt::{TranspositionTable, TtStats};
use crate::types::Move;
use instant::Instant;
use serde::Serialize;

/// Outcome of one search call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult {
    /// `None` only when the root has no legal move.
    pub best_move: Option<Move>,
    /// Side-to-move perspective, from the last completed depth.
    pub score: i32,
    pub depth: u8,
    pub pv: Vec<Move>,
    pub stats: SearchStats,
}

/// The search orchestrator. Owns its transposition table and ordering tables, which stay
/// warm across calls on the same instance.
pub struct SearchEngine<E: Evaluator = StandardEvaluator> {
    config: SearchConfig,
    generator: MoveGenerator,
    evaluator: E,
    tt: TranspositionTable,
    orderer: MoveOrderer,
    stats: SearchStats,
    deadline: Option<Instant>,
    stopped: bool,
    /// Hashes of the positions on the current search path, root first.
    path: Vec<u64>,
}

impl SearchEngine<StandardEvaluator> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, StandardEvaluator::new())
    }
}

impl Default for SearchEngine<StandardEvaluator> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<E: Evaluator> SearchEngine<E> {
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        let tt = TranspositionTable::with_megabytes(config.tt_size_mb);
        SearchEngine {
            config,
            generator: MoveGenerator::new(),
            evaluator,
            tt,
            orderer: MoveOrderer::new(),
            stats: SearchStats::default(),
            deadline: None,
            stopped: false,
            path: Vec::with_capacity(crate::constants::MAX_PLY),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn generator(&self) -> &MoveGenerator {
        &self.generator
    }

    /// Counters from the most recent search call.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn tt_stats(&self) -> TtStats {
        self.tt.stats()
    }

    /// Forgets everything learned from previous searches.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.orderer.clear();
        self.stats = SearchStats::default();
    }

    /// Searches with the configured depth and time limit.
    pub fn go(&mut self, position: &Position) -> SearchResult {
        let depth = self.config.max_depth;
        let limit = self.config.time_limit();
        self.search(position, depth, limit)
    }

    #[inline]
    fn evaluate(&self, position: &Position) -> i32 {
        self.evaluator.evaluate(position)
    }

    #[inline]
    fn time_up(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Polls the deadline every few thousand nodes; sticky once tripped.
    #[inline]
    fn should_stop(&mut self) -> bool {
        if !self.stopped
            && (self.stats.nodes + self.stats.quiescence_nodes) % TIME_CHECK_INTERVAL == 0
            && self.time_up()
        {
            self.stopped = true;
        }
        self.stopped
    }

    /// True if `hash` occurred earlier on the search path since the last irreversible move.
    fn is_repetition(&self, hash: u64, halfmove_clock: u16) -> bool {
        let Some((_, earlier)) = self.path.split_last() else {
            return false;
        };
        earlier
            .iter()
            .rev()
            .take(halfmove_clock as usize)
            .any(|&h| h == hash)
    }
}
