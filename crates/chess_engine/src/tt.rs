//! # Transposition Table
//!
//! ## Overview
//!
//! A fixed-capacity, single-slot-per-index hash table memoizing search results by Zobrist
//! key. Each position maps to slot `key % capacity`. The full key is stored alongside the
//! result and compared on every probe, so an index collision is a cache miss, never a hit.
//!
//! ## Replacement
//!
//! Depth-preferred: a store overwrites the slot when it is empty or when the new depth is
//! at least the stored depth. Shallower results never evict deeper ones.
//!
//! ## Probe Semantics
//!
//! | Stored bound | Condition | Usable score |
//! |---|---|---|
//! | any | stored depth < requested depth | none, move hint only |
//! | `Exact` | - | stored score |
//! | `Lower` | score ≥ beta | beta |
//! | `Upper` | score ≤ alpha | alpha |
//! | otherwise | - | none, move hint only |
//!
//! ## Mate Scores
//!
//! Mate scores count plies from the root, which differs between transpositions reached at
//! different plies. [`score_to_tt`] makes them relative to the storing node before a store;
//! [`TranspositionTable::probe_at_ply`] converts them back before the bound comparison.

use crate::constants::MATE_THRESHOLD;
use crate::types::Move;
use serde::{Deserialize, Serialize};
use std::mem::size_of;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    pub depth: i32,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

/// Probe outcome. Both fields are `None` on a miss.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TtProbe {
    pub score: Option<i32>,
    pub best_move: Option<Move>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct TtStats {
    pub capacity: usize,
    pub occupied: usize,
    pub probes: u64,
    pub hits: u64,
}

impl TtStats {
    /// Fraction of probes that found a matching key.
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }
}

pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
    occupied: usize,
    probes: u64,
    hits: u64,
}

impl TranspositionTable {
    /// Table with exactly `capacity` slots (at least one).
    pub fn new(capacity: usize) -> Self {
        TranspositionTable {
            entries: vec![None; capacity.max(1)],
            occupied: 0,
            probes: 0,
            hits: 0,
        }
    }

    /// Table sized to fit a memory budget.
    pub fn with_megabytes(megabytes: usize) -> Self {
        let bytes = megabytes.saturating_mul(1024 * 1024);
        Self::new(bytes / size_of::<Option<TtEntry>>())
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    pub fn store(&mut self, key: u64, depth: i32, score: i32, bound: Bound, best_move: Option<Move>) {
        let index = self.index(key);
        match &self.entries[index] {
            Some(existing) if existing.depth > depth => return,
            Some(_) => {}
            None => self.occupied += 1,
        }
        self.entries[index] = Some(TtEntry {
            key,
            depth,
            score,
            bound,
            best_move,
        });
    }

    pub fn probe(&mut self, key: u64, depth: i32, alpha: i32, beta: i32) -> TtProbe {
        self.probe_at_ply(key, depth, alpha, beta, 0)
    }

    /// Like [`probe`](Self::probe), with mate scores re-based to `ply` plies from the root.
    pub fn probe_at_ply(&mut self, key: u64, depth: i32, alpha: i32, beta: i32, ply: usize) -> TtProbe {
        self.probes += 1;
        let Some(entry) = self.entry(key) else {
            return TtProbe::default();
        };
        self.hits += 1;

        let hint = TtProbe {
            score: None,
            best_move: entry.best_move,
        };
        if entry.depth < depth {
            return hint;
        }

        let score = score_from_tt(entry.score, ply);
        let usable = match entry.bound {
            Bound::Exact => Some(score),
            Bound::Lower if score >= beta => Some(beta),
            Bound::Upper if score <= alpha => Some(alpha),
            _ => None,
        };
        TtProbe {
            score: usable,
            best_move: entry.best_move,
        }
    }

    /// Stored entry for `key`, without touching the statistics.
    pub fn entry(&self, key: u64) -> Option<TtEntry> {
        self.entries[self.index(key)].filter(|entry| entry.key == key)
    }

    pub fn best_move(&self, key: u64) -> Option<Move> {
        self.entry(key).and_then(|entry| entry.best_move)
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|slot| *slot = None);
        self.occupied = 0;
        self.probes = 0;
        self.hits = 0;
    }

    pub fn stats(&self) -> TtStats {
        TtStats {
            capacity: self.entries.len(),
            occupied: self.occupied,
            probes: self.probes,
            hits: self.hits,
        }
    }
}

/// Converts a root-relative mate score to one relative to the node at `ply`.
pub fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score > MATE_THRESHOLD {
        score + ply as i32
    } else if score < -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

pub fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score > MATE_THRESHOLD {
        score - ply as i32
    } else if score < -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}
