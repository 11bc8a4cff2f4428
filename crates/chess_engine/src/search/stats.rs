//! Search diagnostics, read-only after a search call returns.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SearchStats {
    /// Main-search nodes.
    pub nodes: u64,
    pub quiescence_nodes: u64,
    pub cutoffs: u64,
    pub tt_probes: u64,
    pub tt_hits: u64,
    pub null_move_cutoffs: u64,
    pub lmr_researches: u64,
    pub futility_prunes: u64,
    pub aspiration_researches: u64,
    /// Deepest fully completed iteration.
    pub depth: u8,
    pub elapsed_ms: u64,
}

impl SearchStats {
    pub fn total_nodes(&self) -> u64 {
        self.nodes + self.quiescence_nodes
    }

    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64
        }
    }

    pub fn nodes_per_second(&self) -> u64 {
        if self.elapsed_ms == 0 {
            self.total_nodes()
        } else {
            self.total_nodes() * 1000 / self.elapsed_ms
        }
    }
}
