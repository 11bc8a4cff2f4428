//! Search configuration
//!
//! Every pruning technique can be switched off independently. The struct deserializes from
//! JSON with missing fields taking their defaults, so a settings file only needs the keys
//! it changes.

use crate::constants::{DEFAULT_ASPIRATION_WINDOW, DEFAULT_MAX_DEPTH, DEFAULT_TT_SIZE_MB};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub time_limit_ms: Option<u64>,
    pub tt_size_mb: usize,
    pub null_move: bool,
    pub late_move_reductions: bool,
    pub aspiration_windows: bool,
    pub futility_pruning: bool,
    pub delta_pruning: bool,
    pub quiescence: bool,
    /// Initial half-width of the aspiration window, in centipawns.
    pub aspiration_window: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            time_limit_ms: None,
            tt_size_mb: DEFAULT_TT_SIZE_MB,
            null_move: true,
            late_move_reductions: true,
            aspiration_windows: true,
            futility_pruning: true,
            delta_pruning: true,
            quiescence: true,
            aspiration_window: DEFAULT_ASPIRATION_WINDOW,
        }
    }
}

impl SearchConfig {
    /// Plain alpha-beta: no forward pruning, no reductions, full-width root window.
    pub fn exhaustive() -> Self {
        SearchConfig {
            null_move: false,
            late_move_reductions: false,
            aspiration_windows: false,
            futility_pruning: false,
            delta_pruning: false,
            ..SearchConfig::default()
        }
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}
