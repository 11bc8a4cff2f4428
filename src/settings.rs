//! Search settings persistence
//!
//! Loads a [`SearchConfig`] from a JSON file. Any field the file omits keeps its default,
//! and a missing or unreadable file falls back to defaults with a warning so a bad
//! config never stops a search from running.

use chess_engine::SearchConfig;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load search settings, falling back to [`SearchConfig::default`]
pub fn load_search_config(path: Option<&Path>) -> SearchConfig {
    let Some(path) = path else {
        return SearchConfig::default();
    };

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<SearchConfig>(&contents) {
            Ok(config) => {
                info!("[SETTINGS] Loaded search config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to parse search config at {:?}: {}. Using defaults.",
                    path, e
                );
                SearchConfig::default()
            }
        },
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to read search config at {:?}: {}. Using defaults.",
                path, e
            );
            SearchConfig::default()
        }
    }
}
