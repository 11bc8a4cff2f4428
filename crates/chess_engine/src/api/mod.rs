//! Public API for the chess engine
//!
//! Thin helpers for callers that hold a [`Position`](crate::Position) and want to play moves
//! from text or ask the engine for a reply without touching the search internals.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move parsing, execution and validation (parse_move, do_move, is_legal_move)
//! - `state` - Game state queries and AI (get_game_state, reply)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::{do_move, is_legal_move, parse_move};
pub use state::{get_game_state, reply};
