//! # Chess Engine - Bitboard Core with Alpha-Beta Search
//!
//! ## Overview
//!
//! A two-player, perfect-information search engine for chess. The engine picks a move by
//! searching the game tree to a bounded depth (or until a wall-clock deadline) and returning
//! the move judged best under a static evaluation.
//!
//! ## Module Organization
//!
//! ### Core Data
//! - **[`bitset`]** - 64-bit bitboard with set operations and square iteration
//! - **[`types`]** - Colors, piece kinds, moves, castling rights, game states
//! - **[`board`]** - Square indexing and algebraic square names
//! - **[`constants`]** - Piece values, score bounds, search tuning parameters
//!
//! ### Game Logic
//! - **[`position`]** - Twelve piece bitboards plus scalar state; apply and undo moves
//! - **[`fen`]** - Forsyth-Edwards notation import/export
//! - **[`hash`]** - Zobrist keys and from-scratch fingerprints
//! - **[`move_gen`]** - Pseudo-legal move generation from precomputed attack tables
//! - **[`legality`]** - Legal move filtering, check/mate/stalemate classification, perft
//!
//! ### Search
//! - **[`tt`]** - Depth-preferred transposition table
//! - **[`evaluation`]** - The [`Evaluator`] contract and the bundled evaluators
//! - **[`search`]** - Iterative deepening, PVS alpha-beta, quiescence, move ordering
//! - **[`api`]** - Convenience entry points for callers that only want a move
//!
//! ## Example
//!
//! ```rust
//! use chess_engine::{Position, SearchConfig, SearchEngine};
//!
//! let position = Position::new();
//! let mut engine = SearchEngine::new(SearchConfig {
//!     tt_size_mb: 1,
//!     ..SearchConfig::default()
//! });
//! let best = engine.find_best_move(&position, 2, None);
//! assert!(best.is_some());
//! ```

pub mod api;
pub mod bitset;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod fen;
pub mod hash;
pub mod legality;
pub mod move_gen;
pub mod position;
pub mod search;
pub mod tt;
pub mod types;

pub use bitset::Bitboard;
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::{Evaluator, MaterialEvaluator, StandardEvaluator};
pub use move_gen::{AttackTables, MoveGenerator};
pub use position::{Position, UndoInfo};
pub use search::{SearchConfig, SearchEngine, SearchResult, SearchStats};
pub use tt::{Bound, TranspositionTable};
pub use types::{CastlingRights, Color, GameState, Move, MoveKind, Piece, PieceKind, Square};
