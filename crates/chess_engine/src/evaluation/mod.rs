//! Position evaluation
//!
//! The search consumes evaluation through the [`Evaluator`] trait only: given a position,
//! return a signed centipawn score from the side to move's perspective. Implementations
//! must be pure functions of the position.
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material balance and [`MaterialEvaluator`]
//! - `position` - [`StandardEvaluator`] (material + positional + mobility)
//!
//! Any `Fn(&Position) -> i32` closure is also an evaluator.

mod material;
mod position;
mod pst;

pub use material::{material_balance, MaterialEvaluator};
pub use position::StandardEvaluator;
pub use pst::{is_endgame, pst_value};

use crate::position::Position;

pub trait Evaluator {
    /// Positive favors the side to move.
    fn evaluate(&self, position: &Position) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&Position) -> i32,
{
    fn evaluate(&self, position: &Position) -> i32 {
        self(position)
    }
}
