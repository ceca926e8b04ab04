//! Evaluator trait for board evaluation
//!
//! Defines a common interface for different evaluation strategies.

use crate::core::{Board, PlayerId};
use crate::logic::Rules;

/// Trait for evaluating board positions
pub trait Evaluator: Send + Sync {
    /// Evaluate the board from `player`'s perspective.
    ///
    /// Must be pure. Implementations used with the search are expected to be
    /// zero-sum: `evaluate(b, p) == -evaluate(b, p.opponent())`.
    fn evaluate(&self, rules: &dyn Rules, board: &Board, player: PlayerId) -> i32;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;
}
