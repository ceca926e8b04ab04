//! Types shared by the minimax and alpha-beta engines.

use super::evaluator::Evaluator;
use super::tt::TranspositionTable;
use crate::core::{Board, PlayerId};
use crate::logic::Rules;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Larger than any reachable evaluation; stands in for +/- infinity in the
/// initial alpha-beta window.
pub const INFINITY: i32 = 1_000_000;

/// Remaining plies before a node is scored statically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthLimit {
    Limited(u32),
    /// Search until the side to move has no legal move.
    Unlimited,
}

impl DepthLimit {
    /// Wire value: any negative number (conventionally -1) disables the limit.
    pub fn from_protocol(limit: i64) -> Self {
        if limit < 0 {
            DepthLimit::Unlimited
        } else {
            DepthLimit::Limited(u32::try_from(limit).unwrap_or(u32::MAX))
        }
    }

    pub fn is_exhausted(self) -> bool {
        self == DepthLimit::Limited(0)
    }

    /// Budget for the children of a node.
    pub fn next(self) -> Self {
        match self {
            DepthLimit::Limited(d) => DepthLimit::Limited(d.saturating_sub(1)),
            DepthLimit::Unlimited => DepthLimit::Unlimited,
        }
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DepthLimit::Limited(d) => write!(f, "{}", d),
            DepthLimit::Unlimited => write!(f, "unlimited"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub algorithm: Algorithm,
    pub caching: bool,
    /// Alpha-beta only.
    pub ordering: bool,
    /// Alpha-beta only: honour cache bounds instead of reusing point values.
    pub bounded_cache: bool,
}

impl SearchOptions {
    pub fn minimax() -> Self {
        Self {
            algorithm: Algorithm::Minimax,
            caching: false,
            ordering: false,
            bounded_cache: true,
        }
    }

    pub fn alpha_beta() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            ..Self::minimax()
        }
    }

    pub fn with_caching(mut self, caching: bool) -> Self {
        self.caching = caching;
        self
    }

    pub fn with_ordering(mut self, ordering: bool) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_bounded_cache(mut self, bounded_cache: bool) -> Self {
        self.bounded_cache = bounded_cache;
        self
    }
}

/// Counters for one root search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cache_hits: u64,
    pub cutoffs: u64,
}

/// Everything a node needs besides the board: collaborators, the cache and
/// the player whose scale every value is expressed on.
pub(crate) struct SearchContext<'a> {
    pub rules: &'a dyn Rules,
    pub evaluator: &'a dyn Evaluator,
    pub tt: &'a mut TranspositionTable,
    pub stats: SearchStats,
    pub perspective: PlayerId,
    pub caching: bool,
}

impl<'a> SearchContext<'a> {
    /// Side to move at a max node (the perspective player) or a min node.
    pub fn mover(&self, is_maximizing: bool) -> PlayerId {
        if is_maximizing {
            self.perspective
        } else {
            self.perspective.opponent()
        }
    }

    /// Static value of a node that is not expanded.
    ///
    /// Min nodes evaluate for the side to move and negate, which keeps the
    /// value on the perspective player's scale.
    pub fn leaf_value(&mut self, board: &Board, is_maximizing: bool) -> i32 {
        self.stats.leaves += 1;
        let mover = self.mover(is_maximizing);
        let value = self.evaluator.evaluate(self.rules, board, mover);
        if is_maximizing {
            value
        } else {
            -value
        }
    }

    /// One-ply score used for move ordering, always from the perspective
    /// player's side.
    pub fn shallow_value(&self, board: &Board) -> i32 {
        self.evaluator.evaluate(self.rules, board, self.perspective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit_from_protocol() {
        assert_eq!(DepthLimit::from_protocol(-1), DepthLimit::Unlimited);
        assert_eq!(DepthLimit::from_protocol(-7), DepthLimit::Unlimited);
        assert_eq!(DepthLimit::from_protocol(0), DepthLimit::Limited(0));
        assert_eq!(DepthLimit::from_protocol(5), DepthLimit::Limited(5));
    }

    #[test]
    fn test_unlimited_never_exhausts() {
        let mut depth = DepthLimit::Unlimited;
        for _ in 0..100 {
            assert!(!depth.is_exhausted());
            depth = depth.next();
        }

        let mut depth = DepthLimit::Limited(2);
        depth = depth.next();
        assert!(!depth.is_exhausted());
        depth = depth.next();
        assert!(depth.is_exhausted());
        assert!(depth.next().is_exhausted());
    }
}
