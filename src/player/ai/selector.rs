//! Top-level move selection.
//!
//! [`MoveSelector`] owns the transposition table and the collaborators the
//! engines need. Each call to [`MoveSelector::search`] clears the table on
//! entry and on exit, so nothing is ever reused between two decisions.

use super::alpha_beta::AlphaBeta;
use super::eval::DiskCountEvaluator;
use super::evaluator::Evaluator;
use super::minimax::Minimax;
use super::search::{Algorithm, DepthLimit, SearchContext, SearchOptions, SearchStats};
use super::tt::TranspositionTable;
use crate::core::{Board, Move, PlayerId};
use crate::logic::{Othello, Rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` means the player has to pass.
    pub best_move: Option<Move>,
    /// Value of the root on the searching player's scale.
    pub value: i32,
    pub stats: SearchStats,
}

pub struct MoveSelector {
    rules: Box<dyn Rules>,
    evaluator: Box<dyn Evaluator>,
    tt: TranspositionTable,
    last_stats: SearchStats,
}

impl MoveSelector {
    pub fn new(rules: Box<dyn Rules>, evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            rules,
            evaluator,
            tt: TranspositionTable::new(),
            last_stats: SearchStats::default(),
        }
    }

    pub fn evaluator_name(&self) -> &str {
        self.evaluator.name()
    }

    /// Stats of the most recent search.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Chooses a move for `player`, or `None` if it has no legal move.
    pub fn select_move(
        &mut self,
        board: &Board,
        player: PlayerId,
        depth: DepthLimit,
        options: SearchOptions,
    ) -> Option<Move> {
        self.search(board, player, depth, options).best_move
    }

    pub fn search(
        &mut self,
        board: &Board,
        player: PlayerId,
        depth: DepthLimit,
        options: SearchOptions,
    ) -> SearchResult {
        // A root with legal moves is always expanded, so a zero budget still
        // picks greedily among the immediate successors.
        let depth = match depth {
            DepthLimit::Limited(0) => DepthLimit::Limited(1),
            d => d,
        };

        self.tt.clear();
        let ctx = SearchContext {
            rules: self.rules.as_ref(),
            evaluator: self.evaluator.as_ref(),
            tt: &mut self.tt,
            stats: SearchStats::default(),
            perspective: player,
            caching: options.caching,
        };

        let ((best_move, value), stats) = match options.algorithm {
            Algorithm::Minimax => {
                let mut engine = Minimax::new(ctx);
                let result = engine.search(board, depth);
                (result, engine.ctx.stats)
            }
            Algorithm::AlphaBeta => {
                let mut engine = AlphaBeta::new(ctx, options.ordering, options.bounded_cache);
                let result = engine.search(board, depth);
                (result, engine.ctx.stats)
            }
        };
        let cached = self.tt.len();
        self.tt.clear();

        tracing::debug!(
            player = %player,
            depth = %depth,
            algorithm = ?options.algorithm,
            value,
            nodes = stats.nodes,
            leaves = stats.leaves,
            cache_hits = stats.cache_hits,
            cutoffs = stats.cutoffs,
            cached,
            "search finished"
        );

        self.last_stats = stats;
        SearchResult {
            best_move,
            value,
            stats,
        }
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(Box::new(Othello), Box::new(DiskCountEvaluator))
    }
}
