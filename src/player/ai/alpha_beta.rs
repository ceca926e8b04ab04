use super::search::{DepthLimit, SearchContext, INFINITY};
use super::tt::Bound;
use crate::core::{Board, Move};
use std::cmp::Reverse;

/// Minimax with an (alpha, beta) pruning window.
///
/// Node shapes and sign conventions are the same as [`super::minimax`]: max
/// nodes return the raised alpha, min nodes the lowered beta, both on the
/// perspective player's scale.
pub(crate) struct AlphaBeta<'a> {
    pub ctx: SearchContext<'a>,
    ordering: bool,
    bounded_cache: bool,
}

impl<'a> AlphaBeta<'a> {
    pub fn new(ctx: SearchContext<'a>, ordering: bool, bounded_cache: bool) -> Self {
        Self {
            ctx,
            ordering,
            bounded_cache,
        }
    }

    /// Root call with the full window.
    pub fn search(&mut self, board: &Board, depth: DepthLimit) -> (Option<Move>, i32) {
        self.alpha_beta(board, depth, -INFINITY, INFINITY, true)
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: DepthLimit,
        mut alpha: i32,
        mut beta: i32,
        is_maximizing: bool,
    ) -> (Option<Move>, i32) {
        self.ctx.stats.nodes += 1;
        let mover = self.ctx.mover(is_maximizing);
        let (alpha_orig, beta_orig) = (alpha, beta);

        // TT Lookup
        if self.ctx.caching {
            if let Some(entry) = self.ctx.tt.get(board, mover) {
                if !self.bounded_cache || entry.usable(alpha, beta) {
                    self.ctx.stats.cache_hits += 1;
                    return (entry.best_move, entry.score);
                }
            }
        }

        let moves = self.ctx.rules.legal_moves(board, mover);
        if moves.is_empty() || depth.is_exhausted() {
            let value = self.ctx.leaf_value(board, is_maximizing);
            if self.ctx.caching {
                self.ctx.tt.store(board, mover, None, value, Bound::Exact);
            }
            return (None, value);
        }

        let mut children: Vec<(Move, Board)> = moves
            .into_iter()
            .map(|mv| (mv, self.ctx.rules.apply_move(board, mover, mv)))
            .collect();
        if self.ordering {
            self.order_moves(&mut children, is_maximizing);
        }

        let mut best_move = None;
        for (mv, next_board) in &children {
            let (_, value) = self.alpha_beta(next_board, depth.next(), alpha, beta, !is_maximizing);

            if is_maximizing {
                if value > alpha {
                    alpha = value;
                    best_move = Some(*mv);
                }
            } else if value < beta {
                beta = value;
                best_move = Some(*mv);
            }

            if beta <= alpha {
                self.ctx.stats.cutoffs += 1;
                break;
            }
        }

        let value = if is_maximizing { alpha } else { beta };

        // TT Store
        if self.ctx.caching {
            let bound = if self.bounded_cache {
                Bound::classify(value, alpha_orig, beta_orig)
            } else {
                Bound::Exact
            };
            self.ctx.tt.store(board, mover, best_move, value, bound);
        }

        (best_move, value)
    }

    /// Sorts children by a one-ply static score: best for the perspective
    /// player first at max nodes, worst first at min nodes. The sort is
    /// stable, so equal scores keep generator order.
    fn order_moves(&self, children: &mut Vec<(Move, Board)>, is_maximizing: bool) {
        let mut scored: Vec<(i32, (Move, Board))> = children
            .drain(..)
            .map(|(mv, b)| (self.ctx.shallow_value(&b), (mv, b)))
            .collect();
        if is_maximizing {
            scored.sort_by_key(|(score, _)| Reverse(*score));
        } else {
            scored.sort_by_key(|(score, _)| *score);
        }
        children.extend(scored.into_iter().map(|(_, child)| child));
    }
}
