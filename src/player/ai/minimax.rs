use super::search::{DepthLimit, SearchContext, INFINITY};
use super::tt::Bound;
use crate::core::{Board, Move};

/// Plain depth-limited minimax over max nodes (perspective player to move)
/// and min nodes (opponent to move).
pub(crate) struct Minimax<'a> {
    pub ctx: SearchContext<'a>,
}

impl<'a> Minimax<'a> {
    pub fn new(ctx: SearchContext<'a>) -> Self {
        Self { ctx }
    }

    /// Root call: the perspective player is to move.
    pub fn search(&mut self, board: &Board, depth: DepthLimit) -> (Option<Move>, i32) {
        self.minimax(board, depth, true)
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: DepthLimit,
        is_maximizing: bool,
    ) -> (Option<Move>, i32) {
        self.ctx.stats.nodes += 1;
        let mover = self.ctx.mover(is_maximizing);

        if self.ctx.caching {
            if let Some(entry) = self.ctx.tt.get(board, mover) {
                self.ctx.stats.cache_hits += 1;
                return (entry.best_move, entry.score);
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

        let mut best_move = None;
        let mut best_value = if is_maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            let next_board = self.ctx.rules.apply_move(board, mover, mv);
            let (_, value) = self.minimax(&next_board, depth.next(), !is_maximizing);

            // strict comparison: the first of several equal moves is kept
            let better = if is_maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if better {
                best_value = value;
                best_move = Some(mv);
            }
        }

        if self.ctx.caching {
            self.ctx
                .tt
                .store(board, mover, best_move, best_value, Bound::Exact);
        }
        (best_move, best_value)
    }
}
