use super::config::AIConfig;
use super::eval;
use super::search::{DepthLimit, SearchOptions, SearchStats};
use super::selector::MoveSelector;
use crate::core::{Board, Move, PlayerId};
use crate::logic::Othello;
use crate::player::PlayerController;
use std::cell::RefCell;

/// A [`MoveSelector`] with fixed search settings, usable as a player.
pub struct SearchAI {
    name: String,
    selector: RefCell<MoveSelector>,
    depth: DepthLimit,
    options: SearchOptions,
}

impl SearchAI {
    pub fn new(name: &str, depth: DepthLimit, options: SearchOptions) -> Self {
        Self::with_selector(name, MoveSelector::default(), depth, options)
    }

    /// Evaluator and cache mode taken from the configuration.
    pub fn from_config(
        name: &str,
        config: &AIConfig,
        depth: DepthLimit,
        options: SearchOptions,
    ) -> Self {
        let selector = MoveSelector::new(Box::new(Othello), eval::from_config(&config.evaluation));
        let options = options.with_bounded_cache(config.search.bounded_cache);
        Self::with_selector(name, selector, depth, options)
    }

    pub fn with_selector(
        name: &str,
        selector: MoveSelector,
        depth: DepthLimit,
        options: SearchOptions,
    ) -> Self {
        Self {
            name: name.to_string(),
            selector: RefCell::new(selector),
            depth,
            options,
        }
    }

    /// Counters from the most recent decision.
    pub fn last_stats(&self) -> SearchStats {
        self.selector.borrow().last_stats()
    }
}

impl PlayerController for SearchAI {
    fn choose_move(&self, board: &Board, player: PlayerId, _legal_moves: &[Move]) -> Option<Move> {
        self.selector
            .borrow_mut()
            .select_move(board, player, self.depth, self.options)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
