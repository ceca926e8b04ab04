use crate::core::{Board, Move, PlayerId};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

pub struct RandomAI {
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    /// Reproducible opponent for benchmarks.
    pub fn seeded(name: &str, seed: u64) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, _player: PlayerId, legal_moves: &[Move]) -> Option<Move> {
        legal_moves.choose(&mut *self.rng.borrow_mut()).copied()
    }
}
