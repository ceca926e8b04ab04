use crate::core::{Board, Move, PlayerId};

/// Something that picks a move for one side of a game.
pub trait PlayerController {
    /// `legal_moves` is never empty; passes are handled by the caller.
    fn choose_move(&self, board: &Board, player: PlayerId, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
}
