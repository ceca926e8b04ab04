use crate::core::{Board, Move, PlayerId};
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bound {
    Exact,
    Lower, // fail high: true value >= score
    Upper, // fail low: true value <= score
}

impl Bound {
    /// Classifies a value returned by a node searched with window `(alpha, beta)`.
    pub fn classify(value: i32, alpha: i32, beta: i32) -> Bound {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub best_move: Option<Move>,
    pub score: i32,
    pub bound: Bound,
}

impl TTEntry {
    /// Whether this entry answers a search with window `(alpha, beta)`.
    pub fn usable(&self, alpha: i32, beta: i32) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

/// Board -> (best move, value) map for one top-level search.
///
/// Keyed by the board, with one slot per side to move. Entries are only
/// valid for a single (perspective, depth limit) search, so the owner clears
/// the table before and after every root call.
#[derive(Default)]
pub struct TranspositionTable {
    entries: HashMap<Board, [Option<TTEntry>; 2]>,
}

fn slot(player: PlayerId) -> usize {
    match player {
        PlayerId::Dark => 0,
        PlayerId::Light => 1,
    }
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .values()
            .map(|slots| slots.iter().filter(|e| e.is_some()).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, board: &Board, to_move: PlayerId) -> Option<TTEntry> {
        self.entries.get(board).and_then(|slots| slots[slot(to_move)])
    }

    pub fn store(
        &mut self,
        board: &Board,
        to_move: PlayerId,
        best_move: Option<Move>,
        score: i32,
        bound: Bound,
    ) {
        let slots = self.entries.entry(board.clone()).or_default();
        slots[slot(to_move)] = Some(TTEntry {
            best_move,
            score,
            bound,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::standard_setup;

    #[test]
    fn test_store_and_clear() {
        let mut tt = TranspositionTable::new();
        let board = standard_setup(8);
        assert!(tt.get(&board, PlayerId::Dark).is_none());

        tt.store(&board, PlayerId::Dark, Some(Move::new(3, 2)), 4, Bound::Exact);
        let entry = tt.get(&board, PlayerId::Dark).unwrap();
        assert_eq!(entry.best_move, Some(Move::new(3, 2)));
        assert_eq!(entry.score, 4);
        // side to move is part of the key
        assert!(tt.get(&board, PlayerId::Light).is_none());
        assert_eq!(tt.len(), 1);

        tt.clear();
        assert!(tt.is_empty());
    }

    #[test]
    fn test_bound_usability() {
        assert_eq!(Bound::classify(-5, -5, 5), Bound::Upper);
        assert_eq!(Bound::classify(7, -5, 5), Bound::Lower);
        assert_eq!(Bound::classify(0, -5, 5), Bound::Exact);

        let lower = TTEntry {
            best_move: None,
            score: 6,
            bound: Bound::Lower,
        };
        assert!(lower.usable(0, 6));
        assert!(!lower.usable(0, 10));

        let upper = TTEntry {
            best_move: None,
            score: -2,
            bound: Bound::Upper,
        };
        assert!(upper.usable(-2, 10));
        assert!(!upper.usable(-10, 10));
    }
}
