use crate::core::{Board, Cell, Move, PlayerId};

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Game rules consumed by the search.
///
/// The search never inspects move legality itself; everything it knows about
/// the game comes through this trait.
pub trait Rules: Send + Sync {
    /// Legal moves for `player`, in a stable order. Empty means the player
    /// must pass.
    fn legal_moves(&self, board: &Board, player: PlayerId) -> Vec<Move>;

    /// Successor board after `player` plays `mv`. Only defined for legal moves.
    fn apply_move(&self, board: &Board, player: PlayerId, mv: Move) -> Board;

    /// Disk counts as `(dark, light)`.
    fn score(&self, board: &Board) -> (u32, u32);
}

/// Standard Othello rules on a square board of any size.
#[derive(Debug, Clone, Copy, Default)]
pub struct Othello;

impl Rules for Othello {
    fn legal_moves(&self, board: &Board, player: PlayerId) -> Vec<Move> {
        legal_moves(board, player)
    }

    fn apply_move(&self, board: &Board, player: PlayerId, mv: Move) -> Board {
        apply_move(board, mv, player)
    }

    fn score(&self, board: &Board) -> (u32, u32) {
        score(board)
    }
}

/// Legal moves in row-major scan, so moves come out ordered by (row, col).
pub fn legal_moves(board: &Board, player: PlayerId) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..board.size() {
        for col in 0..board.size() {
            if board.get(col, row).is_empty() && !flips(board, col, row, player).is_empty() {
                moves.push(Move::new(col, row));
            }
        }
    }
    moves
}

/// Places a disk for `player` and flips every bracketed line.
pub fn apply_move(board: &Board, mv: Move, player: PlayerId) -> Board {
    let disk = Cell::disk(player);
    let mut changes = flips(board, mv.col, mv.row, player);
    changes.push(mv);
    board.with_cells(changes.into_iter().map(|m| (m, disk)))
}

pub fn score(board: &Board) -> (u32, u32) {
    (
        board.count(PlayerId::Dark) as u32,
        board.count(PlayerId::Light) as u32,
    )
}

/// Both players have to pass.
pub fn is_game_over(board: &Board) -> bool {
    legal_moves(board, PlayerId::Dark).is_empty() && legal_moves(board, PlayerId::Light).is_empty()
}

/// Opponent disks that would be flipped by `player` playing at (col, row).
fn flips(board: &Board, col: usize, row: usize, player: PlayerId) -> Vec<Move> {
    let own = Cell::disk(player);
    let other = Cell::disk(player.opponent());
    let mut result = Vec::new();

    for (dx, dy) in DIRECTIONS {
        let mut line = Vec::new();
        let mut x = col as isize + dx;
        let mut y = row as isize + dy;
        while board.get_checked(x, y) == Some(other) {
            line.push(Move::new(x as usize, y as usize));
            x += dx;
            y += dy;
        }
        if !line.is_empty() && board.get_checked(x, y) == Some(own) {
            result.extend(line);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{setup_from_strings, standard_setup};

    #[test]
    fn test_opening_moves() {
        let board = standard_setup(8);
        let moves = legal_moves(&board, PlayerId::Dark);
        assert_eq!(
            moves,
            vec![
                Move::new(3, 2),
                Move::new(2, 3),
                Move::new(5, 4),
                Move::new(4, 5)
            ]
        );
    }

    #[test]
    fn test_apply_flips_bracketed_disks() {
        let board = standard_setup(8);
        let next = apply_move(&board, Move::new(3, 2), PlayerId::Dark);

        assert_eq!(next.get(3, 2), Cell::Dark);
        assert_eq!(next.get(3, 3), Cell::Dark);
        assert_eq!(score(&next), (4, 1));
        // original is untouched
        assert_eq!(score(&board), (2, 2));
    }

    #[test]
    fn test_flips_in_several_directions() {
        let board = setup_from_strings(&[
            "X . X . .",
            ". O O . .",
            "X O . O X",
            ". . O . .",
            ". . X . .",
        ]);
        let next = apply_move(&board, Move::new(2, 2), PlayerId::Dark);
        assert_eq!(score(&next), (11, 0));
    }

    #[test]
    fn test_no_moves_means_pass() {
        let board = setup_from_strings(&["X X", "X ."]);
        assert!(legal_moves(&board, PlayerId::Light).is_empty());
        assert!(legal_moves(&board, PlayerId::Dark).is_empty());
        assert!(is_game_over(&board));
        assert!(!is_game_over(&standard_setup(8)));
    }
}
