//! # Evaluation Module
//!
//! Static evaluation of Othello positions. Every score is expressed from the
//! point of view of the player passed in (positive = good for that player).
//!
//! ## Evaluators
//! 1. [`DiskCountEvaluator`]: disk differential as reported by the rules. This
//!    is the utility the search is specified against.
//! 2. [`PositionalEvaluator`]: disk differential plus corner occupancy and
//!    penalties for X-/C-squares next to an empty corner.
//!
//! Both are zero-sum, so negating a score is the same as evaluating for the
//! opponent.

use super::config::EvaluationConfig;
use super::evaluator::Evaluator;
use crate::core::{Board, Cell, PlayerId};
use crate::logic::Rules;

/// Disk differential (own disks minus opponent disks).
pub fn utility(rules: &dyn Rules, board: &Board, player: PlayerId) -> i32 {
    let (dark, light) = rules.score(board);
    let diff = dark as i32 - light as i32;
    match player {
        PlayerId::Dark => diff,
        PlayerId::Light => -diff,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiskCountEvaluator;

impl Evaluator for DiskCountEvaluator {
    fn evaluate(&self, rules: &dyn Rules, board: &Board, player: PlayerId) -> i32 {
        utility(rules, board, player)
    }

    fn name(&self) -> &str {
        "disk-count"
    }
}

#[derive(Debug, Clone)]
pub struct PositionalEvaluator {
    pub corner_bonus: i32,
    pub x_square_penalty: i32,
    pub c_square_penalty: i32,
}

impl PositionalEvaluator {
    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self {
            corner_bonus: config.corner_bonus,
            x_square_penalty: config.x_square_penalty,
            c_square_penalty: config.c_square_penalty,
        }
    }

    /// Positional terms for one side, before the opponent's are subtracted.
    fn side_bonus(&self, board: &Board, player: PlayerId) -> i32 {
        let n = board.size();
        if n < 4 {
            return 0;
        }
        let own = Cell::disk(player);
        let last = n - 1;
        let mut bonus = 0;

        // (corner, x-square, c-squares)
        let regions = [
            ((0, 0), (1, 1), [(1, 0), (0, 1)]),
            ((last, 0), (last - 1, 1), [(last - 1, 0), (last, 1)]),
            ((0, last), (1, last - 1), [(0, last - 1), (1, last)]),
            (
                (last, last),
                (last - 1, last - 1),
                [(last - 1, last), (last, last - 1)],
            ),
        ];

        for ((cx, cy), (xx, xy), c_squares) in regions {
            let corner = board.get(cx, cy);
            if corner == own {
                bonus += self.corner_bonus;
            } else if corner.is_empty() {
                if board.get(xx, xy) == own {
                    bonus -= self.x_square_penalty;
                }
                for (sx, sy) in c_squares {
                    if board.get(sx, sy) == own {
                        bonus -= self.c_square_penalty;
                    }
                }
            }
        }

        bonus
    }
}

impl Default for PositionalEvaluator {
    fn default() -> Self {
        Self::from_config(&EvaluationConfig::default())
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate(&self, rules: &dyn Rules, board: &Board, player: PlayerId) -> i32 {
        utility(rules, board, player) + self.side_bonus(board, player)
            - self.side_bonus(board, player.opponent())
    }

    fn name(&self) -> &str {
        "positional"
    }
}

/// Evaluator selected by the configuration.
pub fn from_config(config: &EvaluationConfig) -> Box<dyn Evaluator> {
    if config.positional {
        Box::new(PositionalEvaluator::from_config(config))
    } else {
        Box::new(DiskCountEvaluator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{setup_from_strings, standard_setup};
    use crate::logic::{apply_move, legal_moves, Othello};

    fn sample_boards() -> Vec<Board> {
        let mut boards = vec![standard_setup(8)];
        let mut board = standard_setup(8);
        let mut player = PlayerId::Dark;
        for _ in 0..20 {
            let moves = legal_moves(&board, player);
            if let Some(&mv) = moves.last() {
                board = apply_move(&board, mv, player);
                boards.push(board.clone());
            }
            player = player.opponent();
        }
        boards.push(setup_from_strings(&[
            "X O . .",
            "O O . .",
            ". . . X",
            ". . X O",
        ]));
        boards
    }

    #[test]
    fn test_utility_disk_difference() {
        let board = setup_from_strings(&["X X X", "O . .", ". . X"]);
        assert_eq!(utility(&Othello, &board, PlayerId::Dark), 3);
        assert_eq!(utility(&Othello, &board, PlayerId::Light), -3);
    }

    #[test]
    fn test_evaluators_are_zero_sum() {
        let positional = PositionalEvaluator::default();
        for board in sample_boards() {
            for player in [PlayerId::Dark, PlayerId::Light] {
                assert_eq!(
                    DiskCountEvaluator.evaluate(&Othello, &board, player),
                    -DiskCountEvaluator.evaluate(&Othello, &board, player.opponent())
                );
                assert_eq!(
                    positional.evaluate(&Othello, &board, player),
                    -positional.evaluate(&Othello, &board, player.opponent())
                );
            }
        }
    }

    #[test]
    fn test_positional_corner_and_x_square() {
        let eval = PositionalEvaluator {
            corner_bonus: 3,
            x_square_penalty: 4,
            c_square_penalty: 1,
        };
        // Dark owns a corner, light sits on the x-square of an empty corner.
        let board = setup_from_strings(&[
            "X . . .",
            ". . . .",
            ". . O .",
            ". . . .",
        ]);
        // disks 0, corner +3, light x-square -4 counted against light
        assert_eq!(eval.evaluate(&Othello, &board, PlayerId::Dark), 7);

        // x-square next to an owned corner is not penalised
        let board = setup_from_strings(&[
            "O . . .",
            ". O . .",
            ". . . .",
            ". . . .",
        ]);
        assert_eq!(eval.evaluate(&Othello, &board, PlayerId::Light), 2 + 3);
    }

    #[test]
    fn test_from_config_selects_evaluator() {
        let mut config = EvaluationConfig::default();
        assert_eq!(from_config(&config).name(), "disk-count");
        config.positional = true;
        assert_eq!(from_config(&config).name(), "positional");
    }
}
