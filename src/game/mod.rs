use crate::core::{Board, Move, PlayerId};
use crate::logic::{apply_move, legal_moves, score};
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};

/// One ply of a finished game. `mv == None` is a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    pub player: PlayerId,
    pub mv: Option<Move>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub initial: Board,
    pub plies: Vec<PlyRecord>,
    pub final_board: Board,
    pub dark_score: u32,
    pub light_score: u32,
}

impl GameRecord {
    pub fn winner(&self) -> Option<PlayerId> {
        match self.dark_score.cmp(&self.light_score) {
            std::cmp::Ordering::Greater => Some(PlayerId::Dark),
            std::cmp::Ordering::Less => Some(PlayerId::Light),
            std::cmp::Ordering::Equal => None,
        }
    }
}

pub struct Game {
    pub board: Board,
    pub current_player: PlayerId,
    pub history: Vec<PlyRecord>,
    initial: Board,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game {
            initial: board.clone(),
            board,
            current_player: PlayerId::Dark,
            history: Vec::new(),
        }
    }

    /// Plays until neither side can move. A side without legal moves passes.
    ///
    /// A controller returning `None` or an illegal move while it has legal
    /// moves is an error.
    pub fn play(
        &mut self,
        dark: &dyn PlayerController,
        light: &dyn PlayerController,
    ) -> anyhow::Result<GameRecord> {
        let mut passes_in_a_row = 0;

        while passes_in_a_row < 2 {
            let player = self.current_player;
            let moves = legal_moves(&self.board, player);

            if moves.is_empty() {
                tracing::trace!(player = %player, "pass");
                self.history.push(PlyRecord { player, mv: None });
                passes_in_a_row += 1;
                self.current_player = player.opponent();
                continue;
            }
            passes_in_a_row = 0;

            let controller = match player {
                PlayerId::Dark => dark,
                PlayerId::Light => light,
            };

            let mv = controller
                .choose_move(&self.board, player, &moves)
                .ok_or_else(|| anyhow::anyhow!("{} passed with legal moves available", controller.name()))?;
            if !moves.contains(&mv) {
                anyhow::bail!("{} chose illegal move {}", controller.name(), mv);
            }

            self.board = apply_move(&self.board, mv, player);
            self.history.push(PlyRecord {
                player,
                mv: Some(mv),
            });
            self.current_player = player.opponent();
        }

        // the two trailing passes are not part of the game
        self.history.truncate(self.history.len().saturating_sub(2));

        let (dark_score, light_score) = score(&self.board);
        Ok(GameRecord {
            initial: self.initial.clone(),
            plies: self.history.clone(),
            final_board: self.board.clone(),
            dark_score,
            light_score,
        })
    }
}
