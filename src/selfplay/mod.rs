//! Batches of engine games used to compare search settings.
//!
//! Games are independent, so they run in parallel on the rayon pool. Every
//! game builds its own players, which keeps each search (and its cache) on a
//! single thread.

use crate::core::{standard_setup, Board, Move, PlayerId};
use crate::game::{Game, GameRecord};
use crate::player::ai::{AIConfig, DepthLimit, SearchOptions, SearchStats};
use crate::player::{PlayerController, RandomAI, SearchAI};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    Random,
    /// Same search settings as the engine under test.
    Mirror,
}

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub board_size: usize,
    pub depth: DepthLimit,
    pub options: SearchOptions,
    pub opponent: Opponent,
    pub seed: u64,
    pub save_records: bool,
    pub output_dir: PathBuf,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GameResult {
    /// Color played by the engine under test.
    pub engine_color: PlayerId,
    pub winner: Option<PlayerId>,
    pub dark_score: u32,
    pub light_score: u32,
    pub moves: usize,
    pub time_ms: u128,
    /// Summed over every decision the engine made in this game.
    pub search: SearchStats,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub engine_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub avg_nodes_per_game: f64,
    pub depth: DepthLimit,
    pub options: SearchOptions,
    pub opponent: Opponent,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new(config: &SelfPlayConfig) -> Self {
        Self {
            total_games: 0,
            engine_wins: 0,
            opponent_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            avg_time_ms: 0.0,
            avg_nodes_per_game: 0.0,
            depth: config.depth,
            options: config.options,
            opponent: config.opponent,
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(w) if w == result.engine_color => self.engine_wins += 1,
            Some(_) => self.opponent_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let n = self.games.len() as f64;
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        let total_nodes: u64 = self.games.iter().map(|g| g.search.nodes).sum();
        self.avg_moves = total_moves as f64 / n;
        self.avg_time_ms = total_time as f64 / n;
        self.avg_nodes_per_game = total_nodes as f64 / n;
    }
}

/// Wraps the engine under test and sums its search counters.
struct TrackedEngine {
    inner: SearchAI,
    totals: std::cell::Cell<SearchStats>,
}

impl PlayerController for TrackedEngine {
    fn choose_move(&self, board: &Board, player: PlayerId, legal_moves: &[Move]) -> Option<Move> {
        let mv = self.inner.choose_move(board, player, legal_moves);
        let last = self.inner.last_stats();
        let mut totals = self.totals.get();
        totals.nodes += last.nodes;
        totals.leaves += last.leaves;
        totals.cache_hits += last.cache_hits;
        totals.cutoffs += last.cutoffs;
        self.totals.set(totals);
        mv
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let ai_config = AIConfig::get();

    let outcomes: Vec<anyhow::Result<(GameResult, GameRecord)>> = (0..config.num_games)
        .into_par_iter()
        .map(|game_num| play_one(config, ai_config, game_num))
        .collect();

    let mut stats = SelfPlayStats::new(config);
    for (game_num, outcome) in outcomes.into_iter().enumerate() {
        let (result, record) = outcome?;
        tracing::info!(
            game = game_num + 1,
            engine = %result.engine_color,
            dark = result.dark_score,
            light = result.light_score,
            nodes = result.search.nodes,
            "game finished"
        );
        stats.add_result(result);

        if config.save_records {
            save_record(&config.output_dir, game_num + 1, &record)?;
        }
    }

    Ok(stats)
}

fn play_one(
    config: &SelfPlayConfig,
    ai_config: &AIConfig,
    game_num: usize,
) -> anyhow::Result<(GameResult, GameRecord)> {
    let start_time = Instant::now();

    // alternate colors so neither side always moves first
    let engine_color = if game_num % 2 == 0 {
        PlayerId::Dark
    } else {
        PlayerId::Light
    };

    let engine = TrackedEngine {
        inner: SearchAI::from_config("engine", ai_config, config.depth, config.options),
        totals: std::cell::Cell::new(SearchStats::default()),
    };
    let opponent: Box<dyn PlayerController> = match config.opponent {
        Opponent::Random => Box::new(RandomAI::seeded(
            "random",
            config.seed.wrapping_add(game_num as u64),
        )),
        Opponent::Mirror => Box::new(SearchAI::from_config(
            "mirror",
            ai_config,
            config.depth,
            config.options,
        )),
    };

    let (dark, light): (&dyn PlayerController, &dyn PlayerController) = match engine_color {
        PlayerId::Dark => (&engine as &dyn PlayerController, opponent.as_ref()),
        PlayerId::Light => (opponent.as_ref(), &engine as &dyn PlayerController),
    };

    let mut game = Game::new(standard_setup(config.board_size));
    let record = game.play(dark, light)?;

    let result = GameResult {
        engine_color,
        winner: record.winner(),
        dark_score: record.dark_score,
        light_score: record.light_score,
        moves: record.plies.iter().filter(|p| p.mv.is_some()).count(),
        time_ms: start_time.elapsed().as_millis(),
        search: engine.totals.get(),
    };
    Ok((result, record))
}

fn save_record(dir: &Path, game_num: usize, record: &GameRecord) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;

    let filename = dir.join(format!(
        "game_{:04}_{}.json",
        game_num,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let file = std::fs::File::create(filename)?;
    serde_json::to_writer(file, record)?;
    Ok(())
}

/// Writes the aggregated stats as `selfplay_<timestamp>.json` and returns the path.
pub fn save_stats(dir: &Path, stats: &SelfPlayStats) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(format!(
        "selfplay_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));
    let file = std::fs::File::create(&path)?;
    serde_json::to_writer_pretty(file, stats)?;
    Ok(path)
}
