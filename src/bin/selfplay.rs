//! Plays batches of games to compare search settings.
//!
//! ```text
//! selfplay --games 20 --depth 4 --engine alpha-beta --caching --ordering
//! ```

use clap::{Parser, ValueEnum};
use othello_aho_ai::player::ai::{DepthLimit, SearchOptions};
use othello_aho_ai::selfplay::{run_selfplay, save_stats, Opponent, SelfPlayConfig};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Engine {
    Minimax,
    AlphaBeta,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OpponentArg {
    Random,
    Mirror,
}

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Run engine games and report search statistics")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 10)]
    games: usize,

    /// Depth limit in plies; negative disables the limit
    #[arg(short, long, default_value_t = 3, allow_hyphen_values = true)]
    depth: i64,

    #[arg(short, long, value_enum, default_value_t = Engine::AlphaBeta)]
    engine: Engine,

    /// Enable the transposition cache
    #[arg(long)]
    caching: bool,

    /// Enable move ordering (alpha-beta only)
    #[arg(long)]
    ordering: bool,

    #[arg(long, value_enum, default_value_t = OpponentArg::Random)]
    opponent: OpponentArg,

    /// Board side length
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Save every game record as JSON
    #[arg(long)]
    save_records: bool,

    #[arg(short, long, default_value = "selfplay_results")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    othello_aho_ai::init_logging();
    let args = Args::parse();

    if args.size < 4 || args.size % 2 != 0 {
        anyhow::bail!("board size must be even and at least 4, got {}", args.size);
    }

    let options = match args.engine {
        Engine::Minimax => SearchOptions::minimax(),
        Engine::AlphaBeta => SearchOptions::alpha_beta(),
    }
    .with_caching(args.caching)
    .with_ordering(args.ordering);

    let config = SelfPlayConfig {
        num_games: args.games,
        board_size: args.size,
        depth: DepthLimit::from_protocol(args.depth),
        options,
        opponent: match args.opponent {
            OpponentArg::Random => Opponent::Random,
            OpponentArg::Mirror => Opponent::Mirror,
        },
        seed: args.seed,
        save_records: args.save_records,
        output_dir: args.output.clone(),
    };

    tracing::info!(?config, "starting self-play");
    let stats = run_selfplay(&config)?;

    println!("=== Self-Play Results ===");
    println!("Games: {}", stats.total_games);
    let pct = |n: usize| n as f64 / stats.total_games.max(1) as f64 * 100.0;
    println!("Engine wins: {} ({:.1}%)", stats.engine_wins, pct(stats.engine_wins));
    println!("Opponent wins: {} ({:.1}%)", stats.opponent_wins, pct(stats.opponent_wins));
    println!("Draws: {} ({:.1}%)", stats.draws, pct(stats.draws));
    println!("Avg moves: {:.1}", stats.avg_moves);
    println!("Avg time: {:.1}ms", stats.avg_time_ms);
    println!("Avg nodes per game: {:.0}", stats.avg_nodes_per_game);

    let path = save_stats(&args.output, &stats)?;
    println!("Saved stats to {}", path.display());
    Ok(())
}
