use othello_aho_ai::player::ai::AIConfig;
use othello_aho_ai::protocol::run_session;
use std::io;

fn main() -> anyhow::Result<()> {
    othello_aho_ai::init_logging();

    let config = AIConfig::get();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_session(stdin.lock(), stdout.lock(), config) {
        Ok(summary) => {
            tracing::info!(decisions = summary.decisions, "session closed");
            Ok(())
        }
        Err(e) => {
            tracing::error!("protocol error: {}", e);
            Err(e.into())
        }
    }
}
