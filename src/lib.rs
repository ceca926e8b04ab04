pub mod core;
pub mod game;
pub mod logic;
pub mod player;
pub mod protocol;
pub mod selfplay;


/// Logs go to stderr: stdout carries the protocol.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
