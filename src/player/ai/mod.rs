pub mod alpha_beta;
pub mod config;
pub mod eval;
pub mod evaluator;
pub mod minimax;
pub mod random;
pub mod search;
pub mod search_ai;
pub mod selector;
pub mod tt;

pub use config::AIConfig;
pub use eval::{DiskCountEvaluator, PositionalEvaluator};
pub use evaluator::Evaluator;
pub use random::RandomAI;
pub use search::{Algorithm, DepthLimit, SearchOptions, SearchStats};
pub use search_ai::SearchAI;
pub use selector::{MoveSelector, SearchResult};
