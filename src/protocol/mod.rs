//! Line protocol spoken with the game manager.
//!
//! ```text
//! engine  -> Othello AI
//! manager -> 1,4,2,1,1          color,depth,algorithm,caching,ordering
//! manager -> SCORE 2 2
//! manager -> [[0, 0, ...], ...]
//! engine  -> 3 2
//! ...
//! manager -> FINAL 40 24
//! ```

pub mod message;
pub mod session;

pub use message::{format_move, ProtocolError, SessionSetup, Status};
pub use session::{run_session, SessionSummary};
