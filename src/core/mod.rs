pub mod board;
pub mod cell;
pub mod r#move;
pub mod serialization;
pub mod setup;
pub mod types;

pub use board::{Board, BoardError};
pub use cell::Cell;
pub use r#move::Move;
pub use setup::{setup_from_strings, standard_setup};
pub use types::PlayerId;
