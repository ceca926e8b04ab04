pub mod ai;
pub mod controller;

pub use ai::{RandomAI, SearchAI};
pub use controller::PlayerController;
