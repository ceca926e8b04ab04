use super::types::PlayerId;
use serde::{Deserialize, Serialize};

/// Content of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Dark,
    Light,
}

impl Cell {
    pub fn disk(player: PlayerId) -> Cell {
        match player {
            PlayerId::Dark => Cell::Dark,
            PlayerId::Light => Cell::Light,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// 0 = empty, 1 = dark, 2 = light
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Dark => 1,
            Cell::Light => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Dark),
            2 => Some(Cell::Light),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => 'X',
            Cell::Light => 'O',
        }
    }
}
