use serde::{Deserialize, Serialize};
use std::fmt;

/// Side to move. Dark moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerId {
    #[default]
    Dark,
    Light,
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Dark => PlayerId::Light,
            PlayerId::Light => PlayerId::Dark,
        }
    }

    /// Parses the wire code (1 = dark, 2 = light).
    pub fn from_code(code: i64) -> Option<PlayerId> {
        match code {
            1 => Some(PlayerId::Dark),
            2 => Some(PlayerId::Light),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerId::Dark => write!(f, "dark"),
            PlayerId::Light => write!(f, "light"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        for p in [PlayerId::Dark, PlayerId::Light] {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_dark_moves_first() {
        assert_eq!(PlayerId::default(), PlayerId::Dark);
    }

    #[test]
    fn test_codes() {
        assert_eq!(PlayerId::from_code(1), Some(PlayerId::Dark));
        assert_eq!(PlayerId::from_code(2), Some(PlayerId::Light));
        assert_eq!(PlayerId::from_code(0), None);
        assert_eq!(PlayerId::from_code(-1), None);
    }
}
