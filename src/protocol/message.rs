use crate::core::serialization::DecodeError;
use crate::core::{Move, PlayerId};
use crate::player::ai::{Algorithm, DepthLimit, SearchOptions};
use std::str::FromStr;
use thiserror::Error;

/// Written instead of a move when the engine has to pass.
pub const PASS: &str = "-1 -1";

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("setup line needs 5 comma-separated fields, got {0}")]
    SetupFieldCount(usize),
    #[error("invalid integer {value:?} for {field}")]
    InvalidInteger { field: &'static str, value: String },
    #[error("invalid color {0}, expected 1 (dark) or 2 (light)")]
    InvalidColor(i64),
    #[error("malformed status line {0:?}")]
    MalformedStatus(String),
    #[error("malformed board: {0}")]
    MalformedBoard(#[from] DecodeError),
    #[error("input ended while waiting for {0}")]
    UnexpectedEof(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parameters sent by the manager right after the engine's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSetup {
    pub color: PlayerId,
    pub depth: DepthLimit,
    pub options: SearchOptions,
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ProtocolError> {
    value
        .trim()
        .parse()
        .map_err(|_| ProtocolError::InvalidInteger {
            field,
            value: value.trim().to_string(),
        })
}

impl FromStr for SessionSetup {
    type Err = ProtocolError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() != 5 {
            return Err(ProtocolError::SetupFieldCount(fields.len()));
        }

        let color = parse_int("color", fields[0])?;
        let color = PlayerId::from_code(color).ok_or(ProtocolError::InvalidColor(color))?;
        let depth = DepthLimit::from_protocol(parse_int("depth limit", fields[1])?);
        let algorithm = if parse_int("algorithm", fields[2])? == 1 {
            Algorithm::Minimax
        } else {
            Algorithm::AlphaBeta
        };
        let caching = parse_int("caching", fields[3])? != 0;
        let ordering = parse_int("ordering", fields[4])? != 0;

        Ok(SessionSetup {
            color,
            depth,
            options: SearchOptions {
                algorithm,
                caching,
                ordering,
                bounded_cache: true,
            },
        })
    }
}

/// Per-turn status line. Scores are (dark, light).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Score { dark: u32, light: u32 },
    Final { dark: u32, light: u32 },
}

impl FromStr for Status {
    type Err = ProtocolError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || ProtocolError::MalformedStatus(line.trim().to_string());
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [kind, dark, light] = parts.as_slice() else {
            return Err(malformed());
        };
        let dark: u32 = dark.parse().map_err(|_| malformed())?;
        let light: u32 = light.parse().map_err(|_| malformed())?;

        match *kind {
            "SCORE" => Ok(Status::Score { dark, light }),
            "FINAL" => Ok(Status::Final { dark, light }),
            _ => Err(malformed()),
        }
    }
}

/// `col row`, or [`PASS`].
pub fn format_move(mv: Option<Move>) -> String {
    match mv {
        Some(mv) => format!("{} {}", mv.col, mv.row),
        None => PASS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setup() {
        let setup: SessionSetup = "2,-1,1,0,1\n".parse().unwrap();
        assert_eq!(setup.color, PlayerId::Light);
        assert_eq!(setup.depth, DepthLimit::Unlimited);
        assert_eq!(setup.options.algorithm, Algorithm::Minimax);
        assert!(!setup.options.caching);
        assert!(setup.options.ordering);

        let setup: SessionSetup = " 1, 4, 0, 1, 0".parse().unwrap();
        assert_eq!(setup.color, PlayerId::Dark);
        assert_eq!(setup.depth, DepthLimit::Limited(4));
        assert_eq!(setup.options.algorithm, Algorithm::AlphaBeta);
        assert!(setup.options.caching);
    }

    #[test]
    fn test_parse_setup_errors() {
        assert!(matches!(
            "1,2,3".parse::<SessionSetup>(),
            Err(ProtocolError::SetupFieldCount(3))
        ));
        assert!(matches!(
            "3,2,1,0,0".parse::<SessionSetup>(),
            Err(ProtocolError::InvalidColor(3))
        ));
        assert!(matches!(
            "1,x,1,0,0".parse::<SessionSetup>(),
            Err(ProtocolError::InvalidInteger { field: "depth limit", .. })
        ));
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            "SCORE 2 2".parse::<Status>().unwrap(),
            Status::Score { dark: 2, light: 2 }
        );
        assert_eq!(
            "FINAL 33 31\n".parse::<Status>().unwrap(),
            Status::Final {
                dark: 33,
                light: 31
            }
        );
        assert!("SCORE 2".parse::<Status>().is_err());
        assert!("MOVE 1 2".parse::<Status>().is_err());
        assert!("SCORE a 2".parse::<Status>().is_err());
    }

    #[test]
    fn test_format_move() {
        assert_eq!(format_move(Some(Move::new(3, 2))), "3 2");
        assert_eq!(format_move(None), "-1 -1");
    }
}
