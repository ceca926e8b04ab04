//! Text encoding of boards used on the protocol channel.
//!
//! A board is a nested list of rows, e.g. `[[0, 1], [2, 0]]`. Tuples
//! (`((0, 1), (2, 0))`) are accepted as well since the game manager may send
//! either form. Cells are `0` (empty), `1` (dark) and `2` (light).

use crate::core::{Board, BoardError, Cell};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected character {0:?} in board")]
    UnexpectedChar(char),
    #[error("invalid cell value {0}")]
    InvalidCell(u64),
    #[error("unbalanced brackets in board")]
    Unbalanced,
    #[error(transparent)]
    Shape(#[from] BoardError),
}

pub fn decode_board(line: &str) -> Result<Board, DecodeError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut current: Vec<Cell> = Vec::new();
    let mut number: Option<u64> = None;
    let mut depth = 0usize;

    for ch in line.chars() {
        match ch {
            '[' | '(' => {
                depth += 1;
                if depth > 2 {
                    return Err(DecodeError::UnexpectedChar(ch));
                }
            }
            ']' | ')' => {
                flush_cell(&mut number, &mut current)?;
                match depth {
                    2 => rows.push(std::mem::take(&mut current)),
                    1 => {}
                    _ => return Err(DecodeError::Unbalanced),
                }
                depth -= 1;
            }
            '0'..='9' => {
                if depth != 2 {
                    return Err(DecodeError::UnexpectedChar(ch));
                }
                let digit = ch as u64 - '0' as u64;
                number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit));
            }
            ',' => flush_cell(&mut number, &mut current)?,
            c if c.is_whitespace() => {}
            c => return Err(DecodeError::UnexpectedChar(c)),
        }
    }

    if depth != 0 {
        return Err(DecodeError::Unbalanced);
    }

    Ok(Board::from_rows(rows)?)
}

fn flush_cell(number: &mut Option<u64>, row: &mut Vec<Cell>) -> Result<(), DecodeError> {
    if let Some(n) = number.take() {
        let cell = u8::try_from(n)
            .ok()
            .and_then(Cell::from_code)
            .ok_or(DecodeError::InvalidCell(n))?;
        row.push(cell);
    }
    Ok(())
}

pub fn encode_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|c| c.code().to_string()).collect();
            format!("[{}]", cells.join(", "))
        })
        .collect();
    format!("[{}]", rows.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup::standard_setup;

    #[test]
    fn test_decode_list_of_lists() {
        let board = decode_board("[[0, 1], [2, 0]]").unwrap();
        assert_eq!(board.size(), 2);
        assert_eq!(board.get(1, 0), Cell::Dark);
        assert_eq!(board.get(0, 1), Cell::Light);
    }

    #[test]
    fn test_decode_tuples_and_trailing_commas() {
        let board = decode_board("((0, 1,), (2, 0,),)").unwrap();
        assert_eq!(board.get(1, 0), Cell::Dark);
        assert_eq!(board.get(0, 1), Cell::Light);
    }

    #[test]
    fn test_encode_is_accepted_by_decoder() {
        let board = standard_setup(8);
        let text = encode_board(&board);
        assert!(text.starts_with("[[0, 0, 0"));
        assert_eq!(decode_board(&text).unwrap(), board);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            decode_board("[[0, 3], [0, 0]]"),
            Err(DecodeError::InvalidCell(3))
        );
        assert_eq!(decode_board("[[0, 0], [0, 0]"), Err(DecodeError::Unbalanced));
        assert_eq!(
            decode_board("[[0, a], [0, 0]]"),
            Err(DecodeError::UnexpectedChar('a'))
        );
        assert_eq!(
            decode_board("[[0, 0], [0]]"),
            Err(DecodeError::Shape(BoardError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            }))
        );
        assert_eq!(decode_board("[]"), Err(DecodeError::Shape(BoardError::Empty)));
    }
}
