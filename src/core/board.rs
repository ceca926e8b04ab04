use super::cell::Cell;
use super::r#move::Move;
use super::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

/// Immutable square board.
///
/// Cells are stored row-major. A board is never modified after construction;
/// [`Board::with_cells`] returns a new board, so a `Board` value can be used
/// directly as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Builds a board from a list of rows (outer index = row, inner = column).
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: r.len(),
                    size,
                });
            }
            cells.extend(r);
        }
        Ok(Board { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn get_checked(&self, col: isize, row: isize) -> Option<Cell> {
        if col < 0 || row < 0 || col as usize >= self.size || row as usize >= self.size {
            return None;
        }
        Some(self.get(col as usize, row as usize))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    pub fn count(&self, player: PlayerId) -> usize {
        let target = Cell::disk(player);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Returns a copy of this board with the given squares overwritten.
    pub fn with_cells<I>(&self, changes: I) -> Board
    where
        I: IntoIterator<Item = (Move, Cell)>,
    {
        let mut next = self.clone();
        for (mv, cell) in changes {
            next.cells[mv.row * next.size + mv.col] = cell;
        }
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
