use crate::core::{Board, Cell, Move};

/// Builds a board from whitespace-separated symbols, one string per row.
///
/// `X`/`x` (or `1`) is a dark disk, `O`/`o` (or `2`) a light disk, anything
/// else an empty square. Rows shorter than the first row are padded with
/// empty squares.
pub fn setup_from_strings(setup: &[&str]) -> Board {
    let size = setup.len();
    let mut changes = Vec::new();

    for (y, row) in setup.iter().enumerate() {
        for (x, s) in row.split_whitespace().enumerate().take(size) {
            let cell = match s {
                "X" | "x" | "1" => Cell::Dark,
                "O" | "o" | "2" => Cell::Light,
                _ => continue,
            };
            changes.push((Move::new(x, y), cell));
        }
    }

    Board::new(size).with_cells(changes)
}

/// Standard opening position: four disks in the centre, light on the
/// main diagonal.
pub fn standard_setup(size: usize) -> Board {
    let hi = size / 2;
    let lo = hi.saturating_sub(1);
    Board::new(size).with_cells([
        (Move::new(lo, lo), Cell::Light),
        (Move::new(hi, hi), Cell::Light),
        (Move::new(hi, lo), Cell::Dark),
        (Move::new(lo, hi), Cell::Dark),
    ])
}
