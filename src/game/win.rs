//! Four-in-a-row detection over the whole board.
//!
//! Directions are tried in a fixed order: horizontal, vertical, rising
//! diagonal, falling diagonal. Within a direction, start cells are visited
//! top-to-bottom, then left-to-right. The first line found is the one
//! reported, even when several exist at once.

use super::{Board, Coord, Owner, COLS, ROWS};

/// The four cells of a winning line, ordered from the start cell outward.
pub type WinningLine = [Coord; 4];

/// Step vectors as (row delta, column delta), in scan order
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal, left to right
    (1, 0),  // Vertical, top to bottom
    (-1, 1), // Rising diagonal, bottom-left to top-right
    (1, 1),  // Falling diagonal, top-left to bottom-right
];

/// Find the first four-in-a-row of `owner`'s disks, if any
pub fn find_winning_line(board: &Board, owner: Owner) -> Option<WinningLine> {
    for (dr, dc) in DIRECTIONS {
        for row in 0..ROWS {
            for col in 0..COLS {
                if let Some(line) = line_from(row, col, dr, dc) {
                    if line
                        .iter()
                        .all(|at| board.cell_at(at.row, at.column).owner() == Some(owner))
                    {
                        return Some(line);
                    }
                }
            }
        }
    }
    None
}

/// Flag every cell of `line` as part of the win
pub fn mark_winning_line(board: &mut Board, line: &WinningLine) {
    for &at in line {
        board.mark_winning(at);
    }
}

/// The four coordinates starting at (row, col) along (dr, dc), or `None` if
/// the line would leave the board.
fn line_from(row: usize, col: usize, dr: isize, dc: isize) -> Option<WinningLine> {
    let end_row = row as isize + 3 * dr;
    let end_col = col as isize + 3 * dc;
    if end_row < 0 || end_row >= ROWS as isize || end_col < 0 || end_col >= COLS as isize {
        return None;
    }

    let mut line = [Coord::new(row, col); 4];
    for (k, at) in line.iter_mut().enumerate().skip(1) {
        let k = k as isize;
        *at = Coord::new((row as isize + k * dr) as usize, (col as isize + k * dc) as usize);
    }
    Some(line)
}
