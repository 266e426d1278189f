use crate::error::MoveError;

use super::Owner;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    Occupied(Owner),
    /// A disk that is part of the reported four-in-a-row.
    Winning(Owner),
}

impl CellState {
    /// Owner of the disk in this cell, winning or not
    pub fn owner(self) -> Option<Owner> {
        match self {
            CellState::Empty => None,
            CellState::Occupied(owner) | CellState::Winning(owner) => Some(owner),
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

/// A cell position. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub const fn new(row: usize, column: usize) -> Self {
        Coord { row, column }
    }
}

/// Letter shown above a column, `A` for column 0.
pub fn column_label(col: usize) -> char {
    debug_assert!(col < COLS);
    (b'A' + col as u8) as char
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn cell_at(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Columns that can still take a disk, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a disk in a column, returns where it landed
    pub fn drop_disk(&mut self, col: usize, owner: Owner) -> Result<Coord, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumnIndex { column: col });
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull { column: col });
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col].is_empty() {
                self.cells[row][col] = CellState::Occupied(owner);
                return Ok(Coord::new(row, col));
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Turn an occupied cell into a winning-highlight cell. Empty cells are
    /// left alone.
    pub(crate) fn mark_winning(&mut self, at: Coord) {
        if let CellState::Occupied(owner) = self.cells[at.row][at.column] {
            self.cells[at.row][at.column] = CellState::Winning(owner);
        }
    }

    /// Number of disks on the board
    pub fn disk_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_gravity(board: &Board) {
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if !board.cell_at(row, col).is_empty() {
                    assert!(
                        !board.cell_at(row + 1, col).is_empty(),
                        "floating disk at ({}, {})",
                        row,
                        col
                    );
                }
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.cell_at(row, col), CellState::Empty);
            }
        }
        assert_eq!(board.disk_count(), 0);
        assert_eq!(board.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_disk() {
        let mut board = Board::new();

        // First disk lands at the bottom
        let at = board.drop_disk(3, Owner::Human).unwrap();
        assert_eq!(at, Coord::new(5, 3));
        assert_eq!(board.cell_at(5, 3), CellState::Occupied(Owner::Human));

        // Second disk stacks on top
        let at = board.drop_disk(3, Owner::Computer).unwrap();
        assert_eq!(at, Coord::new(4, 3));
        assert_eq!(board.cell_at(4, 3), CellState::Occupied(Owner::Computer));
    }

    #[test]
    fn test_drop_changes_only_one_cell() {
        let mut board = Board::new();
        board.drop_disk(2, Owner::Human).unwrap();
        let before = board;

        let at = board.drop_disk(5, Owner::Computer).unwrap();
        for row in 0..ROWS {
            for col in 0..COLS {
                if Coord::new(row, col) == at {
                    assert_eq!(before.cell_at(row, col), CellState::Empty);
                } else {
                    assert_eq!(board.cell_at(row, col), before.cell_at(row, col));
                }
            }
        }
    }

    #[test]
    fn test_gravity_holds_for_every_drop() {
        let mut board = Board::new();
        let mut owner = Owner::Human;
        // Uneven fill across all columns
        for (i, col) in [0, 6, 3, 3, 1, 0, 5, 3, 2, 6, 6, 4, 0, 3]
            .into_iter()
            .enumerate()
        {
            let at = board.drop_disk(col, owner).unwrap();
            assert_eq!(board.disk_count(), i + 1);
            if at.row + 1 < ROWS {
                assert!(!board.cell_at(at.row + 1, col).is_empty());
            }
            assert_gravity(&board);
            owner = owner.other();
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_disk(0, Owner::Human).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(
            board.drop_disk(0, Owner::Computer),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before);
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_disk(7, Owner::Human),
            Err(MoveError::InvalidColumnIndex { column: 7 })
        );
        assert!(board.is_column_full(7));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            assert!(!board.is_full());
            for _ in 0..ROWS {
                board.drop_disk(col, Owner::Human).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
        assert_eq!(board.disk_count(), ROWS * COLS);
    }

    #[test]
    fn test_mark_winning_keeps_owner() {
        let mut board = Board::new();
        board.drop_disk(1, Owner::Computer).unwrap();
        board.mark_winning(Coord::new(5, 1));
        board.mark_winning(Coord::new(4, 1));

        assert_eq!(board.cell_at(5, 1), CellState::Winning(Owner::Computer));
        assert_eq!(board.cell_at(5, 1).owner(), Some(Owner::Computer));
        assert_eq!(board.cell_at(4, 1), CellState::Empty);
    }

    #[test]
    fn test_column_labels() {
        assert_eq!(column_label(0), 'A');
        assert_eq!(column_label(6), 'G');
    }
}
