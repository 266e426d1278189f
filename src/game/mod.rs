//! Core Connect Four rules: board, disk owners, four-in-a-row detection, and
//! the turn-driven engine.

mod board;
mod engine;
mod player;
pub mod win;

pub use board::{column_label, Board, CellState, Coord, COLS, ROWS};
pub use engine::{GameEngine, GameState};
pub use player::Owner;
pub use win::{find_winning_line, WinningLine};
