use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::ai::{Mover, RandomMover};
use crate::error::MoveError;

use super::win::{find_winning_line, mark_winning_line, WinningLine};
use super::{Board, CellState, Owner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress { turn: Owner },
    Won { by: Owner, line: WinningLine },
    Draw,
}

impl GameState {
    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress { .. })
    }

    /// Side to move, if the game is still running
    pub fn turn(&self) -> Option<Owner> {
        match *self {
            GameState::InProgress { turn } => Some(turn),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::InProgress { turn } => write!(f, "{}'s turn", turn.name()),
            GameState::Won { by, .. } => write!(f, "{} wins!", by.name()),
            GameState::Draw => f.write_str("It's a draw!"),
        }
    }
}

/// Owns the board and game state, and plays the computer's reply after
/// every accepted human move.
pub struct GameEngine {
    board: Board,
    state: GameState,
    mover: Box<dyn Mover>,
    moves_played: usize,
}

impl GameEngine {
    /// Fresh game against a random opponent. Human moves first.
    pub fn new_game() -> Self {
        Self::with_mover(Box::new(RandomMover::new()))
    }

    /// Fresh game against the given opponent strategy
    pub fn with_mover(mover: Box<dyn Mover>) -> Self {
        GameEngine {
            board: Board::new(),
            state: GameState::InProgress { turn: Owner::Human },
            mover,
            moves_played: 0,
        }
    }

    pub fn current_state(&self) -> GameState {
        self.state
    }

    pub fn cell_at(&self, row: usize, col: usize) -> CellState {
        self.board.cell_at(row, col)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of disks dropped by both sides so far
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn opponent_name(&self) -> &str {
        self.mover.name()
    }

    /// Run one drop for `owner` and resolve the resulting state.
    ///
    /// Rejected requests leave both the board and the state untouched.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, owner: Owner, column: usize) -> Result<GameState, MoveError> {
        let turn = match self.state {
            GameState::InProgress { turn } => turn,
            _ => return Err(MoveError::MoveAfterGameOver),
        };
        if turn != owner {
            return Err(MoveError::OutOfTurn { owner });
        }

        let at = self.board.drop_disk(column, owner)?;
        self.moves_played += 1;
        debug!(owner = owner.name(), row = at.row, column = at.column, "disk placed");

        self.state = if let Some(line) = find_winning_line(&self.board, owner) {
            mark_winning_line(&mut self.board, &line);
            info!(winner = owner.name(), ?line, "game won");
            GameState::Won { by: owner, line }
        } else if self.board.is_full() {
            info!(disks = self.board.disk_count(), "game drawn");
            GameState::Draw
        } else {
            GameState::InProgress {
                turn: owner.other(),
            }
        };

        Ok(self.state)
    }

    /// Play the human's drop and, if the game goes on, the computer's reply.
    #[instrument(skip(self))]
    pub fn try_human_move(&mut self, column: usize) -> Result<GameState, MoveError> {
        let state = self.apply_move(Owner::Human, column)?;
        if state.is_terminal() {
            return Ok(state);
        }

        let mut reply = self.mover.choose_column(&self.board);
        if self.board.is_column_full(reply) {
            // Out-of-range columns count as full too
            let fallback = self
                .board
                .legal_columns()
                .first()
                .copied()
                .ok_or(MoveError::ColumnFull { column: reply })?;
            warn!(
                mover = self.mover.name(),
                chosen = reply,
                fallback,
                "opponent chose an illegal column"
            );
            reply = fallback;
        }
        self.apply_move(Owner::Computer, reply)
    }

    /// Like [`GameEngine::try_human_move`], but rejected requests are ignored
    /// and the current state is returned unchanged.
    pub fn apply_human_move(&mut self, column: usize) -> GameState {
        if let Err(err) = self.try_human_move(column) {
            debug!(column, %err, "move ignored");
        }
        self.state
    }
}
