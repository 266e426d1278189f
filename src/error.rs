use std::path::PathBuf;

use crate::game::Owner;

/// Reasons a drop request is rejected. None of these are fatal: the board and
/// game state are left exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range")]
    InvalidColumnIndex { column: usize },

    #[error("the game is already over")]
    MoveAfterGameOver,

    #[error("it is not {}'s turn", .owner.name())]
    OutOfTurn { owner: Owner },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
